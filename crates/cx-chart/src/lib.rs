//! cx-chart: turns a record's quantities and a parsed filter into chart data.
//!
//! Provides:
//! - `QuantityMap`: ordered name -> value lookup for one record
//! - `aggregate`: group expressions -> display points
//! - `compute_domain`: display points + scale settings -> value-axis range

pub mod aggregate;
pub mod domain;
pub mod quantity;

pub use aggregate::{DisplayPoint, aggregate, evaluate_group};
pub use domain::{AxisScale, Domain, HEADROOM, ScaleConfig, ScaleMode, compute_domain};
pub use quantity::QuantityMap;
