//! cx-core: shared foundation for complexplot.
//!
//! Contains:
//! - numeric (Real + tolerances + finite parsing helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CxError, CxResult};
pub use numeric::*;
