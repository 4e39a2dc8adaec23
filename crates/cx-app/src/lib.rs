//! Shared application service layer for complexplot.
//!
//! This crate gives the CLI and the desktop UI one interface for loading
//! entry files, running the filter/aggregate/domain pipeline, and managing
//! view presets.

pub mod dataset_service;
pub mod error;
pub mod pipeline;
pub mod preset_service;
pub mod query;

// Re-export key types for convenience
pub use dataset_service::{load_dataset, load_non_empty};
pub use error::{AppError, AppResult};
pub use pipeline::{ChartView, ViewState, chart_record, render_view};
pub use preset_service::{ViewPreset, load_preset, save_preset};
pub use query::{EntrySummary, format_concentration, quantities_for, summarize_entries};
