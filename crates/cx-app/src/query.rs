//! Query helpers for loaded datasets.

use cx_chart::QuantityMap;
use cx_dataset::{Dataset, Record};

/// Per-entry counts for listings.
#[derive(Debug, Clone, PartialEq)]
pub struct EntrySummary {
    /// 1-based entry position.
    pub position: usize,
    pub sequence_count: usize,
    pub input_count: usize,
    pub complex_count: usize,
}

pub fn summarize_entries(dataset: &Dataset) -> Vec<EntrySummary> {
    dataset
        .iter()
        .enumerate()
        .map(|(index, record)| EntrySummary {
            position: index + 1,
            sequence_count: record.sequences.len(),
            input_count: record.input_concentrations.len(),
            complex_count: record.complex_concentrations.len(),
        })
        .collect()
}

/// The chartable quantities of a record: its complex concentrations.
pub fn quantities_for(record: &Record) -> QuantityMap {
    record
        .complex_concentrations
        .iter()
        .map(|(name, value)| (name.as_str(), *value))
        .collect()
}

/// Concentrations are shown with two decimals in scientific notation.
pub fn format_concentration(value: f64) -> String {
    format!("{:.2e}", value)
}
