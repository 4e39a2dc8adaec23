//! cx-dataset: simulation entry files and navigation over them.

pub mod navigator;
pub mod schema;

pub use navigator::RecordNavigator;
pub use schema::{Dataset, Record};

use serde_json::Value;
use tracing::info;

pub type DatasetResult<T> = Result<T, DatasetError>;

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Entry {} is not a valid record: {source}", .index + 1)]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a record object or an array of records, found {found}")]
    UnexpectedShape { found: &'static str },
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn record_from_value(index: usize, value: Value) -> DatasetResult<Record> {
    if !value.is_object() {
        return Err(DatasetError::UnexpectedShape {
            found: kind_of(&value),
        });
    }
    serde_json::from_value(value).map_err(|source| DatasetError::InvalidRecord { index, source })
}

/// Parse file contents. A lone record object becomes a one-entry dataset.
pub fn from_json_str(content: &str) -> DatasetResult<Dataset> {
    let value: Value = serde_json::from_str(content)?;
    let records = match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| record_from_value(index, item))
            .collect::<DatasetResult<Vec<_>>>()?,
        Value::Object(_) => vec![record_from_value(0, value)?],
        other => {
            return Err(DatasetError::UnexpectedShape {
                found: kind_of(&other),
            });
        }
    };
    Ok(Dataset::new(records))
}

pub fn load_json(path: &std::path::Path) -> DatasetResult<Dataset> {
    let content = std::fs::read_to_string(path)?;
    let mut dataset = from_json_str(&content)?;
    dataset.source = Some(path.to_path_buf());
    info!(path = %path.display(), entries = dataset.len(), "loaded dataset");
    Ok(dataset)
}
