//! Loading entry files.

use cx_dataset::{Dataset, DatasetError};
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Load a dataset from a JSON file.
pub fn load_dataset(path: &Path) -> AppResult<Dataset> {
    cx_dataset::load_json(path).map_err(|e| match e {
        DatasetError::Io(source) => AppError::DataFileRead {
            path: path.to_path_buf(),
            source,
        },
        other => AppError::DataFile {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })
}

/// Load a dataset that must contain at least one entry.
pub fn load_non_empty(path: &Path) -> AppResult<Dataset> {
    let dataset = load_dataset(path)?;
    if dataset.is_empty() {
        return Err(AppError::NoEntries);
    }
    Ok(dataset)
}
