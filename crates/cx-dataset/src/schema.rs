//! Entry file schema.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// One simulation entry. Map order follows the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sequences: IndexMap<String, String>,
    #[serde(
        default,
        alias = "inputConcentrations",
        deserialize_with = "null_as_empty"
    )]
    pub input_concentrations: IndexMap<String, f64>,
    #[serde(
        default,
        alias = "complexConcentrations",
        deserialize_with = "null_as_empty"
    )]
    pub complex_concentrations: IndexMap<String, f64>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// All entries of one loaded file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub source: Option<PathBuf>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            source: None,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// File name for titles, if the dataset came from disk.
    pub fn display_name(&self) -> Option<String> {
        self.source
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
    }
}
