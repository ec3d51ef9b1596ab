//! Dataset loading.
//!
//! The input is a JSON array of stop records. Records are kept as raw
//! key/value maps first, because the field check has to see values of
//! the wrong primitive type; [`Dataset::stop_records`] then converts them
//! into typed [`StopRecord`]s for the remaining checks.

mod error;

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::domain::StopRecord;

pub use error::DatasetError;

/// A record exactly as it appeared in the input.
pub type RawRecord = Map<String, Value>;

/// An in-memory snapshot of the whole input.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<RawRecord>,
}

impl Dataset {
    /// Load a dataset from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_json_str(&text)?;
        info!(
            path = %path.display(),
            records = dataset.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Parse a dataset from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, DatasetError> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Array(items) = value else {
            return Err(DatasetError::NotAnArray);
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => Ok(map),
                _ => Err(DatasetError::NotAnObject { index }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_records(records))
    }

    /// Wrap records that are already in memory.
    pub fn from_records(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// Returns the raw records in input order.
    pub fn raw_records(&self) -> &[RawRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Convert every record into a typed [`StopRecord`], in input order.
    ///
    /// Fails on the first record that is missing a known field or holds a
    /// value of the wrong primitive type.
    pub fn stop_records(&self) -> Result<Vec<StopRecord>, DatasetError> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                serde_json::from_value(Value::Object(raw.clone())).map_err(|source| {
                    debug!(index, error = %source, "Record cannot be converted");
                    DatasetError::MalformedRecord { index, source }
                })
            })
            .collect()
    }
}
