//! Dataset loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading a dataset or reading its records.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The input file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value is not an array
    #[error("dataset must be a JSON array of stop records")]
    NotAnArray,

    /// An array element is not a JSON object
    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },

    /// A record lacks a field or has a value of the wrong type
    #[error("record {index} is malformed: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
