//! Error taxonomy for vinflat-core.
//!
//! Every failure is fatal for a run: nothing is retried and no partial output
//! is produced. [`Error::InputShape`] is raised before any table is built;
//! [`Error::OutputWrite`] carries the destination and the underlying I/O cause.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The manufacturer table is not nested region → country → code → name.
    #[error("malformed manufacturer table at {path}: expected {expected}, found {found}")]
    InputShape {
        /// JSON-path-like location of the offending value, e.g. `$."Europe"."Germany"`.
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("failed to read manufacturer table from {path}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid VIN {vin:?}: {problem}")]
    InvalidVin {
        vin: String,
        problem: crate::vin::VinProblem,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub(crate) fn shape(path: impl Into<String>, expected: &'static str, found: &serde_json::Value) -> Self {
        Error::InputShape {
            path: path.into(),
            expected,
            found: json_kind(found),
        }
    }
}

/// Human-readable name of a JSON value's kind, used in shape errors.
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
