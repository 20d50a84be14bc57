//! Error types for payload decoding and record validation.

use thiserror::Error;

/// Errors raised while decoding or validating client configuration.
///
/// All of these are client errors in the sense of the command pipeline: they
/// are surfaced before any solver invocation is attempted.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{record} record has {actual} fields, expected {expected}")]
    FieldCount {
        record: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{record} record is missing field {index}")]
    MissingField { record: &'static str, index: usize },

    #[error("{record} field {index} is not numeric: {value:?}")]
    NotNumeric {
        record: &'static str,
        index: usize,
        value: String,
    },

    #[error("{record} field {index} is not an integer count: {value:?}")]
    NotCount {
        record: &'static str,
        index: usize,
        value: String,
    },

    #[error("{record} field {index} has unknown tag {value:?}")]
    UnknownTag {
        record: &'static str,
        index: usize,
        value: String,
    },

    #[error("Malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
