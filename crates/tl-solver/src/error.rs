//! Error types for solver marshalling and invocation.

use std::path::PathBuf;

use thiserror::Error;
use tl_core::CoreError;

/// Errors that can occur while building solver input or invoking the backend.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Failed to launch solver backend {exe}: {source}")]
    Launch {
        exe: PathBuf,
        source: std::io::Error,
    },

    #[error("Solver protocol error: {what}")]
    Protocol { what: String },

    #[error("Solver rejected the case: {message}")]
    Rejected { message: String },

    #[error("Derived input error: {0}")]
    Derived(#[from] CoreError),

    #[error("I/O error talking to solver backend: {0}")]
    Io(#[from] std::io::Error),
}

pub type SolverResult<T> = Result<T, SolverError>;
