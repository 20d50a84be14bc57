//! Error types for the dispatch layer.

use crate::command::UnknownCommand;

/// Unified error for one command execution.
///
/// Wraps the per-stage errors so both the CLI and embedding callers see a
/// single failure surface. Nothing is retried or partially emitted; the
/// first error terminates the command.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Input error: {0}")]
    Config(#[from] tl_config::ConfigError),

    #[error(transparent)]
    UnknownCommand(#[from] UnknownCommand),

    #[error("Derived input error: {0}")]
    Derived(#[from] tl_core::CoreError),

    #[error("Solver error: {0}")]
    Solver(#[from] tl_solver::SolverError),

    #[error("Results error: {0}")]
    Results(#[from] tl_results::ResultsError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for dispatch operations.
pub type AppResult<T> = Result<T, AppError>;
