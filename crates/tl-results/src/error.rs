//! Error types for result reshaping.

use thiserror::Error;
use tl_core::CoreError;

/// Errors raised while reshaping solver output.
///
/// These indicate a violated solver/marshaller contract (the solver returned
/// sequences that disagree with the grid dimensions it was given), never a
/// client input problem.
#[derive(Error, Debug)]
pub enum ResultsError {
    #[error("Reshape error: {0}")]
    Shape(#[from] CoreError),

    #[error("Solver result vector too short: {actual} entries, need at least 7")]
    ResVector { actual: usize },
}

pub type ResultsResult<T> = Result<T, ResultsError>;
