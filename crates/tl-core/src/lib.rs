//! tl-core: stable foundation for the tribolab solver bridge.
//!
//! Contains:
//! - numeric (Real + grid normalization + level interpolation)
//! - grid (row-major 2-D reshaping of flat solver output)
//! - error (shared error types)

pub mod error;
pub mod grid;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use grid::Grid2;
pub use numeric::*;
