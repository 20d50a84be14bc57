//! Numeric helpers shared across the bridge.

use crate::error::CoreError;

/// Floating point type used throughout the system.
pub type Real = f64;

/// Round a requested grid resolution up to the next power of two.
///
/// The solver's spectral kernels require power-of-two grid sizes along every
/// axis. An exact power of two passes through unchanged.
pub fn next_pow2(n: u32) -> Result<u32, CoreError> {
    if n == 0 {
        return Err(CoreError::GridResolution { requested: n });
    }
    n.checked_next_power_of_two()
        .ok_or(CoreError::GridResolution { requested: n })
}

/// Linearly interpolated levels from `lo` to `hi`, both endpoints included.
///
/// Requires at least two levels; the step is `(hi - lo) / (count - 1)`.
pub fn linear_levels(lo: Real, hi: Real, count: usize) -> Result<Vec<Real>, CoreError> {
    if count < 2 {
        return Err(CoreError::LevelCount { count });
    }

    let delta = (hi - lo) / (count - 1) as Real;
    let mut levels = Vec::with_capacity(count);
    for i in 0..count {
        levels.push(lo + i as Real * delta);
    }

    // Ensure exact endpoint
    levels[count - 1] = hi;
    Ok(levels)
}
