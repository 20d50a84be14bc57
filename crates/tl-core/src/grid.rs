//! Row-major 2-D grids reconstituted from flat solver output.

use crate::error::CoreError;
use crate::numeric::Real;

/// A dense 2-D grid backed by row-major flat storage.
///
/// Reshaping a flat solver sequence into a grid is a pure shape
/// reinterpretation: element order is preserved exactly. Rows run along the
/// first axis, so `get(i, j)` reads flat index `i * ny + j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2 {
    nx: usize,
    ny: usize,
    data: Vec<Real>,
}

impl Grid2 {
    /// Reinterpret a flat sequence as an `(nx, ny)` grid.
    ///
    /// A length mismatch means the solver violated its output contract and is
    /// reported as such rather than silently truncated or padded.
    pub fn from_flat(
        nx: usize,
        ny: usize,
        data: Vec<Real>,
        what: &'static str,
    ) -> Result<Self, CoreError> {
        if nx == 0 || ny == 0 {
            return Err(CoreError::InvalidArg {
                what: "grid dimensions must be positive",
            });
        }
        let expected = nx.checked_mul(ny).ok_or(CoreError::InvalidArg {
            what: "grid dimensions overflow",
        })?;
        if data.len() != expected {
            return Err(CoreError::ShapeMismatch {
                what,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { nx, ny, data })
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn get(&self, i: usize, j: usize) -> Real {
        self.data[i * self.ny + j]
    }

    pub fn row(&self, i: usize) -> &[Real] {
        &self.data[i * self.ny..(i + 1) * self.ny]
    }

    /// Iterate rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[Real]> {
        self.data.chunks_exact(self.ny)
    }

    /// Copy out as nested rows, the layout the serialized payloads carry.
    pub fn to_rows(&self) -> Vec<Vec<Real>> {
        self.rows().map(<[Real]>::to_vec).collect()
    }

    /// The mid-column sweep along the first axis (`value[i] = get(i, ny/2)`).
    ///
    /// Used for centerline line plots such as film thickness along the
    /// rolling direction.
    pub fn centerline(&self) -> Vec<Real> {
        let mid = self.ny / 2;
        (0..self.nx).map(|i| self.get(i, mid)).collect()
    }

    /// A transposed copy, `(ny, nx)` shaped.
    pub fn transposed(&self) -> Grid2 {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.ny {
            for i in 0..self.nx {
                data.push(self.get(i, j));
            }
        }
        Grid2 {
            nx: self.ny,
            ny: self.nx,
            data,
        }
    }

    /// Consume the grid back into its flat row-major storage.
    pub fn into_flat(self) -> Vec<Real> {
        self.data
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn reshape_then_flatten_round_trips(
            nx in 1usize..16,
            ny in 1usize..16,
            seed in any::<u64>(),
        ) {
            let flat: Vec<f64> = (0..nx * ny)
                .map(|k| (seed.wrapping_add(k as u64) % 1000) as f64)
                .collect();
            let grid = Grid2::from_flat(nx, ny, flat.clone(), "prop").unwrap();
            prop_assert_eq!(grid.into_flat(), flat);
        }
    }
}
