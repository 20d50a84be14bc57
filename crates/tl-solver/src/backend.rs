//! The solver entry-point contract.
//!
//! Three entry points, each taking the positional argument vectors from
//! [`crate::args`] and returning a raw output bundle of flat sequences and
//! scalars. The bundles mirror the solver's tuple returns one to one; nothing
//! is reshaped or interpreted at this layer.

use serde::{Deserialize, Serialize};
use tl_core::Real;

use crate::args::SolverArg;
use crate::error::SolverResult;

/// The external contact-mechanics / EHL solver.
///
/// Implementations are expected to be single-shot per call: a failed call is
/// not retried, and callers treat any error as fatal to the command.
pub trait ContactSolver {
    /// Dry (unlubricated) contact analysis.
    fn dry_contact(
        &self,
        roller: &[SolverArg],
        dent: &[SolverArg],
        sys: &[SolverArg],
    ) -> SolverResult<DryContactRaw>;

    /// Elastohydrodynamic contact analysis.
    fn ehl_contact(
        &self,
        roller: &[SolverArg],
        dent: &[SolverArg],
        sys: &[SolverArg],
        lub: &[SolverArg],
    ) -> SolverResult<EhlContactRaw>;

    /// EHL analysis swept over a sequence of pressure levels.
    fn ehl_batch(
        &self,
        roller: &[SolverArg],
        dent: &[SolverArg],
        sys: &[SolverArg],
        lub: &[SolverArg],
    ) -> SolverResult<EhlBatchRaw>;
}

/// Raw dry-contact output.
///
/// Planar fields are flat row-major `(nx, ny)` sequences; the shear fields
/// are `(nz, nx)` and only populated when the shear-output flag was set.
/// `res` is the solver's scalar result vector; the refined domain sizes sit
/// at ordinals 5 and 6.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DryContactRaw {
    pub res: Vec<Real>,
    pub x_coords: Vec<Real>,
    pub y_coords: Vec<Real>,
    pub z_coords: Vec<Real>,
    pub pressure: Vec<Real>,
    pub initial_gap: Vec<Real>,
    pub deformed_surface: Vec<Real>,
    pub roughness: Vec<Real>,
    pub pdf_bins: Vec<Real>,
    pub pdf_values: Vec<Real>,
    #[serde(default)]
    pub shear_xz: Vec<Real>,
    #[serde(default)]
    pub shear_max: Vec<Real>,
}

/// Raw EHL-contact output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EhlContactRaw {
    pub res: Vec<Real>,
    pub x_coords: Vec<Real>,
    pub y_coords: Vec<Real>,
    pub z_coords: Vec<Real>,
    pub roughness: Vec<Real>,
    pub pressure: Vec<Real>,
    pub film_thickness: Vec<Real>,
    pub friction_shear: Vec<Real>,
    pub temp_mean: Vec<Real>,
    pub temp_max: Vec<Real>,
    #[serde(default)]
    pub shear_xz: Vec<Real>,
    #[serde(default)]
    pub shear_max: Vec<Real>,
    pub friction_coefficient: Real,
    /// Average film-thickness force; scaled x1000 at write-back.
    pub film_force_avg: Real,
    pub aspect_ratio: Real,
}

/// Raw batch-sweep output: per-level sequences of `levels * nx` samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EhlBatchRaw {
    /// Contact half-width, used for presentation axis limits.
    pub half_width: Real,
    pub x_coords: Vec<Real>,
    pub pressure: Vec<Real>,
    pub film_thickness: Vec<Real>,
    pub temp_mean: Vec<Real>,
}
