//! Positional argument vectors for the solver call contract.
//!
//! The solver consumes each record group as a flat vector whose element
//! meaning is fixed by position. The functions here are the only producers of
//! those vectors; their append order mirrors the wire ordinal order of the
//! typed records field for field. Treat any reordering as an ABI break.

use serde::{Deserialize, Serialize};
use tl_config::{DentRecord, LubRecord, RollerRecord, SysRecord};
use tl_core::{Real, next_pow2};

use crate::error::SolverResult;

/// One positional solver argument.
///
/// Serializes untagged: numbers stay numbers on the protocol wire, tags stay
/// strings. `Int` is listed before `Num` so integral JSON values round-trip
/// as integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SolverArg {
    Int(i64),
    Num(Real),
    Tag(String),
}

impl SolverArg {
    pub fn num(value: Real) -> Self {
        Self::Num(value)
    }

    pub fn int(value: i64) -> Self {
        Self::Int(value)
    }

    pub fn tag(value: impl Into<String>) -> Self {
        Self::Tag(value.into())
    }
}

/// Normalized grid dimensions, the shape authority for all later reshaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    pub nx: u32,
    pub ny: u32,
    pub nz: u32,
}

impl GridDims {
    /// Planar field shape: (rolling, axial).
    pub fn planar(&self) -> (usize, usize) {
        (self.nx as usize, self.ny as usize)
    }

    /// Depth-wise field shape: (depth, rolling). Shear-stress fields use this
    /// layout instead of the planar one.
    pub fn depth_plane(&self) -> (usize, usize) {
        (self.nz as usize, self.nx as usize)
    }
}

/// Roller vector: 26 numeric fields followed by 3 categorical ones.
pub fn roller_args(roller: &RollerRecord) -> Vec<SolverArg> {
    vec![
        SolverArg::num(roller.radius_1),
        SolverArg::num(roller.radius_2),
        SolverArg::num(roller.length_1),
        SolverArg::num(roller.crown_radius_1),
        SolverArg::num(roller.length_2),
        SolverArg::num(roller.crown_radius_2),
        SolverArg::num(roller.elastic_modulus_1),
        SolverArg::num(roller.elastic_modulus_2),
        SolverArg::num(roller.poisson_ratio_1),
        SolverArg::num(roller.poisson_ratio_2),
        SolverArg::num(roller.density_1),
        SolverArg::num(roller.density_2),
        SolverArg::num(roller.specific_heat_1),
        SolverArg::num(roller.specific_heat_2),
        SolverArg::num(roller.conductivity_1),
        SolverArg::num(roller.conductivity_2),
        SolverArg::num(roller.thermal_expansion_1),
        SolverArg::num(roller.thermal_expansion_2),
        SolverArg::num(roller.bulk_temperature_1),
        SolverArg::num(roller.bulk_temperature_2),
        SolverArg::num(roller.roughness_rms_1),
        SolverArg::num(roller.roughness_wavelength_1),
        SolverArg::num(roller.roughness_rms_2),
        SolverArg::num(roller.roughness_wavelength_2),
        SolverArg::num(roller.hardness_1),
        SolverArg::num(roller.hardness_2),
        SolverArg::tag(roller.contact_kind.clone()),
        SolverArg::tag(roller.note_1.clone()),
        SolverArg::tag(roller.note_2.clone()),
    ]
}

/// Dent vector: kind tag, five geometry values (absent ones as 0.0), two
/// trailing tags. The 0.0 defaulting is unconditional; the solver receives a
/// full vector whether or not a defect is selected.
pub fn dent_args(dent: &DentRecord) -> Vec<SolverArg> {
    vec![
        SolverArg::tag(dent.defect_kind.clone()),
        SolverArg::num(dent.depth.unwrap_or(0.0)),
        SolverArg::num(dent.diameter.unwrap_or(0.0)),
        SolverArg::num(dent.shoulder_height.unwrap_or(0.0)),
        SolverArg::num(dent.position_x.unwrap_or(0.0)),
        SolverArg::num(dent.position_y.unwrap_or(0.0)),
        SolverArg::tag(dent.profile.clone()),
        SolverArg::tag(dent.note.clone()),
    ]
}

/// System vector. Grid resolution requests (ordinals 4-6) are normalized to
/// powers of two here; the returned [`GridDims`] carries the normalized
/// values that both the solver and all later reshaping must agree on.
pub fn sys_args(sys: &SysRecord) -> SolverResult<(Vec<SolverArg>, GridDims)> {
    let dims = GridDims {
        nx: next_pow2(sys.grid_nx)?,
        ny: next_pow2(sys.grid_ny)?,
        nz: next_pow2(sys.grid_nz)?,
    };

    let args = vec![
        SolverArg::num(sys.slide_to_roll),
        SolverArg::num(sys.rolling_velocity),
        SolverArg::num(sys.domain_x),
        SolverArg::num(sys.domain_y),
        SolverArg::int(i64::from(dims.nx)),
        SolverArg::int(i64::from(dims.ny)),
        SolverArg::int(i64::from(dims.nz)),
        SolverArg::num(sys.inlet_factor),
        SolverArg::num(sys.outlet_factor),
        SolverArg::num(sys.depth_factor),
        SolverArg::tag(sys.friction_model.clone()),
        SolverArg::tag(sys.shear_output.tag()),
        SolverArg::tag(sys.thermal_coupling.tag()),
        SolverArg::tag(sys.save_intermediate.tag()),
        SolverArg::tag(sys.run_tag.clone()),
        SolverArg::num(sys.pressure_tol),
        SolverArg::num(sys.relaxation),
        SolverArg::num(sys.load_tol),
        SolverArg::num(sys.max_inner_iter),
        SolverArg::num(sys.max_outer_iter),
    ];

    Ok((args, dims))
}

/// Lubricant vector. The non-Newtonian coefficients (ordinals 8-11) default
/// to 0.0 when absent, regardless of the rheology selector.
pub fn lub_args(lub: &LubRecord) -> Vec<SolverArg> {
    vec![
        SolverArg::tag(lub.rheology.tag()),
        SolverArg::tag(lub.supply.clone()),
        SolverArg::num(lub.ref_temp_low),
        SolverArg::num(lub.ref_temp_high),
        SolverArg::num(lub.viscosity_low),
        SolverArg::num(lub.viscosity_high),
        SolverArg::num(lub.pv_coeff_low),
        SolverArg::num(lub.pv_coeff_high),
        SolverArg::num(lub.shear_modulus_1.unwrap_or(0.0)),
        SolverArg::num(lub.shear_modulus_2.unwrap_or(0.0)),
        SolverArg::num(lub.power_law_index.unwrap_or(0.0)),
        SolverArg::num(lub.limit_shear_ratio.unwrap_or(0.0)),
        SolverArg::num(lub.temp_visc_coeff),
        SolverArg::num(lub.specific_heat),
        SolverArg::num(lub.conductivity),
        SolverArg::num(lub.density),
        SolverArg::num(lub.expansivity),
        SolverArg::num(lub.sweep_pressure_lo),
        SolverArg::num(lub.sweep_pressure_hi),
        SolverArg::int(i64::from(lub.sweep_levels)),
    ]
}
