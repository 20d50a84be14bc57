//! Typed configuration record groups.
//!
//! Struct fields are declared in wire ordinal order; the solver's positional
//! call contract follows the same order. Units are those the solver expects
//! on its inputs (mm, MPa, micron, degrees C) — values cross the ABI as raw
//! floats and are never converted inside the bridge.

use tl_core::Real;

/// A yes/no solver flag, `"Y"` / `"N"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Yes,
    No,
}

impl Toggle {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Y" => Some(Self::Yes),
            "N" => Some(Self::No),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Yes => "Y",
            Self::No => "N",
        }
    }

    pub fn is_set(self) -> bool {
        self == Self::Yes
    }
}

/// Lubricant rheology model selector, `"Nw"` / `"NNw"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rheology {
    Newtonian,
    NonNewtonian,
}

impl Rheology {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Nw" => Some(Self::Newtonian),
            "NNw" => Some(Self::NonNewtonian),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Newtonian => "Nw",
            Self::NonNewtonian => "NNw",
        }
    }
}

/// Geometry and material properties of the two rolling bodies.
///
/// Ordinals 0-25 are numeric, 26-28 categorical/free text. Paired fields
/// (`*_1` / `*_2`) describe body 1 and body 2 respectively.
#[derive(Debug, Clone, PartialEq)]
pub struct RollerRecord {
    /// Roller radius, body 1 [mm].
    pub radius_1: Real,
    /// Roller radius, body 2 [mm].
    pub radius_2: Real,
    /// Effective contact length, body 1 [mm].
    pub length_1: Real,
    /// Crown radius, body 1 [mm]; effectively flat profiles use a very large value.
    pub crown_radius_1: Real,
    /// Effective contact length, body 2 [mm].
    pub length_2: Real,
    /// Crown radius, body 2 [mm].
    pub crown_radius_2: Real,
    /// Elastic modulus, body 1 [MPa].
    pub elastic_modulus_1: Real,
    /// Elastic modulus, body 2 [MPa].
    pub elastic_modulus_2: Real,
    pub poisson_ratio_1: Real,
    pub poisson_ratio_2: Real,
    /// Density, body 1 [kg/m^3].
    pub density_1: Real,
    pub density_2: Real,
    /// Specific heat, body 1 [J/(kg K)].
    pub specific_heat_1: Real,
    pub specific_heat_2: Real,
    /// Thermal conductivity, body 1 [W/(m K)].
    pub conductivity_1: Real,
    pub conductivity_2: Real,
    /// Thermal expansion coefficient, body 1 [1/K].
    pub thermal_expansion_1: Real,
    pub thermal_expansion_2: Real,
    /// Bulk temperature, body 1 [C].
    pub bulk_temperature_1: Real,
    pub bulk_temperature_2: Real,
    /// RMS surface roughness, body 1 [micron].
    pub roughness_rms_1: Real,
    /// Roughness wavelength, body 1 [micron].
    pub roughness_wavelength_1: Real,
    pub roughness_rms_2: Real,
    pub roughness_wavelength_2: Real,
    /// Surface hardness, body 1 [MPa].
    pub hardness_1: Real,
    pub hardness_2: Real,
    /// Contact kind selector (e.g. `"C"` for cylindrical).
    pub contact_kind: String,
    pub note_1: String,
    pub note_2: String,
}

/// Surface defect descriptor.
///
/// `defect_kind` selects whether a defect is present (`"NoDent"` means none);
/// the geometry fields are optional on the wire and default to 0.0 when
/// absent. Defaulting is applied regardless of `defect_kind` — the solver
/// receives the full vector either way.
#[derive(Debug, Clone, PartialEq)]
pub struct DentRecord {
    pub defect_kind: String,
    /// Defect depth [micron].
    pub depth: Option<Real>,
    /// Defect diameter [micron].
    pub diameter: Option<Real>,
    /// Shoulder height at the defect rim [micron].
    pub shoulder_height: Option<Real>,
    /// Defect center offset in the rolling direction [mm].
    pub position_x: Option<Real>,
    /// Defect center offset in the axial direction [mm].
    pub position_y: Option<Real>,
    pub profile: String,
    pub note: String,
}

/// Solver run parameters: load/speed, grid resolution requests, mode flags
/// and convergence limits.
///
/// `domain_x` / `domain_y` are output-bearing: the solver reports refined
/// values after a dry-contact or EHL-contact run.
#[derive(Debug, Clone, PartialEq)]
pub struct SysRecord {
    /// Slide-to-roll ratio.
    pub slide_to_roll: Real,
    /// Rolling (entrainment) velocity [m/s].
    pub rolling_velocity: Real,
    /// Computational domain half-length, rolling direction [micron].
    pub domain_x: Real,
    /// Computational domain half-length, axial direction [micron].
    pub domain_y: Real,
    /// Requested grid resolution, rolling direction; normalized to a power of two.
    pub grid_nx: u32,
    /// Requested grid resolution, axial direction.
    pub grid_ny: u32,
    /// Requested grid resolution, depth direction.
    pub grid_nz: u32,
    /// Inlet zone extent factor.
    pub inlet_factor: Real,
    /// Outlet zone extent factor.
    pub outlet_factor: Real,
    /// Subsurface depth extent factor.
    pub depth_factor: Real,
    /// Friction model selector tag.
    pub friction_model: String,
    /// Emit subsurface shear-stress fields.
    pub shear_output: Toggle,
    /// Enable thermal coupling in the solver.
    pub thermal_coupling: Toggle,
    /// Persist intermediate solver state.
    pub save_intermediate: Toggle,
    /// Free-text run tag.
    pub run_tag: String,
    /// Pressure convergence tolerance.
    pub pressure_tol: Real,
    /// Under-relaxation factor.
    pub relaxation: Real,
    /// Load balance tolerance.
    pub load_tol: Real,
    /// Inner iteration limit (passed as float per the solver contract).
    pub max_inner_iter: Real,
    /// Outer iteration limit (passed as float per the solver contract).
    pub max_outer_iter: Real,
}

/// Lubricant descriptor.
///
/// The four non-Newtonian coefficients are optional on the wire and default
/// to 0.0; like the dent geometry they are defaulted unconditionally, even
/// under the Newtonian model.
#[derive(Debug, Clone, PartialEq)]
pub struct LubRecord {
    pub rheology: Rheology,
    /// Supply condition tag.
    pub supply: String,
    /// Lower viscosity reference temperature [C].
    pub ref_temp_low: Real,
    /// Upper viscosity reference temperature [C].
    pub ref_temp_high: Real,
    /// Dynamic viscosity at the lower reference temperature [Pa s].
    pub viscosity_low: Real,
    /// Dynamic viscosity at the upper reference temperature [Pa s].
    pub viscosity_high: Real,
    /// Pressure-viscosity coefficient at the lower reference temperature [1/Pa].
    pub pv_coeff_low: Real,
    /// Pressure-viscosity coefficient at the upper reference temperature [1/Pa].
    pub pv_coeff_high: Real,
    /// Limiting shear modulus, body-1 surface [MPa]. Non-Newtonian model only.
    pub shear_modulus_1: Option<Real>,
    /// Limiting shear modulus, body-2 surface [MPa]. Non-Newtonian model only.
    pub shear_modulus_2: Option<Real>,
    /// Shear-thinning power-law index. Non-Newtonian model only.
    pub power_law_index: Option<Real>,
    /// Limiting shear stress ratio. Non-Newtonian model only.
    pub limit_shear_ratio: Option<Real>,
    /// Viscosity-temperature coefficient [1/K].
    pub temp_visc_coeff: Real,
    /// Specific heat [J/(kg K)].
    pub specific_heat: Real,
    /// Thermal conductivity [W/(m K)].
    pub conductivity: Real,
    /// Density [kg/m^3].
    pub density: Real,
    /// Thermal expansivity [1/K].
    pub expansivity: Real,
    /// Batch sweep lower pressure bound [MPa].
    pub sweep_pressure_lo: Real,
    /// Batch sweep upper pressure bound [MPa].
    pub sweep_pressure_hi: Real,
    /// Number of batch sweep levels.
    pub sweep_levels: u32,
}

/// EHL scalar results, output-only.
///
/// The incoming wire record is usually empty; values are produced by an
/// EHL-contact run and written back with fixed decimal formatting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EhlResultRecord {
    pub friction_coefficient: Option<Real>,
    /// Average film-thickness force, scaled x1000 on write-back.
    pub film_force: Option<Real>,
    pub aspect_ratio: Option<Real>,
}

impl RollerRecord {
    pub const FIELDS: usize = 29;
}

impl DentRecord {
    pub const FIELDS: usize = 8;
}

impl SysRecord {
    pub const FIELDS: usize = 20;
}

impl LubRecord {
    pub const FIELDS: usize = 20;
}

impl EhlResultRecord {
    pub const FIELDS: usize = 3;
}
