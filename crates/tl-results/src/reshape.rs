//! Flat-to-structured reshaping of solver output.
//!
//! Shapes come from the normalized grid dimensions the solver was called
//! with; a sequence that disagrees with them is a contract violation and
//! fails the command. Axis units follow the solver convention: spatial
//! coordinates in mm, pressure and shear in MPa, film thickness and
//! roughness in micron, temperature in degrees C.

use tl_core::{Grid2, Real};
use tl_solver::{DryContactRaw, EhlBatchRaw, EhlContactRaw, GridDims};

use crate::error::{ResultsError, ResultsResult};
use crate::types::{
    ContourPanel, DryContactPayload, EhlBatchView, EhlContactView, EhlSummary, LinePanel,
    SurfacePanel, SweepCurve, SweepPanel, SysFeedback,
};

const ROLLING_MM: &str = "Rolling Direction (mm)";
const AXIAL_MM: &str = "Axial Direction (mm)";
const X_MM: &str = "X (mm)";
const Z_MM: &str = "Z (mm)";

/// Refined domain sizes live at ordinals 5 and 6 of the solver's scalar
/// result vector.
fn refined_domain(res: &[f64]) -> ResultsResult<SysFeedback> {
    if res.len() < 7 {
        return Err(ResultsError::ResVector { actual: res.len() });
    }
    Ok(SysFeedback {
        domain_x: res[5],
        domain_y: res[6],
    })
}

/// Reshape a dry-contact run into its serialized payload plus the System
/// write-back values.
pub fn dry_contact_results(
    raw: DryContactRaw,
    dims: GridDims,
) -> ResultsResult<(DryContactPayload, SysFeedback)> {
    let feedback = refined_domain(&raw.res)?;
    let (nx, ny) = dims.planar();

    let pressure = Grid2::from_flat(nx, ny, raw.pressure, "pressure")?;
    let initial = Grid2::from_flat(nx, ny, raw.initial_gap, "initial separation")?;
    let deform = Grid2::from_flat(nx, ny, raw.deformed_surface, "deformed surface")?;
    let roughness = Grid2::from_flat(nx, ny, raw.roughness, "roughness")?;

    let payload = DryContactPayload {
        x_axis: raw.x_coords,
        y_axis: raw.y_coords,
        pressure: pressure.to_rows(),
        initial: initial.to_rows(),
        deform: deform.to_rows(),
        roughness: roughness.to_rows(),
    };

    Ok((payload, feedback))
}

/// Reshape an EHL-contact run into its render view plus both write-back
/// bundles.
pub fn ehl_contact_results(
    raw: EhlContactRaw,
    dims: GridDims,
    shear_output: bool,
) -> ResultsResult<(EhlContactView, SysFeedback, EhlSummary)> {
    let feedback = refined_domain(&raw.res)?;
    let summary = EhlSummary {
        friction_coefficient: raw.friction_coefficient,
        film_force_avg: raw.film_force_avg,
        aspect_ratio: raw.aspect_ratio,
    };

    let (nx, ny) = dims.planar();
    let roughness = Grid2::from_flat(nx, ny, raw.roughness, "roughness")?;
    let pressure = Grid2::from_flat(nx, ny, raw.pressure, "EHL pressure")?;
    let film = Grid2::from_flat(nx, ny, raw.film_thickness, "film thickness")?;
    let friction_shear = Grid2::from_flat(nx, ny, raw.friction_shear, "friction shear")?;
    let temp_mean = Grid2::from_flat(nx, ny, raw.temp_mean, "mean temperature")?;
    let temp_max = Grid2::from_flat(nx, ny, raw.temp_max, "maximum temperature")?;

    let film_centerline = LinePanel {
        title: "Film Thickness",
        x_label: ROLLING_MM,
        y_label: "Film Thickness (micron)",
        x: raw.x_coords.clone(),
        y: film.centerline(),
    };

    // Contour presentation is axial-major, hence the transpose.
    let film_contour = ContourPanel {
        title: "Film Thickness (micron)",
        x_label: ROLLING_MM,
        y_label: AXIAL_MM,
        x: raw.x_coords.clone(),
        y: raw.y_coords.clone(),
        values: film.transposed(),
        invert_y: false,
    };

    let (shear_xz, shear_max) = if shear_output {
        let (nz, nxp) = dims.depth_plane();
        let xz = Grid2::from_flat(nz, nxp, raw.shear_xz, "shear stress xz")?;
        let max = Grid2::from_flat(nz, nxp, raw.shear_max, "maximum shear stress")?;
        (
            Some(ContourPanel {
                title: "Shear Stress XZ (MPa)",
                x_label: X_MM,
                y_label: Z_MM,
                x: raw.x_coords.clone(),
                y: raw.z_coords.clone(),
                values: xz,
                invert_y: true,
            }),
            Some(ContourPanel {
                title: "Maximum Shear Stress (MPa)",
                x_label: X_MM,
                y_label: Z_MM,
                x: raw.x_coords.clone(),
                y: raw.z_coords.clone(),
                values: max,
                invert_y: true,
            }),
        )
    } else {
        (None, None)
    };

    let surface = |title, z_label, values| SurfacePanel {
        title,
        x_label: ROLLING_MM,
        y_label: AXIAL_MM,
        z_label,
        x: raw.x_coords.clone(),
        y: raw.y_coords.clone(),
        values,
    };

    let view = EhlContactView {
        roughness: surface("Surface Roughness", "Surface Roughness (micron)", roughness),
        pressure: surface("EHL Pressure", "EHL Pressure (MPa)", pressure),
        film_thickness: surface("Film Thickness", "Film Thickness (micron)", film),
        friction_shear: surface("Friction Shear", "Friction Shear (MPa)", friction_shear),
        film_contour,
        film_centerline,
        temp_mean: surface(
            "Fluid Temperature - Average",
            "Average Temperature (C)",
            temp_mean,
        ),
        temp_max: surface(
            "Fluid Temperature - Maximum",
            "Maximum Temperature (C)",
            temp_max,
        ),
        shear_xz,
        shear_max,
    };

    Ok((view, feedback, summary))
}

/// Shape the batch sweep view: per-level curves of `nx` samples each,
/// labeled by the interpolated pressure levels.
///
/// Levels are derived (and their count validated) by the caller before the
/// solver runs; curve `i` corresponds to `levels[i]`.
pub fn ehl_batch_results(
    raw: EhlBatchRaw,
    dims: GridDims,
    levels: Vec<Real>,
) -> ResultsResult<EhlBatchView> {
    let nl = levels.len();
    let nx = dims.nx as usize;
    let x = Grid2::from_flat(nl, nx, raw.x_coords, "batch x coordinates")?;
    let pressure = Grid2::from_flat(nl, nx, raw.pressure, "batch pressure")?;
    let film = Grid2::from_flat(nl, nx, raw.film_thickness, "batch film thickness")?;
    let temp_mean = Grid2::from_flat(nl, nx, raw.temp_mean, "batch mean temperature")?;

    let curves = |grid: &Grid2| -> Vec<SweepCurve> {
        levels
            .iter()
            .enumerate()
            .map(|(i, level)| SweepCurve {
                label: format!("P={level:.0}"),
                x: x.row(i).to_vec(),
                y: grid.row(i).to_vec(),
            })
            .collect()
    };

    let view = EhlBatchView {
        pressure: SweepPanel {
            title: "EHL Pressure",
            x_label: ROLLING_MM,
            y_label: "EHL Pressure (MPa)",
            curves: curves(&pressure),
            x_limits: None,
            y_limits: None,
        },
        film_thickness: SweepPanel {
            title: "Film Thickness",
            x_label: ROLLING_MM,
            y_label: "Film Thickness (micron)",
            curves: curves(&film),
            x_limits: Some((-1.2 * raw.half_width, 1.2 * raw.half_width)),
            y_limits: Some((0.0, 0.0025)),
        },
        temp_mean: SweepPanel {
            title: "Fluid Temperature - Average",
            x_label: ROLLING_MM,
            y_label: "Average Temperature (C)",
            curves: curves(&temp_mean),
            x_limits: None,
            y_limits: None,
        },
        levels,
    };

    Ok(view)
}
