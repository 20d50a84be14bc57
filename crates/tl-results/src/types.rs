//! Result data types: serialized payloads, write-back values, and the plot
//! panel structures handed to the external render surface.

use serde::Serialize;
use tl_core::{Grid2, Real};

/// The dry-contact command's machine-readable result.
///
/// Key names and grid layout are a fixed consumer contract: axes are
/// coordinate vectors in mm, grids are `(nx, ny)` nested rows with the
/// rolling direction outermost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DryContactPayload {
    #[serde(rename = "x-axis")]
    pub x_axis: Vec<Real>,
    #[serde(rename = "y-axis")]
    pub y_axis: Vec<Real>,
    pub pressure: Vec<Vec<Real>>,
    pub initial: Vec<Vec<Real>>,
    pub deform: Vec<Vec<Real>>,
    #[serde(rename = "Roughness")]
    pub roughness: Vec<Vec<Real>>,
}

/// Solver-refined domain sizes, fed back into the System record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SysFeedback {
    pub domain_x: Real,
    pub domain_y: Real,
}

impl SysFeedback {
    /// Wire form: one decimal place, matching what the configuration store
    /// has always carried for these fields.
    pub fn wire_values(&self) -> (String, String) {
        (
            format!("{:.1}", self.domain_x),
            format!("{:.1}", self.domain_y),
        )
    }
}

/// Scalar EHL results, fed back into the EHLres record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EhlSummary {
    pub friction_coefficient: Real,
    /// Average film-thickness force as reported by the solver (unscaled).
    pub film_force_avg: Real,
    pub aspect_ratio: Real,
}

impl EhlSummary {
    /// Wire form: friction coefficient at 3 decimals, film force scaled
    /// x1000 at 3 decimals, aspect ratio at 2.
    pub fn wire_values(&self) -> [String; 3] {
        [
            format!("{:.3}", self.friction_coefficient),
            format!("{:.3}", self.film_force_avg * 1000.0),
            format!("{:.2}", self.aspect_ratio),
        ]
    }
}

/// A 3-D surface plot over a planar grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfacePanel {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub z_label: &'static str,
    pub x: Vec<Real>,
    pub y: Vec<Real>,
    /// `(x.len(), y.len())` shaped.
    pub values: Grid2,
}

/// A filled contour plot.
///
/// `values` rows correspond to `y`, columns to `x`. Depth-wise panels set
/// `invert_y` so depth increases downward.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourPanel {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x: Vec<Real>,
    pub y: Vec<Real>,
    pub values: Grid2,
    pub invert_y: bool,
}

/// A single line plot.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePanel {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x: Vec<Real>,
    pub y: Vec<Real>,
}

/// One labeled curve of a multi-curve sweep plot.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepCurve {
    pub label: String,
    pub x: Vec<Real>,
    pub y: Vec<Real>,
}

/// A family of per-level curves sharing one pair of axes.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPanel {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub curves: Vec<SweepCurve>,
    pub x_limits: Option<(Real, Real)>,
    pub y_limits: Option<(Real, Real)>,
}

/// Everything an EHL-contact run hands to the render surface.
#[derive(Debug, Clone, PartialEq)]
pub struct EhlContactView {
    pub roughness: SurfacePanel,
    pub pressure: SurfacePanel,
    pub film_thickness: SurfacePanel,
    pub friction_shear: SurfacePanel,
    pub film_contour: ContourPanel,
    pub film_centerline: LinePanel,
    pub temp_mean: SurfacePanel,
    pub temp_max: SurfacePanel,
    /// Present only when the System shear-output flag is set.
    pub shear_xz: Option<ContourPanel>,
    pub shear_max: Option<ContourPanel>,
}

/// Everything an EHL batch run hands to the render surface.
#[derive(Debug, Clone, PartialEq)]
pub struct EhlBatchView {
    /// Interpolated pressure levels, one per curve, for labeling.
    pub levels: Vec<Real>,
    pub pressure: SweepPanel,
    pub film_thickness: SweepPanel,
    pub temp_mean: SweepPanel,
}

/// The external visualization surface.
///
/// The bridge guarantees panel shapes and axis semantics; rendering is the
/// collaborator's problem.
pub trait RenderSurface {
    fn show_ehl_contact(&mut self, view: &EhlContactView);
    fn show_ehl_batch(&mut self, view: &EhlBatchView);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sys_feedback_formats_to_one_decimal() {
        let feedback = SysFeedback {
            domain_x: 5720.31,
            domain_y: 12.68,
        };
        let (x, y) = feedback.wire_values();
        assert_eq!(x, "5720.3");
        assert_eq!(y, "12.7");
    }

    #[test]
    fn ehl_summary_scales_and_formats() {
        let summary = EhlSummary {
            friction_coefficient: 0.041666,
            film_force_avg: 0.00125,
            aspect_ratio: 0.849,
        };
        assert_eq!(
            summary.wire_values(),
            ["0.042".to_string(), "1.250".to_string(), "0.85".to_string()]
        );
    }

    #[test]
    fn dry_payload_serializes_with_contract_keys() {
        let payload = DryContactPayload {
            x_axis: vec![0.0, 1.0],
            y_axis: vec![0.0],
            pressure: vec![vec![1.0], vec![2.0]],
            initial: vec![vec![0.1], vec![0.2]],
            deform: vec![vec![0.3], vec![0.4]],
            roughness: vec![vec![0.5], vec![0.6]],
        };

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&payload).unwrap()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["Roughness", "deform", "initial", "pressure", "x-axis", "y-axis"]
        );
        assert_eq!(value["pressure"][1][0], 2.0);
    }
}
