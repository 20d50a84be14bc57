//! End-to-end dispatch tests against a scripted solver backend.

use std::cell::RefCell;
use std::collections::BTreeMap;

use tl_app::{Command, CommandOutcome, run_command};
use tl_config::{CasePayload, WireRecord};
use tl_results::{EhlBatchView, EhlContactView, RenderSurface};
use tl_solver::{
    ContactSolver, DryContactRaw, EhlBatchRaw, EhlContactRaw, SolverArg, SolverResult,
};

fn wire(values: &[&str]) -> WireRecord {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (i.to_string(), v.to_string()))
        .collect()
}

fn sample_payload() -> CasePayload {
    CasePayload {
        roller_data: wire(&[
            "10", "10", "20", "2.0e9", "20", "2.0e9", "206000", "206000", "0.3", "0.3", "7850",
            "7850", "460", "460", "47", "47", "1.17e-5", "1.17e-5", "40", "40", "2.2", "1.8",
            "2.2", "1.8", "2.0e9", "2.0e9", "C", "", "",
        ]),
        dent_data: wire(&["NoDent", "", "", "", "", "", "", ""]),
        lub_data: wire(&[
            "Nw", "N", "40", "100", "0.1749", "0.01742", "2.273e-8", "1.614e-8", "", "", "", "",
            "0.0411", "1880", "0.14", "890", "6.4e-4", "200", "500", "4",
        ]),
        sys_data: wire(&[
            "0", "0.15", "5720", "0", "100", "50", "30", "2.5", "1.5", "3", "F", "N", "N", "N",
            "run-1", "0.1", "0.0", "3.0", "200", "500",
        ]),
        ehl_res: wire(&["", "", ""]),
    }
}

/// Scripted backend: records the vectors it was called with and returns
/// well-shaped output for the grid sizes it finds there.
#[derive(Default)]
struct ScriptedSolver {
    calls: RefCell<Vec<BTreeMap<&'static str, Vec<SolverArg>>>>,
}

impl ScriptedSolver {
    fn grid(sys: &[SolverArg]) -> (usize, usize, usize) {
        let dim = |arg: &SolverArg| match arg {
            SolverArg::Int(n) => *n as usize,
            other => panic!("grid dim not an Int: {other:?}"),
        };
        (dim(&sys[4]), dim(&sys[5]), dim(&sys[6]))
    }

    fn record(
        &self,
        roller: &[SolverArg],
        dent: &[SolverArg],
        sys: &[SolverArg],
        lub: Option<&[SolverArg]>,
    ) {
        let mut call = BTreeMap::new();
        call.insert("roller", roller.to_vec());
        call.insert("dent", dent.to_vec());
        call.insert("sys", sys.to_vec());
        if let Some(lub) = lub {
            call.insert("lub", lub.to_vec());
        }
        self.calls.borrow_mut().push(call);
    }
}

impl ContactSolver for ScriptedSolver {
    fn dry_contact(
        &self,
        roller: &[SolverArg],
        dent: &[SolverArg],
        sys: &[SolverArg],
    ) -> SolverResult<DryContactRaw> {
        self.record(roller, dent, sys, None);
        let (nx, ny, _) = Self::grid(sys);
        Ok(DryContactRaw {
            res: vec![0.0, 0.0, 0.0, 0.0, 0.0, 5720.31, 12.68],
            x_coords: (0..nx).map(|i| i as f64).collect(),
            y_coords: (0..ny).map(|j| j as f64).collect(),
            z_coords: Vec::new(),
            pressure: vec![1.0; nx * ny],
            initial_gap: vec![2.0; nx * ny],
            deformed_surface: vec![3.0; nx * ny],
            roughness: vec![4.0; nx * ny],
            pdf_bins: Vec::new(),
            pdf_values: Vec::new(),
            shear_xz: Vec::new(),
            shear_max: Vec::new(),
        })
    }

    fn ehl_contact(
        &self,
        roller: &[SolverArg],
        dent: &[SolverArg],
        sys: &[SolverArg],
        lub: &[SolverArg],
    ) -> SolverResult<EhlContactRaw> {
        self.record(roller, dent, sys, Some(lub));
        let (nx, ny, nz) = Self::grid(sys);
        Ok(EhlContactRaw {
            res: vec![0.0, 0.0, 0.0, 0.0, 0.0, 5800.04, 13.25],
            x_coords: (0..nx).map(|i| i as f64).collect(),
            y_coords: (0..ny).map(|j| j as f64).collect(),
            z_coords: (0..nz).map(|k| k as f64).collect(),
            roughness: vec![0.5; nx * ny],
            pressure: vec![900.0; nx * ny],
            film_thickness: vec![0.002; nx * ny],
            friction_shear: vec![12.0; nx * ny],
            temp_mean: vec![55.0; nx * ny],
            temp_max: vec![71.0; nx * ny],
            shear_xz: vec![8.0; nz * nx],
            shear_max: vec![9.0; nz * nx],
            friction_coefficient: 0.0417,
            film_force_avg: 0.00125,
            aspect_ratio: 0.846,
        })
    }

    fn ehl_batch(
        &self,
        roller: &[SolverArg],
        dent: &[SolverArg],
        sys: &[SolverArg],
        lub: &[SolverArg],
    ) -> SolverResult<EhlBatchRaw> {
        self.record(roller, dent, sys, Some(lub));
        let (nx, _, _) = Self::grid(sys);
        let nl = match lub[19] {
            SolverArg::Int(n) => n as usize,
            ref other => panic!("level count not an Int: {other:?}"),
        };
        Ok(EhlBatchRaw {
            half_width: 0.5,
            x_coords: (0..nl * nx).map(|k| k as f64).collect(),
            pressure: vec![800.0; nl * nx],
            film_thickness: vec![0.001; nl * nx],
            temp_mean: vec![48.0; nl * nx],
        })
    }
}

/// Render surface that keeps what it was shown.
#[derive(Default)]
struct RecordingSurface {
    contact_views: Vec<EhlContactView>,
    batch_views: Vec<EhlBatchView>,
}

impl RenderSurface for RecordingSurface {
    fn show_ehl_contact(&mut self, view: &EhlContactView) {
        self.contact_views.push(view.clone());
    }

    fn show_ehl_batch(&mut self, view: &EhlBatchView) {
        self.batch_views.push(view.clone());
    }
}

#[test]
fn dry_contact_normalizes_grid_and_emits_payload() {
    let solver = ScriptedSolver::default();
    let mut surface = RecordingSurface::default();
    let payload = sample_payload();

    let output = run_command(Command::DryContact, &payload, &solver, &mut surface).unwrap();

    // Requested (100, 50, 30) reaches the solver as (128, 64, 32)
    let calls = solver.calls.borrow();
    assert_eq!(calls.len(), 1);
    let sys = &calls[0]["sys"];
    assert_eq!(sys[4], SolverArg::int(128));
    assert_eq!(sys[5], SolverArg::int(64));
    assert_eq!(sys[6], SolverArg::int(32));
    assert!(!calls[0].contains_key("lub"));

    // Payload grids carry the normalized shape
    match output.outcome {
        CommandOutcome::DryContact(result) => {
            assert_eq!(result.pressure.len(), 128);
            assert_eq!(result.pressure[0].len(), 64);
            assert_eq!(result.x_axis.len(), 128);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    // Refined domain sizes land in the resolved payload at one decimal
    assert_eq!(output.resolved.sys_data["2"], "5720.3");
    assert_eq!(output.resolved.sys_data["3"], "12.7");
    // The caller's input is untouched
    assert_eq!(payload.sys_data["2"], "5720");

    // Dry contact never touches the render surface
    assert!(surface.contact_views.is_empty());
    assert!(surface.batch_views.is_empty());
}

#[test]
fn dry_contact_marshals_dent_defaults() {
    let solver = ScriptedSolver::default();
    let mut surface = RecordingSurface::default();

    run_command(Command::DryContact, &sample_payload(), &solver, &mut surface).unwrap();

    let calls = solver.calls.borrow();
    let dent = &calls[0]["dent"];
    assert_eq!(dent[0], SolverArg::tag("NoDent"));
    for arg in &dent[1..6] {
        assert_eq!(*arg, SolverArg::num(0.0));
    }
}

#[test]
fn ehl_contact_renders_and_writes_back_scalars() {
    let solver = ScriptedSolver::default();
    let mut surface = RecordingSurface::default();

    let output = run_command(
        Command::EhlContact,
        &sample_payload(),
        &solver,
        &mut surface,
    )
    .unwrap();

    // The render surface received one view without shear panels (flag N)
    assert_eq!(surface.contact_views.len(), 1);
    let view = &surface.contact_views[0];
    assert_eq!(view.pressure.values.nx(), 128);
    assert_eq!(view.pressure.values.ny(), 64);
    assert!(view.shear_xz.is_none());

    // Scalars land in EHLres with fixed formatting
    assert_eq!(output.resolved.ehl_res["0"], "0.042");
    assert_eq!(output.resolved.ehl_res["1"], "1.250");
    assert_eq!(output.resolved.ehl_res["2"], "0.85");
    assert_eq!(output.resolved.sys_data["2"], "5800.0");

    match output.outcome {
        CommandOutcome::EhlContact(summary) => {
            assert_eq!(summary.friction_coefficient, 0.0417);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn ehl_contact_with_shear_flag_ships_depth_panels() {
    let solver = ScriptedSolver::default();
    let mut surface = RecordingSurface::default();
    let mut payload = sample_payload();
    payload.sys_data.insert("11".to_string(), "Y".to_string());

    run_command(Command::EhlContact, &payload, &solver, &mut surface).unwrap();

    let view = &surface.contact_views[0];
    let shear = view.shear_xz.as_ref().unwrap();
    // Depth-wise layout: (nz, nx)
    assert_eq!((shear.values.nx(), shear.values.ny()), (32, 128));
    assert!(shear.invert_y);
}

#[test]
fn ehl_batch_sweeps_interpolated_levels() {
    let solver = ScriptedSolver::default();
    let mut surface = RecordingSurface::default();

    let output = run_command(Command::EhlBatch, &sample_payload(), &solver, &mut surface).unwrap();

    match output.outcome {
        CommandOutcome::EhlBatch { levels } => {
            assert_eq!(levels, vec![200.0, 300.0, 400.0, 500.0]);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    assert_eq!(surface.batch_views.len(), 1);
    let view = &surface.batch_views[0];
    assert_eq!(view.pressure.curves.len(), 4);
    assert_eq!(view.pressure.curves[0].label, "P=200");
    assert_eq!(view.pressure.curves[0].x.len(), 128);
    // Batch write-back: nothing changes in the resolved payload
    assert_eq!(output.resolved, sample_payload());
}
