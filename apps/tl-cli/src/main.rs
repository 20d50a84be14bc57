use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tl_app::{AppError, AppResult, Command, CommandOutcome, run_command};
use tl_config::CasePayload;
use tl_results::{EhlBatchView, EhlContactView, RenderSurface, SurfacePanel};
use tl_solver::ProcessSolver;

#[derive(Parser)]
#[command(name = "tl-cli")]
#[command(about = "TriboLab CLI - contact mechanics / EHL solver bridge", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode and validate a case payload without touching the solver
    Validate {
        /// Path to the case payload JSON file, or "-" for stdin
        input: PathBuf,
    },
    /// Execute a solver command against a case payload
    Run {
        /// Command identifier: CalDryCont, CalEHLCont or CalEHLBatch
        command: String,
        /// Path to the case payload JSON file, or "-" for stdin
        input: PathBuf,
        /// Solver backend executable (defaults to $TRIBOSIM_EXE)
        #[arg(long)]
        solver: Option<PathBuf>,
        /// Extra argument passed to the backend on every call
        #[arg(long = "solver-arg")]
        solver_args: Vec<String>,
        /// Write the resolved payload (solver write-back applied) here
        #[arg(long)]
        resolved: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { input } => cmd_validate(&input),
        Commands::Run {
            command,
            input,
            solver,
            solver_args,
            resolved,
        } => cmd_run(&command, &input, solver, solver_args, resolved.as_deref()),
    }
}

fn read_payload(input: &Path) -> AppResult<CasePayload> {
    let text = if input == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };
    Ok(CasePayload::from_json(&text)?)
}

fn cmd_validate(input: &Path) -> AppResult<()> {
    let payload = read_payload(input)?;
    payload.decode()?;
    println!("✓ Case payload is valid");
    Ok(())
}

fn cmd_run(
    identifier: &str,
    input: &Path,
    solver_exe: Option<PathBuf>,
    solver_args: Vec<String>,
    resolved_out: Option<&Path>,
) -> AppResult<()> {
    let command: Command = identifier.parse()?;
    let payload = read_payload(input)?;

    let exe = solver_exe
        .or_else(|| std::env::var_os("TRIBOSIM_EXE").map(PathBuf::from))
        .ok_or_else(|| {
            AppError::InvalidInput(
                "no solver backend configured; pass --solver or set TRIBOSIM_EXE".to_string(),
            )
        })?;
    let mut solver = ProcessSolver::new(exe);
    for arg in solver_args {
        solver = solver.arg(arg);
    }

    let mut surface = LogSurface;
    let output = run_command(command, &payload, &solver, &mut surface)?;

    match output.outcome {
        CommandOutcome::DryContact(result) => {
            // stdout is reserved for this payload; everything else logs
            let mut stdout = io::stdout().lock();
            serde_json::to_writer(&mut stdout, &result)?;
            writeln!(stdout)?;
        }
        CommandOutcome::EhlContact(summary) => {
            tracing::info!(
                friction_coefficient = summary.friction_coefficient,
                film_force_avg = summary.film_force_avg,
                aspect_ratio = summary.aspect_ratio,
                "EHL contact run complete"
            );
        }
        CommandOutcome::EhlBatch { levels } => {
            tracing::info!(levels = levels.len(), "EHL batch run complete");
        }
    }

    if let Some(path) = resolved_out {
        fs::write(path, output.resolved.to_json()?)?;
    }

    Ok(())
}

/// Render surface for a headless run: reports panel geometry instead of
/// drawing. The desktop front end supplies the real one.
struct LogSurface;

impl LogSurface {
    fn log_surface_panel(panel: &SurfacePanel) {
        tracing::info!(
            title = panel.title,
            nx = panel.values.nx(),
            ny = panel.values.ny(),
            z_label = panel.z_label,
            "surface panel"
        );
    }
}

impl RenderSurface for LogSurface {
    fn show_ehl_contact(&mut self, view: &EhlContactView) {
        for panel in [
            &view.roughness,
            &view.pressure,
            &view.film_thickness,
            &view.friction_shear,
            &view.temp_mean,
            &view.temp_max,
        ] {
            Self::log_surface_panel(panel);
        }
        tracing::info!(
            title = view.film_contour.title,
            points = view.film_centerline.x.len(),
            "film contour and centerline panels"
        );
        if let Some(shear) = &view.shear_xz {
            tracing::info!(
                title = shear.title,
                nz = shear.values.nx(),
                nx = shear.values.ny(),
                "depth contour panel"
            );
        }
        if let Some(shear) = &view.shear_max {
            tracing::info!(
                title = shear.title,
                nz = shear.values.nx(),
                nx = shear.values.ny(),
                "depth contour panel"
            );
        }
    }

    fn show_ehl_batch(&mut self, view: &EhlBatchView) {
        for panel in [&view.pressure, &view.film_thickness, &view.temp_mean] {
            tracing::info!(
                title = panel.title,
                curves = panel.curves.len(),
                "sweep panel"
            );
        }
    }
}
