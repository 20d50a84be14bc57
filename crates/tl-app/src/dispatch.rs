//! Command execution: validate, marshal, invoke, reshape, emit.

use tl_config::CasePayload;
use tl_core::{Real, linear_levels};
use tl_results::{
    DryContactPayload, EhlSummary, RenderSurface, dry_contact_results, ehl_batch_results,
    ehl_contact_results,
};
use tl_solver::{ContactSolver, dent_args, lub_args, roller_args, sys_args};

use crate::command::Command;
use crate::error::AppResult;

/// What a command produced beyond the resolved payload.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// The dry-contact command ends in a machine-readable payload.
    DryContact(DryContactPayload),
    /// EHL contact ends at the render surface; the scalar summary is the
    /// only value that travels further.
    EhlContact(EhlSummary),
    /// The batch command ends at the render surface; the interpolated
    /// pressure levels identify what was swept.
    EhlBatch { levels: Vec<Real> },
}

/// Result of one command execution.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    /// The case payload as resolved by the solver: the caller's input with
    /// the solver's write-back values applied. The input itself is never
    /// mutated; persisting this copy is the caller's decision.
    pub resolved: CasePayload,
    pub outcome: CommandOutcome,
}

/// Execute one command against one case payload.
///
/// The pipeline is strictly linear and stateless: any validation or
/// marshalling failure occurs before the solver is invoked, a solver failure
/// aborts before reshaping, and a reshape failure produces no output at all.
pub fn run_command(
    command: Command,
    payload: &CasePayload,
    solver: &dyn ContactSolver,
    surface: &mut dyn RenderSurface,
) -> AppResult<CommandOutput> {
    let input = payload.decode()?;

    tracing::debug!(command = %command, "executing command");

    let roller = roller_args(&input.roller);
    let dent = dent_args(&input.dent);
    let (sys, dims) = sys_args(&input.sys)?;

    match command {
        Command::DryContact => {
            let raw = solver.dry_contact(&roller, &dent, &sys)?;
            let (result, feedback) = dry_contact_results(raw, dims)?;

            let mut resolved = payload.clone();
            let (domain_x, domain_y) = feedback.wire_values();
            resolved.apply_sys_update(domain_x, domain_y);

            Ok(CommandOutput {
                resolved,
                outcome: CommandOutcome::DryContact(result),
            })
        }
        Command::EhlContact => {
            let lub = lub_args(&input.lub);
            let raw = solver.ehl_contact(&roller, &dent, &sys, &lub)?;
            let (view, feedback, summary) =
                ehl_contact_results(raw, dims, input.sys.shear_output.is_set())?;

            surface.show_ehl_contact(&view);

            let mut resolved = payload.clone();
            let (domain_x, domain_y) = feedback.wire_values();
            resolved.apply_sys_update(domain_x, domain_y);
            resolved.apply_ehl_update(summary.wire_values());

            Ok(CommandOutput {
                resolved,
                outcome: CommandOutcome::EhlContact(summary),
            })
        }
        Command::EhlBatch => {
            // Level derivation must precede the solver call: an invalid
            // level count fails the command without a solver invocation.
            let levels = linear_levels(
                input.lub.sweep_pressure_lo,
                input.lub.sweep_pressure_hi,
                input.lub.sweep_levels as usize,
            )?;

            let lub = lub_args(&input.lub);
            let raw = solver.ehl_batch(&roller, &dent, &sys, &lub)?;
            let view = ehl_batch_results(raw, dims, levels)?;

            surface.show_ehl_batch(&view);

            Ok(CommandOutput {
                resolved: payload.clone(),
                outcome: CommandOutcome::EhlBatch {
                    levels: view.levels,
                },
            })
        }
    }
}
