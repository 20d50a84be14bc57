//! tl-solver: the boundary to the external contact-mechanics / EHL solver.
//!
//! The solver is an opaque collaborator with a fixed positional call
//! contract. This crate owns that contract: [`args`] builds the ordered
//! argument vectors from the typed records, [`backend`] defines the three
//! entry points and their raw output bundles, and [`process`] drives an
//! external solver executable over a JSON pipe.

pub mod args;
pub mod backend;
pub mod error;
pub mod process;

pub use args::{GridDims, SolverArg, dent_args, lub_args, roller_args, sys_args};
pub use backend::{ContactSolver, DryContactRaw, EhlBatchRaw, EhlContactRaw};
pub use error::{SolverError, SolverResult};
pub use process::ProcessSolver;
