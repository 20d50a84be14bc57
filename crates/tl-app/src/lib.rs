//! tl-app: the command dispatch layer of the bridge.
//!
//! One command identifier plus one case payload in, one solver invocation,
//! one result out. Each execution is a linear pipeline
//! (validate, marshal, invoke, reshape, emit) with no state carried across
//! invocations; solver write-back is returned as an explicitly resolved
//! payload rather than applied to the caller's input.

pub mod command;
pub mod dispatch;
pub mod error;

pub use command::{Command, UnknownCommand};
pub use dispatch::{CommandOutcome, CommandOutput, run_command};
pub use error::{AppError, AppResult};
