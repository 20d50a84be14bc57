//! Subprocess solver backend.
//!
//! The solver ships as a standalone executable. Each entry-point call spawns
//! one process, writes a single JSON request to its stdin, and reads a single
//! JSON reply from its stdout. The reply is the last non-empty stdout line,
//! so backends may print banners or progress chatter before it.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::args::SolverArg;
use crate::backend::{ContactSolver, DryContactRaw, EhlBatchRaw, EhlContactRaw};
use crate::error::{SolverError, SolverResult};

/// Solver backend reached through a child process.
pub struct ProcessSolver {
    exe: PathBuf,
    args: Vec<String>,
}

#[derive(Serialize)]
struct SolverRequest<'a> {
    entry: &'static str,
    roller: &'a [SolverArg],
    dent: &'a [SolverArg],
    sys: &'a [SolverArg],
    #[serde(skip_serializing_if = "Option::is_none")]
    lub: Option<&'a [SolverArg]>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "snake_case")]
enum SolverReply<T> {
    Ok(T),
    Error(String),
}

impl ProcessSolver {
    pub fn new(exe: impl Into<PathBuf>) -> Self {
        Self {
            exe: exe.into(),
            args: Vec::new(),
        }
    }

    /// Append a fixed argument passed on every invocation (e.g. a script
    /// path when the executable is an interpreter).
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn call<T: DeserializeOwned>(&self, request: &SolverRequest<'_>) -> SolverResult<T> {
        tracing::debug!(
            exe = %self.exe.display(),
            entry = request.entry,
            "invoking solver backend"
        );

        let mut child = Command::new(&self.exe)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SolverError::Launch {
                exe: self.exe.clone(),
                source,
            })?;

        {
            let mut stdin = child.stdin.take().ok_or_else(|| SolverError::Protocol {
                what: "child stdin was not captured".to_string(),
            })?;
            let body = serde_json::to_string(request).map_err(|e| SolverError::Protocol {
                what: format!("failed to encode request: {e}"),
            })?;
            stdin.write_all(body.as_bytes())?;
            stdin.write_all(b"\n")?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SolverError::Rejected {
                message: format!("exit status {}: {}", output.status, stderr.trim()),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let reply_line = stdout
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .ok_or_else(|| SolverError::Protocol {
                what: "backend produced no reply".to_string(),
            })?;

        let reply: SolverReply<T> =
            serde_json::from_str(reply_line).map_err(|e| SolverError::Protocol {
                what: format!("unparseable reply: {e}"),
            })?;

        match reply {
            SolverReply::Ok(value) => Ok(value),
            SolverReply::Error(message) => Err(SolverError::Rejected { message }),
        }
    }
}

impl ContactSolver for ProcessSolver {
    fn dry_contact(
        &self,
        roller: &[SolverArg],
        dent: &[SolverArg],
        sys: &[SolverArg],
    ) -> SolverResult<DryContactRaw> {
        self.call(&SolverRequest {
            entry: "DryContact",
            roller,
            dent,
            sys,
            lub: None,
        })
    }

    fn ehl_contact(
        &self,
        roller: &[SolverArg],
        dent: &[SolverArg],
        sys: &[SolverArg],
        lub: &[SolverArg],
    ) -> SolverResult<EhlContactRaw> {
        self.call(&SolverRequest {
            entry: "EhlContact",
            roller,
            dent,
            sys,
            lub: Some(lub),
        })
    }

    fn ehl_batch(
        &self,
        roller: &[SolverArg],
        dent: &[SolverArg],
        sys: &[SolverArg],
        lub: &[SolverArg],
    ) -> SolverResult<EhlBatchRaw> {
        self.call(&SolverRequest {
            entry: "EhlBatch",
            roller,
            dent,
            sys,
            lub: Some(lub),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_executable_is_a_launch_error() {
        let solver = ProcessSolver::new("/nonexistent/tribosim");
        let err = solver.dry_contact(&[], &[], &[]).unwrap_err();
        assert!(matches!(err, SolverError::Launch { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn parses_reply_after_banner_chatter() {
        let reply = concat!(
            r#"{"ok":{"res":[0,0,0,0,0,5720.3,12.7],"#,
            r#""x_coords":[0.0,1.0],"y_coords":[0.0],"z_coords":[],"#,
            r#""pressure":[1.0,2.0],"initial_gap":[0.1,0.2],"#,
            r#""deformed_surface":[0.3,0.4],"roughness":[0.5,0.6],"#,
            r#""pdf_bins":[],"pdf_values":[]}}"#,
        );
        let script = format!("cat > /dev/null; echo 'TriboSim v4.2'; echo '{reply}'");
        let solver = ProcessSolver::new("sh").arg("-c").arg(script);

        let raw = solver.dry_contact(&[], &[], &[]).unwrap();
        assert_eq!(raw.res[5], 5720.3);
        assert_eq!(raw.pressure, vec![1.0, 2.0]);
        assert!(raw.shear_xz.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn solver_reported_failure_is_rejected() {
        let script = r#"cat > /dev/null; echo '{"error":"load balance diverged"}'"#;
        let solver = ProcessSolver::new("sh").arg("-c").arg(script);

        let err = solver.dry_contact(&[], &[], &[]).unwrap_err();
        match err {
            SolverError::Rejected { message } => assert_eq!(message, "load balance diverged"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_rejected_with_stderr() {
        let script = "cat > /dev/null; echo 'singular matrix' >&2; exit 3";
        let solver = ProcessSolver::new("sh").arg("-c").arg(script);

        let err = solver.dry_contact(&[], &[], &[]).unwrap_err();
        match err {
            SolverError::Rejected { message } => assert!(message.contains("singular matrix")),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }
}
