//! Command identifiers.

use std::fmt;
use std::str::FromStr;

/// The closed set of bridge commands.
///
/// Clients address commands by the legacy string identifiers; those are
/// parsed here, at the boundary, so dispatch itself is an exhaustive match
/// with no unknown-command path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Dry (unlubricated) contact analysis.
    DryContact,
    /// Elastohydrodynamic contact analysis.
    EhlContact,
    /// EHL sweep over interpolated pressure levels.
    EhlBatch,
}

/// Raised when a client sends an identifier outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown command identifier: {0:?}")]
pub struct UnknownCommand(pub String);

impl Command {
    /// The wire identifier, kept verbatim for client compatibility.
    pub fn identifier(self) -> &'static str {
        match self {
            Self::DryContact => "CalDryCont",
            Self::EhlContact => "CalEHLCont",
            Self::EhlBatch => "CalEHLBatch",
        }
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CalDryCont" => Ok(Self::DryContact),
            "CalEHLCont" => Ok(Self::EhlContact),
            "CalEHLBatch" => Ok(Self::EhlBatch),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
