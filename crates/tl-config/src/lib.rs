//! tl-config: typed configuration records and their wire transport.
//!
//! The upstream client ships each record group as a JSON object keyed by
//! ordinal ("0", "1", ...) with string values. That index-keyed form is a
//! transport artifact; inside the bridge every group is a named-field struct.
//! The translation between the two lives in [`wire`] and nowhere else.

pub mod error;
pub mod records;
pub mod wire;

pub use error::{ConfigError, ConfigResult};
pub use records::{
    DentRecord, EhlResultRecord, LubRecord, Rheology, RollerRecord, SysRecord, Toggle,
};
pub use wire::{CaseInput, CasePayload, WireRecord};
