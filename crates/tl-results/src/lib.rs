//! tl-results: structured results from flat solver output.
//!
//! Dry-contact runs end as a serialized payload; EHL runs end as plot panels
//! handed to an external render surface. Either way the solver hands back
//! flat sequences, and this crate owns turning them into shaped, labeled
//! structures plus the scalar values written back into the configuration.

pub mod error;
pub mod reshape;
pub mod types;

pub use error::{ResultsError, ResultsResult};
pub use reshape::{dry_contact_results, ehl_batch_results, ehl_contact_results};
pub use types::{
    ContourPanel, DryContactPayload, EhlBatchView, EhlContactView, EhlSummary, LinePanel,
    RenderSurface, SurfacePanel, SweepCurve, SweepPanel, SysFeedback,
};
