//! Camera snapshot model for onvif-sdk
//!
//! [`Snapshot`] is the locally cached picture of one camera. The types in
//! [`model`] are the caller-facing versions of the wire records in
//! `onvif_api::types`: nested structures are flattened where callers only
//! ever read one value, and every wire enumeration has a domain twin with
//! exhaustive conversions in both directions.
//!
//! ```text
//! onvif_api::types  ──From──▶  model::*  ──▶  Snapshot
//!        ▲                        │
//!        └──────────From──────────┘   (command payloads)
//! ```
//!
//! Nothing in this crate performs I/O; the orchestrator in `onvif-sdk`
//! decides when each area is replaced.

#[macro_use]
mod remap;

pub mod logging;
pub mod model;
pub mod snapshot;

pub use logging::{init_logging, init_logging_from_env, LoggingError, LoggingMode};
pub use snapshot::Snapshot;
