//! Wire-level data types for ONVIF requests and responses
//!
//! These mirror the `tt:` schema closely. Normalized, caller-facing records
//! live in the state crate; this layer only promises to parse faithfully.

pub mod common;
pub mod device;
pub mod media;
pub mod ptz;

pub use common::*;
pub use device::*;
pub use media::*;
pub use ptz::*;
