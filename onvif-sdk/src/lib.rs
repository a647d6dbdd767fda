//! # ONVIF SDK - cached camera state
//!
//! [`OnvifDevice`] owns the query facades for one camera and a [`Snapshot`]
//! of everything learned from it. Each configuration area has its own
//! `refresh_*` operation; a failed refresh leaves its area untouched, so the
//! snapshot always holds the last good value of every area.
//!
//! ```rust,no_run
//! use onvif_sdk::{DeviceConfig, OnvifDevice};
//!
//! fn main() -> Result<(), onvif_sdk::SdkError> {
//!     let config = DeviceConfig::new("192.168.1.64").with_credentials("admin", "secret");
//!     let mut camera = OnvifDevice::connect(config)?;
//!
//!     let report = camera.refresh_all();
//!     for (area, error) in &report.failed {
//!         eprintln!("{}: {}", area, error);
//!     }
//!
//!     let snapshot = camera.snapshot();
//!     println!("{} {}", snapshot.information.manufacturer, snapshot.information.model);
//!     println!("profiles: {:?}", snapshot.profiles.tokens());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! onvif-sdk     OnvifDevice (refresh orchestrator, profile normalizer, options table)
//!     ↓
//! onvif-state   Snapshot + domain model
//!     ↓
//! onvif-api     DeviceService / MediaService / PtzService facades
//!     ↓
//! soap-client   SOAP 1.2 over HTTP, WS-Security
//! ```
//!
//! Everything is blocking. One `OnvifDevice` serves one camera from one
//! thread; poll several cameras with one instance each.

mod config;
mod device;
mod error;
pub mod normalizer;
pub mod options;
mod report;

pub use config::{DeviceConfig, OptionsRebuild};
pub use device::OnvifDevice;
pub use error::{Result, SdkError};
pub use report::{Area, RefreshReport};

pub use onvif_api::types::FactoryDefaultType;
pub use onvif_api::{DeviceService, FailureKind, MediaService, PtzService};
pub use onvif_state::{model, Snapshot};
