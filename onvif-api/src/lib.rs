//! Type-safe ONVIF API for network cameras
//!
//! This crate models the ONVIF Device, Media and PTZ services as strongly
//! typed operations. It uses the private `soap-client` crate for the SOAP
//! transport and exposes one facade trait per service for higher layers.
//!
//! ```rust,ignore
//! use onvif_api::{DeviceClient, DeviceService, OnvifClient};
//!
//! let device = DeviceClient::for_address(OnvifClient::new(), "192.168.1.64");
//! let info = device.get_device_information()?;
//! println!("{:?}", info.get("model"));
//! ```

pub mod client;
pub mod error;
pub mod facade;
pub mod operation;
pub mod operations;
pub mod service;
pub mod types;
pub mod xml;

pub use client::OnvifClient;
pub use error::{ApiError, FailureKind, Result};
pub use facade::{
    DeviceClient, DeviceService, InfoMap, MediaClient, MediaService, PtzClient, PtzService,
};
pub use operation::{OnvifOperation, ValidationError};
pub use service::{Service, ServiceInfo};
pub use soap_client::{Credentials, SoapClient, DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT};

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}
