//! Discovery-derived identity

use serde::{Deserialize, Serialize};

/// What WS-Discovery learned about the camera
///
/// Written once by whoever discovered the device; refresh operations never
/// touch it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProbeData {
    /// Host or URL the device answered from
    pub address: String,
    /// WS-Addressing endpoint reference, usually a `urn:uuid:`
    pub endpoint_reference: String,
    pub types: Vec<String>,
    pub scopes: Vec<String>,
    /// Device service URLs advertised in the probe match
    pub x_addrs: Vec<String>,
    pub metadata_version: u32,
}

impl ProbeData {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    /// First advertised device service URL, if any
    pub fn device_service_url(&self) -> Option<&str> {
        self.x_addrs.first().map(String::as_str)
    }
}
