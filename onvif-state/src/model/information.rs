//! Identity strings and scopes

use std::collections::BTreeMap;

use onvif_api::types::{info_keys, scope_keys};
use serde::{Deserialize, Serialize};

/// Manufacturer-reported identity, free-form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Information {
    pub manufacturer: String,
    pub model: String,
    pub firmware_version: String,
    pub serial_number: String,
    pub hardware_id: String,
}

impl From<&BTreeMap<String, String>> for Information {
    fn from(map: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| map.get(key).cloned().unwrap_or_default();
        Self {
            manufacturer: get(info_keys::MANUFACTURER),
            model: get(info_keys::MODEL),
            firmware_version: get(info_keys::FIRMWARE_VERSION),
            serial_number: get(info_keys::SERIAL_NUMBER),
            hardware_id: get(info_keys::HARDWARE_ID),
        }
    }
}

/// Decoded `name`, `location` and `hardware` scopes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scopes {
    pub name: String,
    pub location: String,
    pub hardware: String,
}

impl From<&BTreeMap<String, String>> for Scopes {
    fn from(map: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| map.get(key).cloned().unwrap_or_default();
        Self {
            name: get(scope_keys::NAME),
            location: get(scope_keys::LOCATION),
            hardware: get(scope_keys::HARDWARE),
        }
    }
}
