//! GetDeviceInformation operation for the Device service

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::info_keys;
use crate::xml;

/// Response for GetDeviceInformation operation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetDeviceInformationResponse {
    pub manufacturer: String,
    pub model: String,
    pub firmware_version: String,
    pub serial_number: String,
    pub hardware_id: String,
}

impl GetDeviceInformationResponse {
    /// Key/value form using the [`info_keys`] names
    pub fn into_map(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (info_keys::MANUFACTURER.to_string(), self.manufacturer),
            (info_keys::MODEL.to_string(), self.model),
            (info_keys::FIRMWARE_VERSION.to_string(), self.firmware_version),
            (info_keys::SERIAL_NUMBER.to_string(), self.serial_number),
            (info_keys::HARDWARE_ID.to_string(), self.hardware_id),
        ])
    }
}

crate::define_onvif_operation! {
    /// Read manufacturer, model, firmware and serial
    operation: GetDeviceInformationOperation,
    action: "GetDeviceInformation",
    service: Device,
    request: {},
    response: GetDeviceInformationResponse,
    payload: |_req| Ok(String::new()),
    parse: |response| Ok(GetDeviceInformationResponse {
        manufacturer: xml::text_or_default(response, &["Manufacturer"]),
        model: xml::text_or_default(response, &["Model"]),
        firmware_version: xml::text_or_default(response, &["FirmwareVersion"]),
        serial_number: xml::text_or_default(response, &["SerialNumber"]),
        hardware_id: xml::text_or_default(response, &["HardwareId"]),
    }),
}
