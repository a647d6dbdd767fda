//! SystemReboot operation for the Device service

use crate::xml;

crate::define_onvif_operation! {
    /// Reboot the device; the reply carries a human-readable message
    operation: SystemRebootOperation,
    action: "SystemReboot",
    service: Device,
    request: {},
    response: String,
    payload: |_req| Ok(String::new()),
    parse: |response| Ok(xml::text_or_default(response, &["Message"])),
}
