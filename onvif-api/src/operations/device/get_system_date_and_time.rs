//! GetSystemDateAndTime operation for the Device service

use crate::types::SystemDateAndTime;
use crate::xml;

crate::define_onvif_operation! {
    /// Read the device clock
    operation: GetSystemDateAndTimeOperation,
    action: "GetSystemDateAndTime",
    service: Device,
    request: {},
    response: SystemDateAndTime,
    payload: |_req| Ok(String::new()),
    parse: |response| SystemDateAndTime::from_xml(xml::required(response, &["SystemDateAndTime"])?),
}
