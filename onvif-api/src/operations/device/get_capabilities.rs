//! GetCapabilities operation for the Device service

use crate::types::Capabilities;
use crate::xml;

/// Capability category to request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapabilityCategory {
    #[default]
    All,
    Device,
    Media,
    Ptz,
}

impl CapabilityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityCategory::All => "All",
            CapabilityCategory::Device => "Device",
            CapabilityCategory::Media => "Media",
            CapabilityCategory::Ptz => "PTZ",
        }
    }
}

crate::define_onvif_operation! {
    /// Read device capabilities and the service endpoint addresses
    operation: GetCapabilitiesOperation,
    action: "GetCapabilities",
    service: Device,
    request: {
        category: CapabilityCategory,
    },
    response: Capabilities,
    payload: |req| Ok(format!("<Category>{}</Category>", req.category.as_str())),
    parse: |response| Ok(Capabilities::from_xml(xml::required(response, &["Capabilities"])?)),
}
