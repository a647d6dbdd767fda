//! GetNetworkInterfaces operation for the Device service

use crate::types::NetworkInterface;
use crate::xml;

crate::define_onvif_operation! {
    /// List the physical network interfaces
    operation: GetNetworkInterfacesOperation,
    action: "GetNetworkInterfaces",
    service: Device,
    request: {},
    response: Vec<NetworkInterface>,
    payload: |_req| Ok(String::new()),
    parse: |response| xml::children(response, "NetworkInterfaces")
        .map(NetworkInterface::from_xml)
        .collect(),
}
