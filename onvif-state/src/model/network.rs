//! Network interface area

use onvif_api::types::{
    Duplex as WireDuplex, LinkSettings, NetworkInterface as WireInterface, PrefixedAddress,
};
use serde::{Deserialize, Serialize};

remap_enum! {
    pub enum Duplex <=> WireDuplex {
        Full <=> Full,
        Half <=> Half,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ipv4Address {
    pub address: String,
    pub prefix_length: u8,
}

impl From<&PrefixedAddress> for Ipv4Address {
    fn from(src: &PrefixedAddress) -> Self {
        Self {
            address: src.address.clone(),
            prefix_length: src.prefix_length,
        }
    }
}

/// One network interface with link and IPv4 settings flattened
///
/// Link settings come from the operational block when the device reports
/// one, otherwise from the administrative block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkInterface {
    pub token: String,
    pub enabled: bool,
    pub name: String,
    pub hw_address: String,
    pub mtu: u32,
    pub auto_negotiation: bool,
    pub speed: u32,
    pub duplex: Duplex,
    pub ipv4_enabled: bool,
    pub ipv4_dhcp: bool,
    pub ipv4_manual: Vec<Ipv4Address>,
    pub ipv4_link_local: Option<Ipv4Address>,
    pub ipv4_from_dhcp: Option<Ipv4Address>,
}

impl From<&WireInterface> for NetworkInterface {
    fn from(src: &WireInterface) -> Self {
        let link: LinkSettings = src
            .oper_settings
            .clone()
            .or_else(|| src.admin_settings.clone())
            .unwrap_or_default();

        Self {
            token: src.token.clone(),
            enabled: src.enabled,
            name: src.name.clone(),
            hw_address: src.hw_address.clone(),
            mtu: src.mtu,
            auto_negotiation: link.auto_negotiation,
            speed: link.speed,
            duplex: link.duplex.into(),
            ipv4_enabled: src.ipv4_enabled,
            ipv4_dhcp: src.ipv4_dhcp,
            ipv4_manual: src.ipv4_manual.iter().map(Ipv4Address::from).collect(),
            ipv4_link_local: src.ipv4_link_local.as_ref().map(Ipv4Address::from),
            ipv4_from_dhcp: src.ipv4_from_dhcp.as_ref().map(Ipv4Address::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkInterfaces {
    pub interfaces: Vec<NetworkInterface>,
    /// Set when a listing has been committed
    ///
    /// A failed refresh leaves the area as it was, so `false` means no
    /// listing was ever read and an empty `interfaces` is not the device's
    /// answer.
    pub result: bool,
}

impl NetworkInterfaces {
    /// The first interface the device reports
    pub fn primary(&self) -> Option<&NetworkInterface> {
        self.interfaces.first()
    }
}

impl From<&[WireInterface]> for NetworkInterfaces {
    fn from(src: &[WireInterface]) -> Self {
        Self {
            interfaces: src.iter().map(NetworkInterface::from).collect(),
            result: true,
        }
    }
}
