//! Feature flags and service endpoints

use onvif_api::types::Capabilities as WireCapabilities;
use serde::{Deserialize, Serialize};

/// Flattened device capabilities
///
/// Flags for a capability block the device did not report are `false`;
/// endpoints for services it does not offer are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    pub device_x_addr: Option<String>,
    pub media_x_addr: Option<String>,
    pub ptz_x_addr: Option<String>,
    pub imaging_x_addr: Option<String>,

    // Network
    pub ip_filter: bool,
    pub zero_configuration: bool,
    pub ip_version6: bool,
    pub dyn_dns: bool,

    // System
    pub discovery_resolve: bool,
    pub discovery_bye: bool,
    pub remote_discovery: bool,
    pub system_backup: bool,
    pub system_logging: bool,
    pub firmware_upgrade: bool,
    pub major: u32,
    pub minor: u32,
    pub http_firmware_upgrade: bool,
    pub http_system_backup: bool,
    pub http_system_logging: bool,
    pub http_support_information: bool,

    // IO
    pub input_connectors: u32,
    pub relay_outputs: u32,

    // Security
    pub tls1_0: bool,
    pub tls1_1: bool,
    pub tls1_2: bool,
    pub onboard_key_generation: bool,
    pub access_policy_config: bool,
    pub x509_token: bool,
    pub saml_token: bool,
    pub kerberos_token: bool,
    pub rel_token: bool,
    pub dot1x: bool,
    pub remote_user_handling: bool,

    // Media streaming
    pub rtp_multicast: bool,
    pub rtp_tcp: bool,
    pub rtp_rtsp_tcp: bool,
}

impl Capabilities {
    pub fn supports_ptz(&self) -> bool {
        self.ptz_x_addr.is_some()
    }
}

fn non_empty(addr: &str) -> Option<String> {
    let addr = addr.trim();
    (!addr.is_empty()).then(|| addr.to_string())
}

impl From<&WireCapabilities> for Capabilities {
    fn from(src: &WireCapabilities) -> Self {
        let mut des = Capabilities {
            ptz_x_addr: src.ptz_x_addr.as_deref().and_then(non_empty),
            imaging_x_addr: src.imaging_x_addr.as_deref().and_then(non_empty),
            ..Default::default()
        };

        if let Some(device) = &src.device {
            des.device_x_addr = non_empty(&device.x_addr);

            let net = &device.network;
            des.ip_filter = net.ip_filter;
            des.zero_configuration = net.zero_configuration;
            des.ip_version6 = net.ip_version6;
            des.dyn_dns = net.dyn_dns;

            let sys = &device.system;
            des.discovery_resolve = sys.discovery_resolve;
            des.discovery_bye = sys.discovery_bye;
            des.remote_discovery = sys.remote_discovery;
            des.system_backup = sys.system_backup;
            des.system_logging = sys.system_logging;
            des.firmware_upgrade = sys.firmware_upgrade;
            (des.major, des.minor) = sys.supported_version;
            des.http_firmware_upgrade = sys.http_firmware_upgrade;
            des.http_system_backup = sys.http_system_backup;
            des.http_system_logging = sys.http_system_logging;
            des.http_support_information = sys.http_support_information;

            des.input_connectors = device.io.input_connectors;
            des.relay_outputs = device.io.relay_outputs;

            let sec = &device.security;
            des.tls1_0 = sec.tls1_0;
            des.tls1_1 = sec.tls1_1;
            des.tls1_2 = sec.tls1_2;
            des.onboard_key_generation = sec.onboard_key_generation;
            des.access_policy_config = sec.access_policy_config;
            des.x509_token = sec.x509_token;
            des.saml_token = sec.saml_token;
            des.kerberos_token = sec.kerberos_token;
            des.rel_token = sec.rel_token;
            des.dot1x = sec.dot1x;
            des.remote_user_handling = sec.remote_user_handling;
        }

        if let Some(media) = &src.media {
            des.media_x_addr = non_empty(&media.x_addr);
            des.rtp_multicast = media.rtp_multicast;
            des.rtp_tcp = media.rtp_tcp;
            des.rtp_rtsp_tcp = media.rtp_rtsp_tcp;
        }

        des
    }
}
