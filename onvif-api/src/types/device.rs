//! Device management schema types

use serde::{Deserialize, Serialize};

use super::common::{Duplex, UserLevel};
use crate::error::ApiError;
use crate::xml::{self, Element};
use crate::Result;

/// Calendar date and wall-clock time as carried by `tt:DateTime`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateTimeParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl DateTimeParts {
    pub(crate) fn from_xml(el: &Element) -> Self {
        Self {
            year: xml::parse_or_default(el, &["Date", "Year"]),
            month: xml::parse_or_default(el, &["Date", "Month"]),
            day: xml::parse_or_default(el, &["Date", "Day"]),
            hour: xml::parse_or_default(el, &["Time", "Hour"]),
            minute: xml::parse_or_default(el, &["Time", "Minute"]),
            second: xml::parse_or_default(el, &["Time", "Second"]),
        }
    }

    pub(crate) fn to_xml(&self) -> String {
        format!(
            "<tt:Time><tt:Hour>{}</tt:Hour><tt:Minute>{}</tt:Minute><tt:Second>{}</tt:Second></tt:Time><tt:Date><tt:Year>{}</tt:Year><tt:Month>{}</tt:Month><tt:Day>{}</tt:Day></tt:Date>",
            self.hour, self.minute, self.second, self.year, self.month, self.day
        )
    }
}

/// How the device keeps its clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateTimeType {
    #[default]
    Manual,
    Ntp,
}

impl DateTimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateTimeType::Manual => "Manual",
            DateTimeType::Ntp => "NTP",
        }
    }
}

impl std::str::FromStr for DateTimeType {
    type Err = ApiError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "Manual" => Ok(DateTimeType::Manual),
            "NTP" => Ok(DateTimeType::Ntp),
            other => Err(ApiError::ParseError(format!("Unknown DateTimeType value: {}", other))),
        }
    }
}

/// Device clock as reported by `GetSystemDateAndTime`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SystemDateAndTime {
    pub date_time_type: DateTimeType,
    pub daylight_savings: bool,
    /// POSIX TZ string, e.g. `CST-8`
    pub time_zone: Option<String>,
    pub utc: Option<DateTimeParts>,
    pub local: Option<DateTimeParts>,
}

impl SystemDateAndTime {
    pub(crate) fn from_xml(el: &Element) -> Result<Self> {
        Ok(Self {
            date_time_type: xml::parse_at(el, &["DateTimeType"])?.unwrap_or_default(),
            daylight_savings: xml::bool_or_default(el, &["DaylightSavings"]),
            time_zone: xml::text(el, &["TimeZone", "TZ"]).filter(|tz| !tz.is_empty()),
            utc: xml::child(el, &["UTCDateTime"]).map(DateTimeParts::from_xml),
            local: xml::child(el, &["LocalDateTime"]).map(DateTimeParts::from_xml),
        })
    }
}

/// Network capability flags
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkCapabilities {
    pub ip_filter: bool,
    pub zero_configuration: bool,
    pub ip_version6: bool,
    pub dyn_dns: bool,
}

/// System capability flags
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SystemCapabilities {
    pub discovery_resolve: bool,
    pub discovery_bye: bool,
    pub remote_discovery: bool,
    pub system_backup: bool,
    pub system_logging: bool,
    pub firmware_upgrade: bool,
    /// Highest supported ONVIF version, `(major, minor)`
    pub supported_version: (u32, u32),
    pub http_firmware_upgrade: bool,
    pub http_system_backup: bool,
    pub http_system_logging: bool,
    pub http_support_information: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IoCapabilities {
    pub input_connectors: u32,
    pub relay_outputs: u32,
}

/// Security capability flags
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SecurityCapabilities {
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
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceCapabilities {
    pub x_addr: String,
    pub network: NetworkCapabilities,
    pub system: SystemCapabilities,
    pub io: IoCapabilities,
    pub security: SecurityCapabilities,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaCapabilities {
    pub x_addr: String,
    pub rtp_multicast: bool,
    pub rtp_tcp: bool,
    pub rtp_rtsp_tcp: bool,
}

/// Result of `GetCapabilities`
///
/// A service the device does not implement is simply absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    pub device: Option<DeviceCapabilities>,
    pub media: Option<MediaCapabilities>,
    pub ptz_x_addr: Option<String>,
    pub imaging_x_addr: Option<String>,
    pub events_x_addr: Option<String>,
}

impl Capabilities {
    pub(crate) fn from_xml(el: &Element) -> Self {
        let device = xml::child(el, &["Device"]).map(|d| {
            let b = |path: &[&str]| xml::bool_or_default(d, path);

            let supported_version = xml::child(d, &["System"])
                .map(|sys| {
                    xml::children(sys, "SupportedVersions")
                        .map(|v| {
                            (
                                xml::parse_or_default::<u32>(v, &["Major"]),
                                xml::parse_or_default::<u32>(v, &["Minor"]),
                            )
                        })
                        .max()
                        .unwrap_or_default()
                })
                .unwrap_or_default();

            DeviceCapabilities {
                x_addr: xml::text_or_default(d, &["XAddr"]),
                network: NetworkCapabilities {
                    ip_filter: b(&["Network", "IPFilter"]),
                    zero_configuration: b(&["Network", "ZeroConfiguration"]),
                    ip_version6: b(&["Network", "IPVersion6"]),
                    dyn_dns: b(&["Network", "DynDNS"]),
                },
                system: SystemCapabilities {
                    discovery_resolve: b(&["System", "DiscoveryResolve"]),
                    discovery_bye: b(&["System", "DiscoveryBye"]),
                    remote_discovery: b(&["System", "RemoteDiscovery"]),
                    system_backup: b(&["System", "SystemBackup"]),
                    system_logging: b(&["System", "SystemLogging"]),
                    firmware_upgrade: b(&["System", "FirmwareUpgrade"]),
                    supported_version,
                    http_firmware_upgrade: b(&["System", "Extension", "HttpFirmwareUpgrade"]),
                    http_system_backup: b(&["System", "Extension", "HttpSystemBackup"]),
                    http_system_logging: b(&["System", "Extension", "HttpSystemLogging"]),
                    http_support_information: b(&["System", "Extension", "HttpSupportInformation"]),
                },
                io: IoCapabilities {
                    input_connectors: xml::parse_or_default(d, &["IO", "InputConnectors"]),
                    relay_outputs: xml::parse_or_default(d, &["IO", "RelayOutputs"]),
                },
                security: SecurityCapabilities {
                    tls1_0: b(&["Security", "Extension", "TLS1.0"]),
                    tls1_1: b(&["Security", "TLS1.1"]),
                    tls1_2: b(&["Security", "TLS1.2"]),
                    onboard_key_generation: b(&["Security", "OnboardKeyGeneration"]),
                    access_policy_config: b(&["Security", "AccessPolicyConfig"]),
                    x509_token: b(&["Security", "X.509Token"]),
                    saml_token: b(&["Security", "SAMLToken"]),
                    kerberos_token: b(&["Security", "KerberosToken"]),
                    rel_token: b(&["Security", "RELToken"]),
                    dot1x: b(&["Security", "Extension", "Extension", "Dot1X"]),
                    remote_user_handling: b(&["Security", "Extension", "Extension", "RemoteUserHandling"]),
                },
            }
        });

        let media = xml::child(el, &["Media"]).map(|m| MediaCapabilities {
            x_addr: xml::text_or_default(m, &["XAddr"]),
            rtp_multicast: xml::bool_or_default(m, &["StreamingCapabilities", "RTPMulticast"]),
            rtp_tcp: xml::bool_or_default(m, &["StreamingCapabilities", "RTP_TCP"]),
            rtp_rtsp_tcp: xml::bool_or_default(m, &["StreamingCapabilities", "RTP_RTSP_TCP"]),
        });

        let x_addr = |service: &str| xml::text(el, &[service, "XAddr"]).filter(|a| !a.is_empty());

        Self {
            device,
            media,
            ptz_x_addr: x_addr("PTZ"),
            imaging_x_addr: x_addr("Imaging"),
            events_x_addr: x_addr("Events"),
        }
    }
}

/// An IPv4 address with prefix length
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrefixedAddress {
    pub address: String,
    pub prefix_length: u8,
}

impl PrefixedAddress {
    fn from_xml(el: &Element) -> Self {
        Self {
            address: xml::text_or_default(el, &["Address"]),
            prefix_length: xml::parse_or_default(el, &["PrefixLength"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkSettings {
    pub auto_negotiation: bool,
    pub speed: u32,
    pub duplex: Duplex,
}

impl LinkSettings {
    fn from_xml(el: &Element) -> Result<Self> {
        Ok(Self {
            auto_negotiation: xml::bool_or_default(el, &["AutoNegotiation"]),
            speed: xml::parse_or_default(el, &["Speed"]),
            duplex: xml::parse_at(el, &["Duplex"])?.unwrap_or_default(),
        })
    }
}

/// One entry of `GetNetworkInterfaces`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkInterface {
    pub token: String,
    pub enabled: bool,
    pub name: String,
    pub hw_address: String,
    pub mtu: u32,
    pub admin_settings: Option<LinkSettings>,
    pub oper_settings: Option<LinkSettings>,
    pub ipv4_enabled: bool,
    pub ipv4_dhcp: bool,
    pub ipv4_manual: Vec<PrefixedAddress>,
    pub ipv4_link_local: Option<PrefixedAddress>,
    pub ipv4_from_dhcp: Option<PrefixedAddress>,
}

impl NetworkInterface {
    pub(crate) fn from_xml(el: &Element) -> Result<Self> {
        let link = |name: &str| {
            xml::child(el, &["Link", name])
                .map(LinkSettings::from_xml)
                .transpose()
        };
        let config = xml::child(el, &["IPv4", "Config"]);

        Ok(Self {
            token: xml::attr(el, "token").unwrap_or_default(),
            enabled: xml::bool_or_default(el, &["Enabled"]),
            name: xml::text_or_default(el, &["Info", "Name"]),
            hw_address: xml::text_or_default(el, &["Info", "HwAddress"]),
            mtu: xml::parse_or_default(el, &["Info", "MTU"]),
            admin_settings: link("AdminSettings")?,
            oper_settings: link("OperSettings")?,
            ipv4_enabled: xml::bool_or_default(el, &["IPv4", "Enabled"]),
            ipv4_dhcp: config.map(|c| xml::bool_or_default(c, &["DHCP"])).unwrap_or(false),
            ipv4_manual: config
                .map(|c| xml::children(c, "Manual").map(PrefixedAddress::from_xml).collect())
                .unwrap_or_default(),
            ipv4_link_local: config
                .and_then(|c| xml::child(c, &["LinkLocal"]))
                .map(PrefixedAddress::from_xml),
            ipv4_from_dhcp: config
                .and_then(|c| xml::child(c, &["FromDHCP"]))
                .map(PrefixedAddress::from_xml),
        })
    }
}

/// One entry of `GetUsers`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// Devices normally omit passwords from `GetUsers`
    pub password: Option<String>,
    pub user_level: UserLevel,
}

impl User {
    pub(crate) fn from_xml(el: &Element) -> Result<Self> {
        Ok(Self {
            username: xml::text_or_default(el, &["Username"]),
            password: xml::text(el, &["Password"]),
            user_level: xml::parse_at(el, &["UserLevel"])?.unwrap_or_default(),
        })
    }
}

/// Factory reset depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FactoryDefaultType {
    /// Reset everything, including network settings
    Hard,
    /// Keep network settings
    #[default]
    Soft,
}

impl FactoryDefaultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactoryDefaultType::Hard => "Hard",
            FactoryDefaultType::Soft => "Soft",
        }
    }
}

/// Keys of the mapping returned by `GetDeviceInformation`
pub mod info_keys {
    pub const MANUFACTURER: &str = "mf";
    pub const MODEL: &str = "model";
    pub const FIRMWARE_VERSION: &str = "firmware_version";
    pub const SERIAL_NUMBER: &str = "serial_number";
    pub const HARDWARE_ID: &str = "hardware_id";
}

/// Keys of the mapping returned by `GetScopes`
pub mod scope_keys {
    pub const NAME: &str = "name";
    pub const LOCATION: &str = "location";
    pub const HARDWARE: &str = "hardware";
}
