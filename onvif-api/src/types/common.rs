//! Schema types shared by several ONVIF services (`tt:` namespace)

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::xml::{self, Element};

/// Declare a closed wire enumeration with its exact schema spellings
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            #[default]
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in schema order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The schema spelling of this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ApiError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($wire => Ok($name::$variant),)+
                    other => Err(ApiError::ParseError(format!(
                        "Unknown {} value: {}",
                        stringify!($name),
                        other
                    ))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Ethernet duplex mode (`tt:Duplex`)
    Duplex {
        Full => "Full",
        Half => "Half",
    }
}

wire_enum! {
    /// Account privilege level (`tt:UserLevel`)
    UserLevel {
        Administrator => "Administrator",
        Operator => "Operator",
        User => "User",
        Anonymous => "Anonymous",
        Extended => "Extended",
    }
}

wire_enum! {
    /// Video codec (`tt:VideoEncoding`)
    VideoEncoding {
        Jpeg => "JPEG",
        Mpeg4 => "MPEG4",
        H264 => "H264",
    }
}

wire_enum! {
    /// Audio codec (`tt:AudioEncoding`)
    AudioEncoding {
        G711 => "G711",
        G726 => "G726",
        Aac => "AAC",
    }
}

wire_enum! {
    /// H.264 profile (`tt:H264Profile`)
    H264Profile {
        Baseline => "Baseline",
        Main => "Main",
        Extended => "Extended",
        High => "High",
    }
}

wire_enum! {
    /// IP address family (`tt:IPType`)
    IpType {
        Ipv4 => "IPv4",
        Ipv6 => "IPv6",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub(crate) fn from_xml(el: &Element) -> Self {
        Self {
            min: xml::parse_or_default(el, &["Min"]),
            max: xml::parse_or_default(el, &["Max"]),
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
}

impl FloatRange {
    pub(crate) fn from_xml(el: &Element) -> Self {
        Self {
            min: xml::parse_or_default(el, &["Min"]),
            max: xml::parse_or_default(el, &["Max"]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub(crate) fn from_xml(el: &Element) -> Self {
        Self {
            width: xml::parse_or_default(el, &["Width"]),
            height: xml::parse_or_default(el, &["Height"]),
        }
    }
}

/// Rectangle given as attributes (`tt:IntRectangle`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntRectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl IntRectangle {
    pub(crate) fn from_xml(el: &Element) -> Self {
        Self {
            x: xml::attr_or_default(el, "x"),
            y: xml::attr_or_default(el, "y"),
            width: xml::attr_or_default(el, "width"),
            height: xml::attr_or_default(el, "height"),
        }
    }
}

/// Multicast streaming parameters (`tt:MulticastConfiguration`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MulticastConfiguration {
    pub address_type: IpType,
    pub ipv4_address: String,
    pub ipv6_address: String,
    pub port: u16,
    pub ttl: u32,
    pub auto_start: bool,
}

impl MulticastConfiguration {
    pub(crate) fn from_xml(el: &Element) -> crate::Result<Self> {
        Ok(Self {
            address_type: xml::parse_at(el, &["Address", "Type"])?.unwrap_or_default(),
            ipv4_address: xml::text_or_default(el, &["Address", "IPv4Address"]),
            ipv6_address: xml::text_or_default(el, &["Address", "IPv6Address"]),
            port: xml::parse_or_default(el, &["Port"]),
            ttl: xml::parse_or_default(el, &["TTL"]),
            auto_start: xml::bool_or_default(el, &["AutoStart"]),
        })
    }

    pub(crate) fn to_xml(&self) -> String {
        let address = match self.address_type {
            IpType::Ipv4 => format!(
                "<tt:Type>IPv4</tt:Type><tt:IPv4Address>{}</tt:IPv4Address>",
                xml::escape(&self.ipv4_address)
            ),
            IpType::Ipv6 => format!(
                "<tt:Type>IPv6</tt:Type><tt:IPv6Address>{}</tt:IPv6Address>",
                xml::escape(&self.ipv6_address)
            ),
        };
        format!(
            "<tt:Multicast><tt:Address>{}</tt:Address><tt:Port>{}</tt:Port><tt:TTL>{}</tt:TTL><tt:AutoStart>{}</tt:AutoStart></tt:Multicast>",
            address, self.port, self.ttl, self.auto_start
        )
    }
}
