/// Represents the ONVIF services this crate talks to
///
/// Each service exposes its own WSDL namespace and, on most devices, its own
/// endpoint. The real endpoint addresses are reported by `GetCapabilities`;
/// the paths here are the conventional fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Device management - identity, clock, scopes, network, users
    Device,

    /// Media - profiles, encoder/source configurations, stream URIs
    Media,

    /// PTZ - pan/tilt/zoom configuration and home position
    Ptz,
}

/// Namespace and endpoint information for an ONVIF service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    /// WSDL namespace used for the action element and SOAP action URI
    pub namespace: &'static str,

    /// Conventional endpoint path relative to the device host
    pub default_path: &'static str,
}

impl Service {
    /// Get the name of this service as a string
    pub fn name(&self) -> &'static str {
        match self {
            Service::Device => "Device",
            Service::Media => "Media",
            Service::Ptz => "PTZ",
        }
    }

    /// Conventional endpoint URL on a host
    ///
    /// `address` may be a bare host (`10.0.0.5`, `cam.local:8080`) or a full
    /// URL. A full URL with a path is returned unchanged; one without a path
    /// gets the conventional path appended.
    pub fn default_endpoint(&self, address: &str) -> String {
        let path = self.info().default_path;
        match address.split_once("://") {
            Some((_, rest)) if rest.trim_end_matches('/').contains('/') => address.to_string(),
            Some(_) => format!("{}{}", address.trim_end_matches('/'), path),
            None => format!("http://{}{}", address.trim_end_matches('/'), path),
        }
    }

    /// Get the namespace and default path for this service
    pub fn info(&self) -> ServiceInfo {
        match self {
            Service::Device => ServiceInfo {
                namespace: "http://www.onvif.org/ver10/device/wsdl",
                default_path: "/onvif/device_service",
            },
            Service::Media => ServiceInfo {
                namespace: "http://www.onvif.org/ver10/media/wsdl",
                default_path: "/onvif/media_service",
            },
            Service::Ptz => ServiceInfo {
                namespace: "http://www.onvif.org/ver20/ptz/wsdl",
                default_path: "/onvif/ptz_service",
            },
        }
    }
}
