//! Private SOAP client for ONVIF device communication
//!
//! This crate provides a minimal SOAP 1.2 client for talking to ONVIF
//! network cameras. Requests are optionally signed with a WS-Security
//! UsernameToken; replies are returned as the parsed `<Action>Response`
//! element or folded into a [`SoapError`].

mod error;
pub mod security;

pub use error::SoapError;
pub use security::Credentials;

use std::time::Duration;
use tracing::{debug, trace};
use xmltree::Element;

/// SOAP 1.2 envelope namespace
pub const SOAP_ENV_NS: &str = "http://www.w3.org/2003/05/soap-envelope";

/// Default timeout for establishing a connection
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default timeout for reading a response
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// A minimal SOAP client for ONVIF device communication
#[derive(Debug, Clone)]
pub struct SoapClient {
    agent: ureq::Agent,
    credentials: Option<Credentials>,
}

impl SoapClient {
    /// Create a new SOAP client with default timeouts and no credentials
    pub fn new() -> Self {
        Self::with_timeouts(DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT)
    }

    /// Create a SOAP client with explicit transport timeouts
    pub fn with_timeouts(connect: Duration, read: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(connect)
                .timeout_read(read)
                .build(),
            credentials: None,
        }
    }

    /// Sign every subsequent request with a UsernameToken for these credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Credentials used to sign requests, if any
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Send a SOAP request and return the parsed response element
    ///
    /// # Arguments
    /// * `url` - Full service endpoint, e.g. `http://10.0.0.5/onvif/device_service`
    /// * `namespace` - WSDL namespace of the action
    /// * `action` - Action name, e.g. `GetCapabilities`
    /// * `payload` - Child elements of the action element (may be empty)
    pub fn call(
        &self,
        url: &str,
        namespace: &str,
        action: &str,
        payload: &str,
    ) -> Result<Element, SoapError> {
        let body = self.build_envelope(namespace, action, payload);
        let content_type = format!(
            "application/soap+xml; charset=utf-8; action=\"{}/{}\"",
            namespace, action
        );

        debug!(url, action, "sending SOAP request");

        let xml_text = match self
            .agent
            .post(url)
            .set("Content-Type", &content_type)
            .send_string(&body)
        {
            Ok(response) => response
                .into_string()
                .map_err(|e| SoapError::Network(e.to_string()))?,
            // ONVIF devices deliver faults with HTTP 400/500; keep the body if it parses
            Err(ureq::Error::Status(status, response)) => {
                let text = response.into_string().unwrap_or_default();
                match Element::parse(text.as_bytes()) {
                    Ok(xml) => return self.extract_response(&xml, action),
                    Err(_) => {
                        return Err(SoapError::Network(format!(
                            "{} failed: HTTP {}",
                            action, status
                        )))
                    }
                }
            }
            Err(e) => return Err(SoapError::Network(e.to_string())),
        };

        trace!(action, response = %xml_text, "received SOAP response");

        let xml = Element::parse(xml_text.as_bytes())
            .map_err(|e| SoapError::Parse(e.to_string()))?;

        self.extract_response(&xml, action)
    }

    fn build_envelope(&self, namespace: &str, action: &str, payload: &str) -> String {
        let header = self
            .credentials
            .as_ref()
            .map(|c| format!("<s:Header>{}</s:Header>", c.security_header()))
            .unwrap_or_default();

        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><s:Envelope xmlns:s="{env}" xmlns:tt="http://www.onvif.org/ver10/schema">{header}<s:Body><{action} xmlns="{ns}">{payload}</{action}></s:Body></s:Envelope>"#,
            env = SOAP_ENV_NS,
            header = header,
            action = action,
            ns = namespace,
            payload = payload,
        )
    }

    fn extract_response(&self, xml: &Element, action: &str) -> Result<Element, SoapError> {
        let body = xml
            .get_child("Body")
            .ok_or_else(|| SoapError::Parse("Missing SOAP Body".to_string()))?;

        // Check for SOAP fault first
        if let Some(fault) = body.get_child("Fault") {
            return Err(parse_fault(fault));
        }

        // Extract the action response
        let response_name = format!("{}Response", action);
        body.get_child(response_name.as_str())
            .cloned()
            .ok_or_else(|| SoapError::Parse(format!("Missing {} element", response_name)))
    }
}

impl Default for SoapClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a SOAP 1.2 (or 1.1) fault element into a `SoapError::Fault`
fn parse_fault(fault: &Element) -> SoapError {
    let text_of = |e: &Element| e.get_text().map(|t| t.trim().to_string());

    // SOAP 1.2: Code/Value with nested Subcode/Value chain
    if let Some(code_el) = fault.get_child("Code") {
        let code = code_el
            .get_child("Value")
            .and_then(text_of)
            .unwrap_or_default();

        let mut subcode = None;
        let mut cursor = code_el.get_child("Subcode");
        while let Some(sub) = cursor {
            if let Some(value) = sub.get_child("Value").and_then(text_of) {
                subcode = Some(value);
            }
            cursor = sub.get_child("Subcode");
        }

        let reason = fault
            .get_child("Reason")
            .and_then(|r| r.get_child("Text"))
            .and_then(text_of)
            .unwrap_or_default();

        return SoapError::Fault { code, subcode, reason };
    }

    // SOAP 1.1 fallback
    SoapError::Fault {
        code: fault
            .get_child("faultcode")
            .and_then(text_of)
            .unwrap_or_else(|| "Receiver".to_string()),
        subcode: None,
        reason: fault
            .get_child("faultstring")
            .and_then(text_of)
            .unwrap_or_default(),
    }
}
