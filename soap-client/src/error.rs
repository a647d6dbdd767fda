//! Error types for the SOAP client

use thiserror::Error;

/// Errors that can occur during SOAP communication
#[derive(Debug, Error)]
pub enum SoapError {
    /// Network or HTTP communication error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// XML parsing error
    #[error("XML parsing error: {0}")]
    Parse(String),

    /// SOAP fault returned by the device
    #[error("SOAP fault {code}{}: {reason}", .subcode.as_deref().map(|s| format!(" ({})", s)).unwrap_or_default())]
    Fault {
        /// Top-level fault code, e.g. `env:Sender`
        code: String,
        /// Most specific subcode reported, e.g. `ter:ActionNotSupported`
        subcode: Option<String>,
        /// Human readable reason text
        reason: String,
    },
}
