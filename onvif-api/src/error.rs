use soap_client::SoapError;
use thiserror::Error;

/// High-level API errors for ONVIF operations
///
/// Every query or command either yields a fully populated result or one of
/// these errors. Callers that only care about the broad cause should use
/// [`ApiError::kind`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The device does not offer this service or action
    ///
    /// Raised for `ActionNotSupported`-style SOAP faults and when a service
    /// endpoint is absent from the device capabilities.
    #[error("Not supported by device: {0}")]
    NotSupported(String),

    /// Network communication error
    ///
    /// Connection refused, timeouts, DNS failures and HTTP errors without a
    /// SOAP body all end up here.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Response parsing error
    ///
    /// The device answered, but the reply could not be parsed into the
    /// expected structure.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// SOAP fault returned by device
    #[error("SOAP fault {code}: {reason}")]
    SoapFault { code: String, reason: String },

    /// Invalid parameter value
    ///
    /// Returned before any network I/O when a request fails validation.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Closed classification of why a query produced no usable result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Device lacks the feature
    Unsupported,
    /// Transport-level failure
    Transport,
    /// The reply could not be understood
    MalformedResponse,
    /// Device rejected the request with a fault
    DeviceFault,
    /// Request was rejected locally before sending
    InvalidRequest,
}

impl ApiError {
    /// Classify this error
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::NotSupported(_) => FailureKind::Unsupported,
            ApiError::NetworkError(_) => FailureKind::Transport,
            ApiError::ParseError(_) => FailureKind::MalformedResponse,
            ApiError::SoapFault { .. } => FailureKind::DeviceFault,
            ApiError::InvalidParameter(_) => FailureKind::InvalidRequest,
        }
    }

    /// Shorthand for a missing element in a response
    pub fn missing(element: &str) -> Self {
        ApiError::ParseError(format!("Missing {} element", element))
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Fault subcodes that mean "this device cannot do that"
const UNSUPPORTED_SUBCODES: &[&str] = &[
    "ActionNotSupported",
    "NotSupported",
    "NoSuchService",
    "NoPTZProfile",
    "PTZNotSupported",
    "AudioNotSupported",
];

/// Convert from SoapError to ApiError
impl From<SoapError> for ApiError {
    fn from(error: SoapError) -> Self {
        match error {
            SoapError::Network(msg) => ApiError::NetworkError(msg),
            SoapError::Parse(msg) => ApiError::ParseError(msg),
            SoapError::Fault { code, subcode, reason } => {
                let local = subcode
                    .as_deref()
                    .map(|s| s.rsplit(':').next().unwrap_or(s));
                match local {
                    Some(sub) if UNSUPPORTED_SUBCODES.contains(&sub) => ApiError::NotSupported(
                        if reason.is_empty() { sub.to_string() } else { reason },
                    ),
                    Some(sub) => ApiError::SoapFault {
                        code: format!("{}/{}", code, sub),
                        reason,
                    },
                    None => ApiError::SoapFault { code, reason },
                }
            }
        }
    }
}

/// Convert from ValidationError to ApiError
impl From<crate::operation::ValidationError> for ApiError {
    fn from(validation_error: crate::operation::ValidationError) -> Self {
        ApiError::InvalidParameter(validation_error.to_string())
    }
}
