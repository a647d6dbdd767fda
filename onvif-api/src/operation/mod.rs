//! Operation framework for ONVIF SOAP actions
//!
//! Every ONVIF action is a zero-sized type implementing [`OnvifOperation`].
//! The type fixes the service, the action name, the request and response
//! shapes, and knows how to serialize the one and parse the other.

pub mod macros;

use xmltree::Element;

use crate::error::ApiError;
use crate::service::Service;

/// Base trait for all ONVIF operations
///
/// Operations are stateless; [`crate::OnvifClient::execute`] drives them
/// against a concrete endpoint.
pub trait OnvifOperation {
    /// The request type for this operation
    type Request;

    /// The response type for this operation
    type Response;

    /// The ONVIF service this operation belongs to
    const SERVICE: Service;

    /// The SOAP action name for this operation
    const ACTION: &'static str;

    /// Build the SOAP payload from the request data
    ///
    /// The payload is the content of the action element, without the SOAP
    /// envelope. Requests that fail validation never reach the network.
    fn build_payload(request: &Self::Request) -> Result<String, ValidationError>;

    /// Parse the `<Action>Response` element into the typed response
    fn parse_response(xml: &Element) -> Result<Self::Response, ApiError>;
}

/// Validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Parameter '{parameter}' value '{value}' is out of range ({min}..={max})")]
    RangeError {
        parameter: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Parameter '{parameter}' value '{value}' is invalid: {reason}")]
    InvalidValue {
        parameter: String,
        value: String,
        reason: String,
    },

    #[error("Required parameter '{parameter}' is missing")]
    MissingParameter { parameter: String },
}

impl ValidationError {
    pub fn range_error(
        parameter: &str,
        min: impl std::fmt::Display,
        max: impl std::fmt::Display,
        value: impl std::fmt::Display,
    ) -> Self {
        Self::RangeError {
            parameter: parameter.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub fn invalid_value(parameter: &str, value: impl std::fmt::Display, reason: &str) -> Self {
        Self::InvalidValue {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn missing(parameter: &str) -> Self {
        Self::MissingParameter {
            parameter: parameter.to_string(),
        }
    }
}

/// Reject empty reference tokens
pub(crate) fn require_token(parameter: &str, token: &str) -> Result<(), ValidationError> {
    if token.trim().is_empty() {
        Err(ValidationError::missing(parameter))
    } else {
        Ok(())
    }
}
