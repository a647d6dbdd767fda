use soap_client::SoapClient;
use tracing::{debug, warn};

use crate::operation::OnvifOperation;
use crate::Result;

/// A client for executing ONVIF operations against devices
///
/// Bridges the stateless operation definitions to real SOAP requests. The
/// client is cheap to clone; clones share the underlying HTTP agent and
/// credentials.
#[derive(Debug, Clone, Default)]
pub struct OnvifClient {
    soap_client: SoapClient,
}

impl OnvifClient {
    /// Create a client with default timeouts and no credentials
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client around a preconfigured SOAP client
    pub fn with_soap_client(soap_client: SoapClient) -> Self {
        Self { soap_client }
    }

    /// Execute an ONVIF operation against a service endpoint
    ///
    /// # Arguments
    /// * `endpoint` - Full service URL, e.g. `http://10.0.0.5/onvif/media_service`
    /// * `request` - The operation request data
    ///
    /// # Example
    /// ```rust,ignore
    /// use onvif_api::OnvifClient;
    /// use onvif_api::operations::device::{GetUsersOperation, GetUsersOperationRequest};
    ///
    /// let client = OnvifClient::new();
    /// let users = client.execute::<GetUsersOperation>(
    ///     "http://10.0.0.5/onvif/device_service",
    ///     &GetUsersOperationRequest::default(),
    /// )?;
    /// ```
    pub fn execute<Op: OnvifOperation>(&self, endpoint: &str, request: &Op::Request) -> Result<Op::Response> {
        let payload = Op::build_payload(request)?;
        let service = Op::SERVICE.info();

        debug!(
            service = Op::SERVICE.name(),
            action = Op::ACTION,
            endpoint,
            "executing ONVIF operation"
        );

        let response = self
            .soap_client
            .call(endpoint, service.namespace, Op::ACTION, &payload)
            .map_err(|e| {
                warn!(action = Op::ACTION, endpoint, error = %e, "ONVIF operation failed");
                e
            })?;

        Op::parse_response(&response)
    }
}
