use crate::operations::ptz::*;
use crate::types::PtzConfiguration;
use crate::{ApiError, OnvifClient, Result, Service};

use super::PtzService;

/// SOAP-backed [`PtzService`]
#[derive(Debug, Clone)]
pub struct PtzClient {
    client: OnvifClient,
    endpoint: String,
}

impl PtzClient {
    pub fn new(client: OnvifClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// PTZ service at its conventional path on `address`
    pub fn for_address(client: OnvifClient, address: &str) -> Self {
        Self::new(client, Service::Ptz.default_endpoint(address))
    }
}

impl PtzService for PtzClient {
    fn set_endpoint(&mut self, endpoint: &str) {
        self.endpoint = endpoint.to_string();
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn get_configuration(&self) -> Result<PtzConfiguration> {
        self.client
            .execute::<GetConfigurationsOperation>(&self.endpoint, &Default::default())?
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotSupported("device reports no PTZ configuration".to_string()))
    }

    fn set_home_position(&self, profile_token: &str) -> Result<()> {
        let request = SetHomePositionOperationRequest {
            profile_token: profile_token.to_string(),
        };
        self.client.execute::<SetHomePositionOperation>(&self.endpoint, &request)
    }

    fn goto_home_position(&self, profile_token: &str) -> Result<()> {
        let request = GotoHomePositionOperationRequest {
            profile_token: profile_token.to_string(),
        };
        self.client.execute::<GotoHomePositionOperation>(&self.endpoint, &request)
    }
}
