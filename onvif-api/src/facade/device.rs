use crate::operations::device::*;
use crate::types::{
    Capabilities, DateTimeType, FactoryDefaultType, NetworkInterface, SystemDateAndTime, User,
};
use crate::{ApiError, OnvifClient, Result, Service};

use super::{DeviceService, InfoMap};

/// SOAP-backed [`DeviceService`]
#[derive(Debug, Clone)]
pub struct DeviceClient {
    client: OnvifClient,
    endpoint: String,
}

impl DeviceClient {
    pub fn new(client: OnvifClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Device service at its conventional path on `address`
    pub fn for_address(client: OnvifClient, address: &str) -> Self {
        Self::new(client, Service::Device.default_endpoint(address))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl DeviceService for DeviceClient {
    fn get_system_date_and_time(&self) -> Result<SystemDateAndTime> {
        self.client
            .execute::<GetSystemDateAndTimeOperation>(&self.endpoint, &Default::default())
    }

    fn set_system_date_and_time(&self, time: &SystemDateAndTime) -> Result<()> {
        let utc = time
            .utc
            .ok_or_else(|| ApiError::InvalidParameter("UTC time is required".to_string()))?;
        let request = SetSystemDateAndTimeOperationRequest {
            date_time_type: DateTimeType::Manual,
            daylight_savings: time.daylight_savings,
            time_zone: time.time_zone.clone(),
            utc: Some(utc),
        };
        self.client
            .execute::<SetSystemDateAndTimeOperation>(&self.endpoint, &request)
    }

    fn get_capabilities(&self) -> Result<Capabilities> {
        self.client
            .execute::<GetCapabilitiesOperation>(&self.endpoint, &Default::default())
    }

    fn get_device_information(&self) -> Result<InfoMap> {
        self.client
            .execute::<GetDeviceInformationOperation>(&self.endpoint, &Default::default())
            .map(GetDeviceInformationResponse::into_map)
    }

    fn get_scopes(&self) -> Result<InfoMap> {
        let scopes = self
            .client
            .execute::<GetScopesOperation>(&self.endpoint, &Default::default())?;
        Ok(scope_map(&scopes))
    }

    fn set_scopes(&self, name: &str, location: &str) -> Result<()> {
        let request = SetScopesOperationRequest {
            scopes: vec![scope_uri("name", name), scope_uri("location", location)],
        };
        self.client.execute::<SetScopesOperation>(&self.endpoint, &request)
    }

    fn get_network_interfaces(&self) -> Result<Vec<NetworkInterface>> {
        self.client
            .execute::<GetNetworkInterfacesOperation>(&self.endpoint, &Default::default())
    }

    fn get_users(&self) -> Result<Vec<User>> {
        self.client
            .execute::<GetUsersOperation>(&self.endpoint, &Default::default())
    }

    fn system_reboot(&self) -> Result<String> {
        self.client
            .execute::<SystemRebootOperation>(&self.endpoint, &Default::default())
    }

    fn set_system_factory_default(&self, kind: FactoryDefaultType) -> Result<()> {
        let request = SetSystemFactoryDefaultOperationRequest {
            factory_default: kind,
        };
        self.client
            .execute::<SetSystemFactoryDefaultOperation>(&self.endpoint, &request)
    }
}
