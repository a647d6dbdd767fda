//! Connection settings for one camera

use std::time::Duration;

use onvif_api::{Credentials, Service};

use crate::error::SdkError;

/// How the encoder options table is rebuilt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionsRebuild {
    /// Build a side table and swap it in only when every token succeeded
    #[default]
    Atomic,
    /// Clear the table first and append per token; a failure leaves the
    /// entries built so far in place
    Partial,
}

/// Configuration for an [`crate::OnvifDevice`]
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Host, `host:port`, or full device service URL
    /// Default: empty (must be set)
    pub address: String,

    pub username: Option<String>,

    pub password: Option<String>,

    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Default: 10 seconds
    pub read_timeout: Duration,

    /// Token of the high-resolution named profile
    /// Default: "Profile_1"
    pub profile_720p_token: String,

    /// Token of the D1 named profile
    /// Default: "Profile_2"
    pub profile_d1_token: String,

    /// Default: [`OptionsRebuild::Atomic`]
    pub options_rebuild: OptionsRebuild,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            username: None,
            password: None,
            connect_timeout: onvif_api::DEFAULT_CONNECT_TIMEOUT,
            read_timeout: onvif_api::DEFAULT_READ_TIMEOUT,
            profile_720p_token: "Profile_1".to_string(),
            profile_d1_token: "Profile_2".to_string(),
            options_rebuild: OptionsRebuild::Atomic,
        }
    }
}

impl DeviceConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    /// Read `ONVIF_ADDRESS`, `ONVIF_USERNAME` and `ONVIF_PASSWORD`
    pub fn from_env() -> Result<Self, SdkError> {
        let address = std::env::var("ONVIF_ADDRESS")
            .map_err(|_| SdkError::Config("ONVIF_ADDRESS is not set".to_string()))?;

        let mut config = Self::new(address);
        if let Ok(username) = std::env::var("ONVIF_USERNAME") {
            config.username = Some(username);
            config.password = Some(std::env::var("ONVIF_PASSWORD").unwrap_or_default());
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration and return any issues
    pub fn validate(&self) -> Result<(), SdkError> {
        if self.address.trim().is_empty() {
            return Err(SdkError::Config("Device address must not be empty".to_string()));
        }

        if self.password.is_some() && self.username.is_none() {
            return Err(SdkError::Config("Password given without a username".to_string()));
        }

        if self.connect_timeout.is_zero() || self.read_timeout.is_zero() {
            return Err(SdkError::Config("Timeouts must be greater than 0".to_string()));
        }

        if self.profile_720p_token.is_empty() || self.profile_d1_token.is_empty() {
            return Err(SdkError::Config("Named profile tokens must not be empty".to_string()));
        }

        Ok(())
    }

    /// Full URL of the device management service
    pub fn device_url(&self) -> String {
        self.service_url(Service::Device)
    }

    /// Conventional URL of `service` on the configured device
    ///
    /// A full device URL is used as-is for the device service; the other
    /// services keep its scheme and authority with their own path.
    pub fn service_url(&self, service: Service) -> String {
        let address = self.address.trim();
        match address.split_once("://") {
            Some((scheme, rest)) if service != Service::Device => {
                let authority = rest.split('/').next().unwrap_or(rest);
                format!("{}://{}{}", scheme, authority, service.info().default_path)
            }
            _ => service.default_endpoint(address),
        }
    }

    pub fn credentials(&self) -> Option<Credentials> {
        self.username.as_ref().map(|user| {
            Credentials::new(user.clone(), self.password.clone().unwrap_or_default())
        })
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self
    }

    pub fn with_read_timeout(mut self, read: Duration) -> Self {
        self.read_timeout = read;
        self
    }

    pub fn with_named_profiles(mut self, profile_720p: impl Into<String>, profile_d1: impl Into<String>) -> Self {
        self.profile_720p_token = profile_720p.into();
        self.profile_d1_token = profile_d1.into();
        self
    }

    pub fn with_options_rebuild(mut self, mode: OptionsRebuild) -> Self {
        self.options_rebuild = mode;
        self
    }
}
