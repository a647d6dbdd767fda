//! Scripted in-memory facades
//!
//! Every facade method records its name in a shared call log and fails with
//! a transport error when that name has been scripted to fail. Responses are
//! held in `RefCell`s so a test can change what the "device" reports between
//! refreshes.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};

use onvif_api::types::{
    AudioEncoderConfiguration, AudioEncoderOption, AudioSourceConfiguration, Capabilities,
    FactoryDefaultType, IntRange, MediaCapabilities, MediaUri, NetworkInterface, Profile,
    PtzConfiguration, SystemDateAndTime, User, VideoEncoderConfiguration,
    VideoEncoderConfigurationOptions, VideoSourceConfiguration,
};
use onvif_api::{ApiError, DeviceService, InfoMap, MediaService, PtzService, Result};
use onvif_sdk::{DeviceConfig, OnvifDevice};

#[derive(Debug, Default)]
pub struct Script {
    failing: RefCell<HashSet<String>>,
    unsupported: RefCell<HashSet<String>>,
    calls: RefCell<Vec<String>>,
}

impl Script {
    pub fn call(&self, name: &str) -> Result<()> {
        self.calls.borrow_mut().push(name.to_string());
        if self.unsupported.borrow().contains(name) {
            return Err(ApiError::NotSupported(format!("{} not supported", name)));
        }
        if self.failing.borrow().contains(name) {
            return Err(ApiError::NetworkError(format!("{} timed out", name)));
        }
        Ok(())
    }

    pub fn fail(&self, name: &str) {
        self.failing.borrow_mut().insert(name.to_string());
    }

    pub fn unsupported(&self, name: &str) {
        self.unsupported.borrow_mut().insert(name.to_string());
    }

    pub fn heal(&self, name: &str) {
        self.failing.borrow_mut().remove(name);
        self.unsupported.borrow_mut().remove(name);
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.as_str() == name).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }
}

// ============================================================================
// Device
// ============================================================================

#[derive(Debug, Default)]
pub struct FakeDevice {
    pub script: Script,
    pub date_time: RefCell<SystemDateAndTime>,
    pub capabilities: RefCell<Capabilities>,
    pub information: RefCell<InfoMap>,
    pub scopes: RefCell<InfoMap>,
    pub interfaces: RefCell<Vec<NetworkInterface>>,
    pub users: RefCell<Vec<User>>,
    pub sent_date_time: RefCell<Option<SystemDateAndTime>>,
    pub sent_scopes: RefCell<Option<(String, String)>>,
}

impl DeviceService for FakeDevice {
    fn get_system_date_and_time(&self) -> Result<SystemDateAndTime> {
        self.script.call("get_system_date_and_time")?;
        Ok(self.date_time.borrow().clone())
    }

    fn set_system_date_and_time(&self, time: &SystemDateAndTime) -> Result<()> {
        self.script.call("set_system_date_and_time")?;
        *self.sent_date_time.borrow_mut() = Some(time.clone());
        Ok(())
    }

    fn get_capabilities(&self) -> Result<Capabilities> {
        self.script.call("get_capabilities")?;
        Ok(self.capabilities.borrow().clone())
    }

    fn get_device_information(&self) -> Result<InfoMap> {
        self.script.call("get_device_information")?;
        Ok(self.information.borrow().clone())
    }

    fn get_scopes(&self) -> Result<InfoMap> {
        self.script.call("get_scopes")?;
        Ok(self.scopes.borrow().clone())
    }

    fn set_scopes(&self, name: &str, location: &str) -> Result<()> {
        self.script.call("set_scopes")?;
        *self.sent_scopes.borrow_mut() = Some((name.to_string(), location.to_string()));
        Ok(())
    }

    fn get_network_interfaces(&self) -> Result<Vec<NetworkInterface>> {
        self.script.call("get_network_interfaces")?;
        Ok(self.interfaces.borrow().clone())
    }

    fn get_users(&self) -> Result<Vec<User>> {
        self.script.call("get_users")?;
        Ok(self.users.borrow().clone())
    }

    fn system_reboot(&self) -> Result<String> {
        self.script.call("system_reboot")?;
        Ok("Rebooting in 30 seconds".to_string())
    }

    fn set_system_factory_default(&self, _kind: FactoryDefaultType) -> Result<()> {
        self.script.call("set_system_factory_default")
    }
}

// ============================================================================
// Media
// ============================================================================

#[derive(Debug, Default)]
pub struct FakeMedia {
    pub script: Script,
    pub endpoint: String,
    pub encoders: RefCell<Vec<VideoEncoderConfiguration>>,
    pub sources: RefCell<Vec<VideoSourceConfiguration>>,
    pub profiles: RefCell<Vec<Profile>>,
    pub audio_encoders: RefCell<Vec<AudioEncoderConfiguration>>,
    pub audio_sources: RefCell<Vec<AudioSourceConfiguration>>,
    pub audio_options: RefCell<Vec<AudioEncoderOption>>,
    pub sent_encoder: RefCell<Option<VideoEncoderConfiguration>>,
    pub stream_uri_tokens: RefCell<Vec<String>>,
    /// Host used in stream URIs, `cam` when unset
    pub stream_host: RefCell<Option<String>>,
}

/// Options whose quality range encodes the token length, so entries differ
pub fn options_for(token: &str) -> VideoEncoderConfigurationOptions {
    VideoEncoderConfigurationOptions {
        quality_range: IntRange {
            min: 1,
            max: token.len() as i32,
        },
        ..Default::default()
    }
}

impl MediaService for FakeMedia {
    fn set_endpoint(&mut self, endpoint: &str) {
        self.endpoint = endpoint.to_string();
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn get_video_encoder_configurations(&self) -> Result<Vec<VideoEncoderConfiguration>> {
        self.script.call("get_video_encoder_configurations")?;
        Ok(self.encoders.borrow().clone())
    }

    fn get_video_source_configurations(&self) -> Result<Vec<VideoSourceConfiguration>> {
        self.script.call("get_video_source_configurations")?;
        Ok(self.sources.borrow().clone())
    }

    fn get_video_encoder_configuration_options(
        &self,
        configuration_token: &str,
        _profile_token: Option<&str>,
    ) -> Result<VideoEncoderConfigurationOptions> {
        self.script.call(&format!("options:{}", configuration_token))?;
        Ok(options_for(configuration_token))
    }

    fn get_stream_uri(&self, profile_token: &str) -> Result<MediaUri> {
        self.script.call("get_stream_uri")?;
        self.stream_uri_tokens.borrow_mut().push(profile_token.to_string());
        let host = self.stream_host.borrow().clone().unwrap_or_else(|| "cam".to_string());
        Ok(MediaUri {
            uri: format!("rtsp://{}/{}", host, profile_token),
            timeout: "PT60S".to_string(),
            ..Default::default()
        })
    }

    fn get_profiles(&self) -> Result<Vec<Profile>> {
        self.script.call("get_profiles")?;
        Ok(self.profiles.borrow().clone())
    }

    fn get_profile(&self, token: &str) -> Result<Profile> {
        self.script.call(&format!("profile:{}", token))?;
        self.profiles
            .borrow()
            .iter()
            .find(|p| p.token == token)
            .cloned()
            .ok_or_else(|| ApiError::NotSupported(format!("no profile {}", token)))
    }

    fn set_video_encoder_configuration(&self, configuration: &VideoEncoderConfiguration) -> Result<()> {
        self.script.call("set_video_encoder_configuration")?;
        *self.sent_encoder.borrow_mut() = Some(configuration.clone());
        Ok(())
    }

    fn get_audio_encoder_configurations(&self) -> Result<Vec<AudioEncoderConfiguration>> {
        self.script.call("get_audio_encoder_configurations")?;
        Ok(self.audio_encoders.borrow().clone())
    }

    fn get_audio_source_configurations(&self) -> Result<Vec<AudioSourceConfiguration>> {
        self.script.call("get_audio_source_configurations")?;
        Ok(self.audio_sources.borrow().clone())
    }

    fn get_audio_encoder_configuration_options(&self) -> Result<Vec<AudioEncoderOption>> {
        self.script.call("get_audio_encoder_configuration_options")?;
        Ok(self.audio_options.borrow().clone())
    }
}

// ============================================================================
// PTZ
// ============================================================================

#[derive(Debug, Default)]
pub struct FakePtz {
    pub script: Script,
    pub endpoint: String,
    pub configuration: RefCell<PtzConfiguration>,
}

impl PtzService for FakePtz {
    fn set_endpoint(&mut self, endpoint: &str) {
        self.endpoint = endpoint.to_string();
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn get_configuration(&self) -> Result<PtzConfiguration> {
        self.script.call("get_configuration")?;
        Ok(self.configuration.borrow().clone())
    }

    fn set_home_position(&self, _profile_token: &str) -> Result<()> {
        self.script.call("set_home_position")
    }

    fn goto_home_position(&self, _profile_token: &str) -> Result<()> {
        self.script.call("goto_home_position")
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub type FakeCamera = OnvifDevice<FakeDevice, FakeMedia, FakePtz>;

pub fn camera() -> FakeCamera {
    camera_with(DeviceConfig::new("10.0.0.5"))
}

pub fn camera_with(config: DeviceConfig) -> FakeCamera {
    OnvifDevice::with_services(
        config,
        FakeDevice::default(),
        FakeMedia::default(),
        FakePtz::default(),
    )
}

pub fn profile(token: &str) -> Profile {
    Profile {
        token: token.to_string(),
        name: format!("{} name", token),
        video_encoder: Some(encoder(&format!("enc-{}", token))),
        ..Default::default()
    }
}

pub fn encoder(token: &str) -> VideoEncoderConfiguration {
    VideoEncoderConfiguration {
        token: token.to_string(),
        name: token.to_string(),
        ..Default::default()
    }
}

pub fn capabilities(ptz: Option<&str>) -> Capabilities {
    Capabilities {
        media: Some(MediaCapabilities {
            x_addr: "http://10.0.0.5:8000/onvif/Media".to_string(),
            rtp_multicast: true,
            ..Default::default()
        }),
        ptz_x_addr: ptz.map(str::to_string),
        ..Default::default()
    }
}

pub fn info_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}
