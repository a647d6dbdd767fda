//! Per-service query facades
//!
//! Each trait is the narrow surface the orchestration layer consumes. The
//! concrete clients talk SOAP through [`crate::OnvifClient`]; tests swap in
//! scripted fakes.

mod device;
mod media;
mod ptz;

use std::collections::BTreeMap;

pub use device::DeviceClient;
pub use media::MediaClient;
pub use ptz::PtzClient;

use crate::types::{
    AudioEncoderConfiguration, AudioEncoderOption, AudioSourceConfiguration, Capabilities,
    FactoryDefaultType, MediaUri, NetworkInterface, Profile, PtzConfiguration,
    SystemDateAndTime, User, VideoEncoderConfiguration, VideoEncoderConfigurationOptions,
    VideoSourceConfiguration,
};
use crate::Result;

/// Key/value records such as device information and scopes
pub type InfoMap = BTreeMap<String, String>;

/// Device management queries and commands
pub trait DeviceService {
    fn get_system_date_and_time(&self) -> Result<SystemDateAndTime>;

    /// Set the clock manually to the given UTC time
    fn set_system_date_and_time(&self, time: &SystemDateAndTime) -> Result<()>;

    fn get_capabilities(&self) -> Result<Capabilities>;

    /// Device information keyed by [`crate::types::info_keys`]
    fn get_device_information(&self) -> Result<InfoMap>;

    /// Decoded scopes keyed by [`crate::types::scope_keys`]
    fn get_scopes(&self) -> Result<InfoMap>;

    fn set_scopes(&self, name: &str, location: &str) -> Result<()>;

    fn get_network_interfaces(&self) -> Result<Vec<NetworkInterface>>;

    fn get_users(&self) -> Result<Vec<User>>;

    /// Returns the device's reboot message
    fn system_reboot(&self) -> Result<String>;

    fn set_system_factory_default(&self, kind: FactoryDefaultType) -> Result<()>;
}

/// Media queries and commands
pub trait MediaService {
    /// Point the facade at a new media endpoint
    fn set_endpoint(&mut self, endpoint: &str);

    fn endpoint(&self) -> &str;

    fn get_video_encoder_configurations(&self) -> Result<Vec<VideoEncoderConfiguration>>;

    fn get_video_source_configurations(&self) -> Result<Vec<VideoSourceConfiguration>>;

    fn get_video_encoder_configuration_options(
        &self,
        configuration_token: &str,
        profile_token: Option<&str>,
    ) -> Result<VideoEncoderConfigurationOptions>;

    /// RTSP URI for a profile
    fn get_stream_uri(&self, profile_token: &str) -> Result<MediaUri>;

    fn get_profiles(&self) -> Result<Vec<Profile>>;

    fn get_profile(&self, token: &str) -> Result<Profile>;

    fn set_video_encoder_configuration(&self, configuration: &VideoEncoderConfiguration) -> Result<()>;

    fn get_audio_encoder_configurations(&self) -> Result<Vec<AudioEncoderConfiguration>>;

    fn get_audio_source_configurations(&self) -> Result<Vec<AudioSourceConfiguration>>;

    fn get_audio_encoder_configuration_options(&self) -> Result<Vec<AudioEncoderOption>>;
}

/// PTZ queries and commands
pub trait PtzService {
    /// Point the facade at a new PTZ endpoint
    fn set_endpoint(&mut self, endpoint: &str);

    fn endpoint(&self) -> &str;

    /// The first PTZ configuration the device reports
    fn get_configuration(&self) -> Result<PtzConfiguration>;

    fn set_home_position(&self, profile_token: &str) -> Result<()>;

    fn goto_home_position(&self, profile_token: &str) -> Result<()>;
}
