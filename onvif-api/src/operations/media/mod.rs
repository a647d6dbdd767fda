//! Media service operations
//!
//! Profiles, video/audio encoder and source configurations, encoder option
//! ranges and stream URIs.

mod get_audio_encoder_configuration_options;
mod get_audio_encoder_configurations;
mod get_audio_source_configurations;
mod get_profile;
mod get_profiles;
mod get_stream_uri;
mod get_video_encoder_configuration_options;
mod get_video_encoder_configurations;
mod get_video_source_configurations;
mod set_video_encoder_configuration;

pub use get_audio_encoder_configuration_options::*;
pub use get_audio_encoder_configurations::*;
pub use get_audio_source_configurations::*;
pub use get_profile::*;
pub use get_profiles::*;
pub use get_stream_uri::*;
pub use get_video_encoder_configuration_options::*;
pub use get_video_encoder_configurations::*;
pub use get_video_source_configurations::*;
pub use set_video_encoder_configuration::*;
