//! Media profiles and their column view

use onvif_api::types::{MetadataConfiguration, Profile as WireProfile};
use serde::{Deserialize, Serialize};

use super::media::{
    AudioEncoderConfig, AudioSourceConfig, Bounds, EncoderConfig, H264Profile, Multicast,
    SourceConfig, VideoCodec,
};
use super::ptz::{PtzConfig, SpaceRange};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub token: String,
    pub name: String,
    pub use_count: u32,
    pub ptz_status: bool,
    pub ptz_position: bool,
    pub analytics: bool,
    pub multicast: Multicast,
    pub session_timeout: String,
}

impl From<&MetadataConfiguration> for MetadataConfig {
    fn from(src: &MetadataConfiguration) -> Self {
        Self {
            token: src.token.clone(),
            name: src.name.clone(),
            use_count: src.use_count,
            ptz_status: src.ptz_status,
            ptz_position: src.ptz_position,
            analytics: src.analytics,
            multicast: Multicast::from(&src.multicast),
            session_timeout: src.session_timeout.clone(),
        }
    }
}

/// One media profile with every configuration it binds
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub token: String,
    pub name: String,
    pub fixed: bool,
    pub video_source: Option<SourceConfig>,
    pub video_encoder: Option<EncoderConfig>,
    pub audio_source: Option<AudioSourceConfig>,
    pub audio_encoder: Option<AudioEncoderConfig>,
    pub ptz: Option<PtzConfig>,
    pub metadata: Option<MetadataConfig>,
}

impl From<&WireProfile> for Profile {
    fn from(src: &WireProfile) -> Self {
        Self {
            token: src.token.clone(),
            name: src.name.clone(),
            fixed: src.fixed,
            video_source: src.video_source.as_ref().map(SourceConfig::from),
            video_encoder: src.video_encoder.as_ref().map(EncoderConfig::from),
            audio_source: src.audio_source.as_ref().map(AudioSourceConfig::from),
            audio_encoder: src.audio_encoder.as_ref().map(AudioEncoderConfig::from),
            ptz: src.ptz.as_ref().map(PtzConfig::from),
            metadata: src.metadata.as_ref().map(MetadataConfig::from),
        }
    }
}

/// Profiles in the order the device lists them
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profiles(pub Vec<Profile>);

impl Profiles {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Profile> {
        self.0.iter()
    }

    pub fn get(&self, token: &str) -> Option<&Profile> {
        self.0.iter().find(|p| p.token == token)
    }

    pub fn tokens(&self) -> Vec<String> {
        self.0.iter().map(|p| p.token.clone()).collect()
    }

    /// Default profile for queries that need one
    pub fn first_token(&self) -> Option<&str> {
        self.0.first().map(|p| p.token.as_str())
    }
}

impl From<&[WireProfile]> for Profiles {
    fn from(src: &[WireProfile]) -> Self {
        Self(src.iter().map(Profile::from).collect())
    }
}

impl<'a> IntoIterator for &'a Profiles {
    type Item = &'a Profile;
    type IntoIter = std::slice::Iter<'a, Profile>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Column-oriented view of [`Profiles`]
///
/// Index `i` of every column describes the same profile. A configuration the
/// profile does not bind contributes its default value, so columns never
/// drift apart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileColumns {
    pub token: Vec<String>,
    pub name: Vec<String>,
    pub fixed: Vec<bool>,
    pub source_token: Vec<String>,
    pub bounds: Vec<Bounds>,
    pub encoder_token: Vec<String>,
    pub codec: Vec<VideoCodec>,
    pub width: Vec<u32>,
    pub height: Vec<u32>,
    pub quality: Vec<f32>,
    pub frame_rate_limit: Vec<u32>,
    pub encoding_interval: Vec<u32>,
    pub bitrate_limit: Vec<u32>,
    pub gov_length: Vec<u32>,
    pub h264_profile: Vec<H264Profile>,
    pub encoder_multicast: Vec<Multicast>,
    pub encoder_session_timeout: Vec<String>,
    pub ptz_node_token: Vec<String>,
    pub ptz_default_absolute_pan_tilt_space: Vec<String>,
    pub ptz_default_absolute_zoom_space: Vec<String>,
    pub ptz_default_relative_pan_tilt_space: Vec<String>,
    pub ptz_default_relative_zoom_space: Vec<String>,
    pub ptz_default_continuous_pan_tilt_space: Vec<String>,
    pub ptz_default_continuous_zoom_space: Vec<String>,
    pub ptz_default_timeout: Vec<String>,
    pub pan_tilt_limits: Vec<Option<SpaceRange>>,
    pub zoom_limits: Vec<Option<SpaceRange>>,
    pub metadata_analytics: Vec<bool>,
    pub metadata_multicast: Vec<Multicast>,
    pub metadata_session_timeout: Vec<String>,
}

impl ProfileColumns {
    pub fn len(&self) -> usize {
        self.token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }

    /// True when every column has the same length
    pub fn is_consistent(&self) -> bool {
        let n = self.len();
        [
            self.name.len(),
            self.fixed.len(),
            self.source_token.len(),
            self.bounds.len(),
            self.encoder_token.len(),
            self.codec.len(),
            self.width.len(),
            self.height.len(),
            self.quality.len(),
            self.frame_rate_limit.len(),
            self.encoding_interval.len(),
            self.bitrate_limit.len(),
            self.gov_length.len(),
            self.h264_profile.len(),
            self.encoder_multicast.len(),
            self.encoder_session_timeout.len(),
            self.ptz_node_token.len(),
            self.ptz_default_absolute_pan_tilt_space.len(),
            self.ptz_default_absolute_zoom_space.len(),
            self.ptz_default_relative_pan_tilt_space.len(),
            self.ptz_default_relative_zoom_space.len(),
            self.ptz_default_continuous_pan_tilt_space.len(),
            self.ptz_default_continuous_zoom_space.len(),
            self.ptz_default_timeout.len(),
            self.pan_tilt_limits.len(),
            self.zoom_limits.len(),
            self.metadata_analytics.len(),
            self.metadata_multicast.len(),
            self.metadata_session_timeout.len(),
        ]
        .iter()
        .all(|&len| len == n)
    }

    fn push(&mut self, profile: &Profile) {
        let source = profile.video_source.clone().unwrap_or_default();
        let encoder = profile.video_encoder.clone().unwrap_or_default();
        let ptz = profile.ptz.clone().unwrap_or_default();
        let metadata = profile.metadata.clone().unwrap_or_default();

        self.token.push(profile.token.clone());
        self.name.push(profile.name.clone());
        self.fixed.push(profile.fixed);
        self.source_token.push(source.source_token);
        self.bounds.push(source.bounds);
        self.encoder_token.push(encoder.token);
        self.codec.push(encoder.codec);
        self.width.push(encoder.width);
        self.height.push(encoder.height);
        self.quality.push(encoder.quality);
        self.frame_rate_limit.push(encoder.frame_rate_limit);
        self.encoding_interval.push(encoder.encoding_interval);
        self.bitrate_limit.push(encoder.bitrate_limit);
        self.gov_length.push(encoder.gov_length);
        self.h264_profile.push(encoder.h264_profile);
        self.encoder_multicast.push(encoder.multicast);
        self.encoder_session_timeout.push(encoder.session_timeout);
        self.ptz_node_token.push(ptz.node_token);
        self.ptz_default_absolute_pan_tilt_space
            .push(ptz.default_absolute_pan_tilt_space);
        self.ptz_default_absolute_zoom_space
            .push(ptz.default_absolute_zoom_space);
        self.ptz_default_relative_pan_tilt_space
            .push(ptz.default_relative_pan_tilt_space);
        self.ptz_default_relative_zoom_space
            .push(ptz.default_relative_zoom_space);
        self.ptz_default_continuous_pan_tilt_space
            .push(ptz.default_continuous_pan_tilt_space);
        self.ptz_default_continuous_zoom_space
            .push(ptz.default_continuous_zoom_space);
        self.ptz_default_timeout.push(ptz.default_timeout);
        self.pan_tilt_limits.push(ptz.pan_tilt_limits);
        self.zoom_limits.push(ptz.zoom_limits);
        self.metadata_analytics.push(metadata.analytics);
        self.metadata_multicast.push(metadata.multicast);
        self.metadata_session_timeout.push(metadata.session_timeout);
    }
}

impl From<&Profiles> for ProfileColumns {
    fn from(profiles: &Profiles) -> Self {
        let mut columns = Self::default();
        for profile in profiles {
            columns.push(profile);
        }
        columns
    }
}
