//! Video and audio configuration area

use onvif_api::types::{
    AudioEncoderConfiguration as WireAudioEncoder, AudioEncoderOption as WireAudioOption,
    AudioEncoding, AudioSourceConfiguration as WireAudioSource, CodecOptions, H264Configuration,
    H264Profile as WireH264Profile, IntRange, IntRectangle, IpType, MediaUri,
    MulticastConfiguration, RateControl, Resolution as WireResolution,
    VideoEncoderConfiguration as WireEncoder, VideoEncoderConfigurationOptions,
    VideoEncoding, VideoSourceConfiguration as WireSource,
};
use serde::{Deserialize, Serialize};

remap_enum! {
    /// Video codec
    pub enum VideoCodec <=> VideoEncoding {
        Jpeg <=> Jpeg,
        Mpeg4 <=> Mpeg4,
        H264 <=> H264,
    }
}

remap_enum! {
    /// H.264 profile
    pub enum H264Profile <=> WireH264Profile {
        Baseline <=> Baseline,
        Main <=> Main,
        Extended <=> Extended,
        High <=> High,
    }
}

remap_enum! {
    /// Audio codec
    pub enum AudioCodec <=> AudioEncoding {
        G711 <=> G711,
        G726 <=> G726,
        Aac <=> Aac,
    }
}

remap_enum! {
    /// Multicast address family
    pub enum AddressFamily <=> IpType {
        Ipv4 <=> Ipv4,
        Ipv6 <=> Ipv6,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl From<&IntRectangle> for Bounds {
    fn from(r: &IntRectangle) -> Self {
        Self { x: r.x, y: r.y, width: r.width, height: r.height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl From<&WireResolution> for Resolution {
    fn from(r: &WireResolution) -> Self {
        Self { width: r.width, height: r.height }
    }
}

/// Inclusive integer bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Range {
    pub min: i32,
    pub max: i32,
}

impl From<&IntRange> for Range {
    fn from(r: &IntRange) -> Self {
        Self { min: r.min, max: r.max }
    }
}

/// Video source configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub token: String,
    pub name: String,
    pub use_count: u32,
    pub source_token: String,
    pub bounds: Bounds,
}

impl From<&WireSource> for SourceConfig {
    fn from(src: &WireSource) -> Self {
        Self {
            token: src.token.clone(),
            name: src.name.clone(),
            use_count: src.use_count,
            source_token: src.source_token.clone(),
            bounds: Bounds::from(&src.bounds),
        }
    }
}

/// Multicast transport settings shared by encoder and metadata configurations
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Multicast {
    pub address_family: AddressFamily,
    pub ipv4_address: String,
    pub ipv6_address: String,
    pub port: u16,
    pub ttl: u32,
    pub auto_start: bool,
}

impl From<&MulticastConfiguration> for Multicast {
    fn from(src: &MulticastConfiguration) -> Self {
        Self {
            address_family: src.address_type.into(),
            ipv4_address: src.ipv4_address.clone(),
            ipv6_address: src.ipv6_address.clone(),
            port: src.port,
            ttl: src.ttl,
            auto_start: src.auto_start,
        }
    }
}

impl From<&Multicast> for MulticastConfiguration {
    fn from(src: &Multicast) -> Self {
        Self {
            address_type: src.address_family.into(),
            ipv4_address: src.ipv4_address.clone(),
            ipv6_address: src.ipv6_address.clone(),
            port: src.port,
            ttl: src.ttl,
            auto_start: src.auto_start,
        }
    }
}

/// One video encoder configuration with all settings flattened
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EncoderConfig {
    pub token: String,
    pub name: String,
    pub use_count: u32,
    pub codec: VideoCodec,
    pub width: u32,
    pub height: u32,
    pub quality: f32,
    pub frame_rate_limit: u32,
    pub encoding_interval: u32,
    pub bitrate_limit: u32,
    pub gov_length: u32,
    pub h264_profile: H264Profile,
    pub multicast: Multicast,
    pub session_timeout: String,
}

impl From<&WireEncoder> for EncoderConfig {
    fn from(src: &WireEncoder) -> Self {
        let rate = src.rate_control.unwrap_or_default();
        let h264 = src.h264.unwrap_or_default();
        Self {
            token: src.token.clone(),
            name: src.name.clone(),
            use_count: src.use_count,
            codec: src.encoding.into(),
            width: src.resolution.width,
            height: src.resolution.height,
            quality: src.quality,
            frame_rate_limit: rate.frame_rate_limit,
            encoding_interval: rate.encoding_interval,
            bitrate_limit: rate.bitrate_limit,
            gov_length: h264.gov_length,
            h264_profile: h264.profile.into(),
            multicast: Multicast::from(&src.multicast),
            session_timeout: src.session_timeout.clone(),
        }
    }
}

/// Command payload for `SetVideoEncoderConfiguration`
impl From<&EncoderConfig> for WireEncoder {
    fn from(src: &EncoderConfig) -> Self {
        Self {
            token: src.token.clone(),
            name: src.name.clone(),
            use_count: src.use_count,
            encoding: src.codec.into(),
            resolution: WireResolution {
                width: src.width,
                height: src.height,
            },
            quality: src.quality,
            rate_control: Some(RateControl {
                frame_rate_limit: src.frame_rate_limit,
                encoding_interval: src.encoding_interval,
                bitrate_limit: src.bitrate_limit,
            }),
            h264: (src.codec == VideoCodec::H264).then(|| H264Configuration {
                gov_length: src.gov_length,
                profile: src.h264_profile.into(),
            }),
            multicast: MulticastConfiguration::from(&src.multicast),
            session_timeout: src.session_timeout.clone(),
        }
    }
}

/// Value ranges one codec family accepts
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodecRanges {
    pub resolutions: Vec<Resolution>,
    pub frame_rate: Range,
    pub encoding_interval: Range,
    pub gov_length: Option<Range>,
    pub bitrate: Option<Range>,
}

impl From<&CodecOptions> for CodecRanges {
    fn from(src: &CodecOptions) -> Self {
        Self {
            resolutions: src.resolutions_available.iter().map(Resolution::from).collect(),
            frame_rate: Range::from(&src.frame_rate_range),
            encoding_interval: Range::from(&src.encoding_interval_range),
            gov_length: src.gov_length_range.as_ref().map(Range::from),
            bitrate: src.bitrate_range.as_ref().map(Range::from),
        }
    }
}

/// Options table entry for one encoder configuration token
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EncoderOptions {
    pub token: String,
    pub quality: Range,
    pub jpeg: Option<CodecRanges>,
    pub h264: Option<CodecRanges>,
    pub h264_profiles_supported: Vec<H264Profile>,
}

impl EncoderOptions {
    pub fn from_wire(token: impl Into<String>, src: &VideoEncoderConfigurationOptions) -> Self {
        Self {
            token: token.into(),
            quality: Range::from(&src.quality_range),
            jpeg: src.jpeg.as_ref().map(CodecRanges::from),
            h264: src.h264.as_ref().map(CodecRanges::from),
            h264_profiles_supported: src
                .h264
                .as_ref()
                .map(|h| h.profiles_supported.iter().copied().map(H264Profile::from).collect())
                .unwrap_or_default(),
        }
    }
}

/// Encoder configurations and their per-token options table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EncoderConfigs {
    /// In device order
    pub configs: Vec<EncoderConfig>,
    /// One entry per token of `configs`, in the same order
    pub options: Vec<EncoderOptions>,
}

impl EncoderConfigs {
    /// The configuration the device lists first
    pub fn active(&self) -> Option<&EncoderConfig> {
        self.configs.first()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.configs.iter().map(|c| c.token.clone()).collect()
    }

    pub fn options_for(&self, token: &str) -> Option<&EncoderOptions> {
        self.options.iter().find(|o| o.token == token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreamUri {
    pub uri: String,
    pub invalid_after_connect: bool,
    pub invalid_after_reboot: bool,
    pub timeout: String,
}

impl From<&MediaUri> for StreamUri {
    fn from(src: &MediaUri) -> Self {
        Self {
            uri: src.uri.clone(),
            invalid_after_connect: src.invalid_after_connect,
            invalid_after_reboot: src.invalid_after_reboot,
            timeout: src.timeout.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VideoConfig {
    /// First video source configuration the device reports
    pub source: SourceConfig,
    pub encoders: EncoderConfigs,
    pub stream_uri: StreamUri,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudioEncoderConfig {
    pub token: String,
    pub name: String,
    pub use_count: u32,
    pub codec: AudioCodec,
    pub bitrate: u32,
    pub sample_rate: u32,
    pub multicast: Multicast,
    pub session_timeout: String,
}

impl From<&WireAudioEncoder> for AudioEncoderConfig {
    fn from(src: &WireAudioEncoder) -> Self {
        Self {
            token: src.token.clone(),
            name: src.name.clone(),
            use_count: src.use_count,
            codec: src.encoding.into(),
            bitrate: src.bitrate,
            sample_rate: src.sample_rate,
            multicast: Multicast::from(&src.multicast),
            session_timeout: src.session_timeout.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudioSourceConfig {
    pub token: String,
    pub name: String,
    pub use_count: u32,
    pub source_token: String,
}

impl From<&WireAudioSource> for AudioSourceConfig {
    fn from(src: &WireAudioSource) -> Self {
        Self {
            token: src.token.clone(),
            name: src.name.clone(),
            use_count: src.use_count,
            source_token: src.source_token.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudioEncoderOptions {
    pub codec: AudioCodec,
    pub bitrates: Vec<u32>,
    pub sample_rates: Vec<u32>,
}

impl From<&WireAudioOption> for AudioEncoderOptions {
    fn from(src: &WireAudioOption) -> Self {
        Self {
            codec: src.encoding.into(),
            bitrates: src.bitrate_list.clone(),
            sample_rates: src.sample_rate_list.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudioConfig {
    pub encoders: Vec<AudioEncoderConfig>,
    pub sources: Vec<AudioSourceConfig>,
    pub options: Vec<AudioEncoderOptions>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaConfig {
    pub video: VideoConfig,
    pub audio: AudioConfig,
}
