//! Media service schema types

use serde::{Deserialize, Serialize};

use super::common::{
    AudioEncoding, H264Profile, IntRange, IntRectangle, MulticastConfiguration,
    Resolution, VideoEncoding,
};
use super::ptz::PtzConfiguration;
use crate::xml::{self, Element};
use crate::Result;

/// `tt:VideoSourceConfiguration`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoSourceConfiguration {
    pub token: String,
    pub name: String,
    pub use_count: u32,
    pub source_token: String,
    pub bounds: IntRectangle,
}

impl VideoSourceConfiguration {
    pub(crate) fn from_xml(el: &Element) -> Self {
        Self {
            token: xml::attr(el, "token").unwrap_or_default(),
            name: xml::text_or_default(el, &["Name"]),
            use_count: xml::parse_or_default(el, &["UseCount"]),
            source_token: xml::text_or_default(el, &["SourceToken"]),
            bounds: xml::child(el, &["Bounds"])
                .map(IntRectangle::from_xml)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RateControl {
    pub frame_rate_limit: u32,
    pub encoding_interval: u32,
    pub bitrate_limit: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct H264Configuration {
    pub gov_length: u32,
    pub profile: H264Profile,
}

/// `tt:VideoEncoderConfiguration`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VideoEncoderConfiguration {
    pub token: String,
    pub name: String,
    pub use_count: u32,
    pub encoding: VideoEncoding,
    pub resolution: Resolution,
    pub quality: f32,
    pub rate_control: Option<RateControl>,
    pub h264: Option<H264Configuration>,
    pub multicast: MulticastConfiguration,
    /// xsd:duration, e.g. `PT60S`
    pub session_timeout: String,
}

impl VideoEncoderConfiguration {
    pub(crate) fn from_xml(el: &Element) -> Result<Self> {
        let h264 = match xml::child(el, &["H264"]) {
            Some(h) => Some(H264Configuration {
                gov_length: xml::parse_or_default(h, &["GovLength"]),
                profile: xml::parse_at(h, &["H264Profile"])?.unwrap_or_default(),
            }),
            None => None,
        };

        Ok(Self {
            token: xml::attr(el, "token").unwrap_or_default(),
            name: xml::text_or_default(el, &["Name"]),
            use_count: xml::parse_or_default(el, &["UseCount"]),
            encoding: xml::parse_at(el, &["Encoding"])?.unwrap_or_default(),
            resolution: xml::child(el, &["Resolution"])
                .map(Resolution::from_xml)
                .unwrap_or_default(),
            quality: xml::parse_or_default(el, &["Quality"]),
            rate_control: xml::child(el, &["RateControl"]).map(|rc| RateControl {
                frame_rate_limit: xml::parse_or_default(rc, &["FrameRateLimit"]),
                encoding_interval: xml::parse_or_default(rc, &["EncodingInterval"]),
                bitrate_limit: xml::parse_or_default(rc, &["BitrateLimit"]),
            }),
            h264,
            multicast: xml::child(el, &["Multicast"])
                .map(MulticastConfiguration::from_xml)
                .transpose()?
                .unwrap_or_default(),
            session_timeout: xml::text_or_default(el, &["SessionTimeout"]),
        })
    }

    /// Serialize as a `Configuration` element for `SetVideoEncoderConfiguration`
    pub(crate) fn to_xml(&self) -> String {
        let mut out = format!(
            r#"<Configuration token="{}"><tt:Name>{}</tt:Name><tt:UseCount>{}</tt:UseCount><tt:Encoding>{}</tt:Encoding><tt:Resolution><tt:Width>{}</tt:Width><tt:Height>{}</tt:Height></tt:Resolution><tt:Quality>{}</tt:Quality>"#,
            xml::escape(&self.token),
            xml::escape(&self.name),
            self.use_count,
            self.encoding,
            self.resolution.width,
            self.resolution.height,
            self.quality,
        );
        if let Some(rc) = &self.rate_control {
            out.push_str(&format!(
                "<tt:RateControl><tt:FrameRateLimit>{}</tt:FrameRateLimit><tt:EncodingInterval>{}</tt:EncodingInterval><tt:BitrateLimit>{}</tt:BitrateLimit></tt:RateControl>",
                rc.frame_rate_limit, rc.encoding_interval, rc.bitrate_limit
            ));
        }
        if let Some(h264) = &self.h264 {
            out.push_str(&format!(
                "<tt:H264><tt:GovLength>{}</tt:GovLength><tt:H264Profile>{}</tt:H264Profile></tt:H264>",
                h264.gov_length, h264.profile
            ));
        }
        out.push_str(&self.multicast.to_xml());
        out.push_str(&format!(
            "<tt:SessionTimeout>{}</tt:SessionTimeout></Configuration>",
            xml::escape(&self.session_timeout)
        ));
        out
    }
}

/// JPEG or H.264 limits inside `tt:VideoEncoderConfigurationOptions`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodecOptions {
    pub resolutions_available: Vec<Resolution>,
    pub gov_length_range: Option<IntRange>,
    pub frame_rate_range: IntRange,
    pub encoding_interval_range: IntRange,
    pub profiles_supported: Vec<H264Profile>,
    pub bitrate_range: Option<IntRange>,
}

impl CodecOptions {
    fn from_xml(el: &Element, extension: Option<&Element>) -> Result<Self> {
        let range = |name: &str| xml::child(el, &[name]).map(IntRange::from_xml);
        let profiles_supported = xml::children(el, "H264ProfilesSupported")
            .filter_map(|p| p.get_text())
            .map(|t| t.parse::<H264Profile>())
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            resolutions_available: xml::children(el, "ResolutionsAvailable")
                .map(Resolution::from_xml)
                .collect(),
            gov_length_range: range("GovLengthRange"),
            frame_rate_range: range("FrameRateRange").unwrap_or_default(),
            encoding_interval_range: range("EncodingIntervalRange").unwrap_or_default(),
            profiles_supported,
            bitrate_range: extension
                .and_then(|ext| xml::child(ext, &["BitrateRange"]))
                .map(IntRange::from_xml),
        })
    }
}

/// Result of `GetVideoEncoderConfigurationOptions`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoEncoderConfigurationOptions {
    pub quality_range: IntRange,
    pub jpeg: Option<CodecOptions>,
    pub h264: Option<CodecOptions>,
}

impl VideoEncoderConfigurationOptions {
    pub(crate) fn from_xml(el: &Element) -> Result<Self> {
        let codec = |name: &str| -> Result<Option<CodecOptions>> {
            let extension = xml::child(el, &["Extension", name]);
            xml::child(el, &[name])
                .map(|c| CodecOptions::from_xml(c, extension))
                .transpose()
        };

        Ok(Self {
            quality_range: xml::child(el, &["QualityRange"])
                .map(IntRange::from_xml)
                .unwrap_or_default(),
            jpeg: codec("JPEG")?,
            h264: codec("H264")?,
        })
    }
}

/// Result of `GetStreamUri`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaUri {
    pub uri: String,
    pub invalid_after_connect: bool,
    pub invalid_after_reboot: bool,
    pub timeout: String,
}

impl MediaUri {
    pub(crate) fn from_xml(el: &Element) -> Self {
        Self {
            uri: xml::text_or_default(el, &["Uri"]),
            invalid_after_connect: xml::bool_or_default(el, &["InvalidAfterConnect"]),
            invalid_after_reboot: xml::bool_or_default(el, &["InvalidAfterReboot"]),
            timeout: xml::text_or_default(el, &["Timeout"]),
        }
    }
}

/// `tt:AudioSourceConfiguration`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudioSourceConfiguration {
    pub token: String,
    pub name: String,
    pub use_count: u32,
    pub source_token: String,
}

impl AudioSourceConfiguration {
    pub(crate) fn from_xml(el: &Element) -> Self {
        Self {
            token: xml::attr(el, "token").unwrap_or_default(),
            name: xml::text_or_default(el, &["Name"]),
            use_count: xml::parse_or_default(el, &["UseCount"]),
            source_token: xml::text_or_default(el, &["SourceToken"]),
        }
    }
}

/// `tt:AudioEncoderConfiguration`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudioEncoderConfiguration {
    pub token: String,
    pub name: String,
    pub use_count: u32,
    pub encoding: AudioEncoding,
    pub bitrate: u32,
    pub sample_rate: u32,
    pub multicast: MulticastConfiguration,
    pub session_timeout: String,
}

impl AudioEncoderConfiguration {
    pub(crate) fn from_xml(el: &Element) -> Result<Self> {
        Ok(Self {
            token: xml::attr(el, "token").unwrap_or_default(),
            name: xml::text_or_default(el, &["Name"]),
            use_count: xml::parse_or_default(el, &["UseCount"]),
            encoding: xml::parse_at(el, &["Encoding"])?.unwrap_or_default(),
            bitrate: xml::parse_or_default(el, &["Bitrate"]),
            sample_rate: xml::parse_or_default(el, &["SampleRate"]),
            multicast: xml::child(el, &["Multicast"])
                .map(MulticastConfiguration::from_xml)
                .transpose()?
                .unwrap_or_default(),
            session_timeout: xml::text_or_default(el, &["SessionTimeout"]),
        })
    }
}

/// One codec entry of `GetAudioEncoderConfigurationOptions`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudioEncoderOption {
    pub encoding: AudioEncoding,
    pub bitrate_list: Vec<u32>,
    pub sample_rate_list: Vec<u32>,
}

impl AudioEncoderOption {
    pub(crate) fn from_xml(el: &Element) -> Result<Self> {
        let items = |list: &str| -> Vec<u32> {
            xml::child(el, &[list])
                .map(|l| {
                    xml::children(l, "Items")
                        .filter_map(|i| i.get_text())
                        .filter_map(|t| t.trim().parse().ok())
                        .collect()
                })
                .unwrap_or_default()
        };

        Ok(Self {
            encoding: xml::parse_at(el, &["Encoding"])?.unwrap_or_default(),
            bitrate_list: items("BitrateList"),
            sample_rate_list: items("SampleRateList"),
        })
    }
}

/// `tt:MetadataConfiguration`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetadataConfiguration {
    pub token: String,
    pub name: String,
    pub use_count: u32,
    pub ptz_status: bool,
    pub ptz_position: bool,
    pub analytics: bool,
    pub multicast: MulticastConfiguration,
    pub session_timeout: String,
}

impl MetadataConfiguration {
    pub(crate) fn from_xml(el: &Element) -> Result<Self> {
        Ok(Self {
            token: xml::attr(el, "token").unwrap_or_default(),
            name: xml::text_or_default(el, &["Name"]),
            use_count: xml::parse_or_default(el, &["UseCount"]),
            ptz_status: xml::bool_or_default(el, &["PTZStatus", "Status"]),
            ptz_position: xml::bool_or_default(el, &["PTZStatus", "Position"]),
            analytics: xml::bool_or_default(el, &["Analytics"]),
            multicast: xml::child(el, &["Multicast"])
                .map(MulticastConfiguration::from_xml)
                .transpose()?
                .unwrap_or_default(),
            session_timeout: xml::text_or_default(el, &["SessionTimeout"]),
        })
    }
}

/// `tt:Profile` - a named bundle of configurations
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub token: String,
    pub name: String,
    pub fixed: bool,
    pub video_source: Option<VideoSourceConfiguration>,
    pub video_encoder: Option<VideoEncoderConfiguration>,
    pub audio_source: Option<AudioSourceConfiguration>,
    pub audio_encoder: Option<AudioEncoderConfiguration>,
    pub ptz: Option<PtzConfiguration>,
    pub metadata: Option<MetadataConfiguration>,
}

impl Profile {
    pub(crate) fn from_xml(el: &Element) -> Result<Self> {
        Ok(Self {
            token: xml::attr(el, "token").unwrap_or_default(),
            name: xml::text_or_default(el, &["Name"]),
            fixed: matches!(xml::attr(el, "fixed").as_deref(), Some("true") | Some("1")),
            video_source: xml::child(el, &["VideoSourceConfiguration"])
                .map(VideoSourceConfiguration::from_xml),
            video_encoder: xml::child(el, &["VideoEncoderConfiguration"])
                .map(VideoEncoderConfiguration::from_xml)
                .transpose()?,
            audio_source: xml::child(el, &["AudioSourceConfiguration"])
                .map(AudioSourceConfiguration::from_xml),
            audio_encoder: xml::child(el, &["AudioEncoderConfiguration"])
                .map(AudioEncoderConfiguration::from_xml)
                .transpose()?,
            ptz: xml::child(el, &["PTZConfiguration"])
                .map(PtzConfiguration::from_xml)
                .transpose()?,
            metadata: xml::child(el, &["MetadataConfiguration"])
                .map(MetadataConfiguration::from_xml)
                .transpose()?,
        })
    }
}
