//! PTZ schema types

use serde::{Deserialize, Serialize};

use super::common::FloatRange;
use crate::xml::{self, Element};
use crate::Result;

/// Pan/tilt speed or position vector
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
    pub space: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector1D {
    pub x: f32,
    pub space: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PtzSpeed {
    pub pan_tilt: Option<Vector2D>,
    pub zoom: Option<Vector1D>,
}

/// A coordinate space together with its permitted ranges
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpaceLimits {
    pub uri: String,
    pub x_range: FloatRange,
    pub y_range: Option<FloatRange>,
}

impl SpaceLimits {
    fn from_xml(el: &Element) -> Self {
        Self {
            uri: xml::text_or_default(el, &["Range", "URI"]),
            x_range: xml::child(el, &["Range", "XRange"])
                .map(FloatRange::from_xml)
                .unwrap_or_default(),
            y_range: xml::child(el, &["Range", "YRange"]).map(FloatRange::from_xml),
        }
    }
}

/// `tt:PTZConfiguration`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PtzConfiguration {
    pub token: String,
    pub name: String,
    pub use_count: u32,
    pub node_token: String,
    pub default_absolute_pan_tilt_position_space: String,
    pub default_absolute_zoom_position_space: String,
    pub default_relative_pan_tilt_translation_space: String,
    pub default_relative_zoom_translation_space: String,
    pub default_continuous_pan_tilt_velocity_space: String,
    pub default_continuous_zoom_velocity_space: String,
    pub default_speed: Option<PtzSpeed>,
    /// xsd:duration, e.g. `PT5S`
    pub default_timeout: String,
    pub pan_tilt_limits: Option<SpaceLimits>,
    pub zoom_limits: Option<SpaceLimits>,
}

impl PtzConfiguration {
    pub(crate) fn from_xml(el: &Element) -> Result<Self> {
        let float_attr = |e: &Element, name: &str| xml::attr_or_default::<f32>(e, name);

        let default_speed = xml::child(el, &["DefaultPTZSpeed"]).map(|speed| PtzSpeed {
            pan_tilt: xml::child(speed, &["PanTilt"]).map(|pt| Vector2D {
                x: float_attr(pt, "x"),
                y: float_attr(pt, "y"),
                space: xml::attr(pt, "space"),
            }),
            zoom: xml::child(speed, &["Zoom"]).map(|z| Vector1D {
                x: float_attr(z, "x"),
                space: xml::attr(z, "space"),
            }),
        });

        // The schema element really is spelled "Pant"
        let absolute_pan_tilt = xml::text(el, &["DefaultAbsolutePantTiltPositionSpace"])
            .or_else(|| xml::text(el, &["DefaultAbsolutePanTiltPositionSpace"]))
            .unwrap_or_default();

        Ok(Self {
            token: xml::attr(el, "token").unwrap_or_default(),
            name: xml::text_or_default(el, &["Name"]),
            use_count: xml::parse_or_default(el, &["UseCount"]),
            node_token: xml::text_or_default(el, &["NodeToken"]),
            default_absolute_pan_tilt_position_space: absolute_pan_tilt,
            default_absolute_zoom_position_space: xml::text_or_default(
                el,
                &["DefaultAbsoluteZoomPositionSpace"],
            ),
            default_relative_pan_tilt_translation_space: xml::text_or_default(
                el,
                &["DefaultRelativePanTiltTranslationSpace"],
            ),
            default_relative_zoom_translation_space: xml::text_or_default(
                el,
                &["DefaultRelativeZoomTranslationSpace"],
            ),
            default_continuous_pan_tilt_velocity_space: xml::text_or_default(
                el,
                &["DefaultContinuousPanTiltVelocitySpace"],
            ),
            default_continuous_zoom_velocity_space: xml::text_or_default(
                el,
                &["DefaultContinuousZoomVelocitySpace"],
            ),
            default_speed,
            default_timeout: xml::text_or_default(el, &["DefaultPTZTimeout"]),
            pan_tilt_limits: xml::child(el, &["PanTiltLimits"]).map(SpaceLimits::from_xml),
            zoom_limits: xml::child(el, &["ZoomLimits"]).map(SpaceLimits::from_xml),
        })
    }
}
