//! Pan/tilt/zoom configuration area

use onvif_api::types::{FloatRange, PtzConfiguration, SpaceLimits};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds1D {
    pub min: f32,
    pub max: f32,
}

impl From<&FloatRange> for Bounds1D {
    fn from(r: &FloatRange) -> Self {
        Self { min: r.min, max: r.max }
    }
}

/// A coordinate space and the ranges the device permits in it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpaceRange {
    pub uri: String,
    pub x: Bounds1D,
    /// Zoom spaces are one-dimensional
    pub y: Option<Bounds1D>,
}

impl From<&SpaceLimits> for SpaceRange {
    fn from(src: &SpaceLimits) -> Self {
        Self {
            uri: src.uri.clone(),
            x: Bounds1D::from(&src.x_range),
            y: src.y_range.as_ref().map(Bounds1D::from),
        }
    }
}

/// Active PTZ configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PtzConfig {
    pub token: String,
    pub name: String,
    pub use_count: u32,
    pub node_token: String,
    pub default_absolute_pan_tilt_space: String,
    pub default_absolute_zoom_space: String,
    pub default_relative_pan_tilt_space: String,
    pub default_relative_zoom_space: String,
    pub default_continuous_pan_tilt_space: String,
    pub default_continuous_zoom_space: String,
    pub default_pan_tilt_speed: Option<(f32, f32)>,
    pub default_zoom_speed: Option<f32>,
    pub default_timeout: String,
    pub pan_tilt_limits: Option<SpaceRange>,
    pub zoom_limits: Option<SpaceRange>,
}

impl From<&PtzConfiguration> for PtzConfig {
    fn from(src: &PtzConfiguration) -> Self {
        let speed = src.default_speed.as_ref();
        Self {
            token: src.token.clone(),
            name: src.name.clone(),
            use_count: src.use_count,
            node_token: src.node_token.clone(),
            default_absolute_pan_tilt_space: src.default_absolute_pan_tilt_position_space.clone(),
            default_absolute_zoom_space: src.default_absolute_zoom_position_space.clone(),
            default_relative_pan_tilt_space: src
                .default_relative_pan_tilt_translation_space
                .clone(),
            default_relative_zoom_space: src.default_relative_zoom_translation_space.clone(),
            default_continuous_pan_tilt_space: src
                .default_continuous_pan_tilt_velocity_space
                .clone(),
            default_continuous_zoom_space: src.default_continuous_zoom_velocity_space.clone(),
            default_pan_tilt_speed: speed
                .and_then(|s| s.pan_tilt.as_ref())
                .map(|v| (v.x, v.y)),
            default_zoom_speed: speed.and_then(|s| s.zoom.as_ref()).map(|v| v.x),
            default_timeout: src.default_timeout.clone(),
            pan_tilt_limits: src.pan_tilt_limits.as_ref().map(SpaceRange::from),
            zoom_limits: src.zoom_limits.as_ref().map(SpaceRange::from),
        }
    }
}

/// Outcome of the last home-position command
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HomePosition {
    pub profile_token: String,
    pub result: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PtzState {
    pub config: Option<PtzConfig>,
    pub home_position: Option<HomePosition>,
}
