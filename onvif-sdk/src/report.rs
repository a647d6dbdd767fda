//! Outcome of a full refresh pass

use std::fmt;

use crate::error::SdkError;

/// One independently refreshable area of the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    DateTime,
    Capabilities,
    Information,
    Scopes,
    NetworkInterfaces,
    Users,
    Profiles,
    VideoConfigs,
    VideoConfigsOptions,
    StreamUri,
    AudioConfigs,
    PtzConfig,
}

impl Area {
    pub fn name(&self) -> &'static str {
        match self {
            Area::DateTime => "date_time",
            Area::Capabilities => "capabilities",
            Area::Information => "information",
            Area::Scopes => "scopes",
            Area::NetworkInterfaces => "network_interfaces",
            Area::Users => "users",
            Area::Profiles => "profiles",
            Area::VideoConfigs => "video_configs",
            Area::VideoConfigsOptions => "video_configs_options",
            Area::StreamUri => "stream_uri",
            Area::AudioConfigs => "audio_configs",
            Area::PtzConfig => "ptz_config",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which areas a `refresh_all` pass could not refresh
#[derive(Debug, Default)]
pub struct RefreshReport {
    pub refreshed: Vec<Area>,
    pub failed: Vec<(Area, SdkError)>,
}

impl RefreshReport {
    pub(crate) fn record(&mut self, area: Area, result: Result<(), SdkError>) {
        match result {
            Ok(()) => self.refreshed.push(area),
            Err(e) => self.failed.push((area, e)),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failed_areas(&self) -> Vec<Area> {
        self.failed.iter().map(|(area, _)| *area).collect()
    }
}
