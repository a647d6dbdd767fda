//! The cached aggregate for one camera

use serde::{Deserialize, Serialize};

use crate::model::{
    Capabilities, DeviceDateTime, Information, MediaConfig, NetworkInterfaces, ProbeData,
    Profile, ProfileColumns, Profiles, PtzState, Scopes, Users,
};

/// Everything known about one camera
///
/// Each field is an independently refreshable area. A refresh replaces its
/// area whole or leaves it untouched; nothing here is ever half written.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Written once by whoever discovered the device
    pub probe: ProbeData,
    pub date_time: DeviceDateTime,
    pub capabilities: Capabilities,
    pub information: Information,
    pub scopes: Scopes,
    pub media: MediaConfig,
    pub profiles: Profiles,
    pub profile_720p: Profile,
    pub profile_d1: Profile,
    pub network: NetworkInterfaces,
    pub users: Users,
    pub ptz: PtzState,
}

impl Snapshot {
    pub fn new(probe: ProbeData) -> Self {
        Self {
            probe,
            ..Default::default()
        }
    }

    /// Column view of the profile listing
    pub fn profile_columns(&self) -> ProfileColumns {
        ProfileColumns::from(&self.profiles)
    }
}
