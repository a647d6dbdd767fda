//! Profile normalization
//!
//! A profiles refresh issues three independent queries: the full listing
//! and the two named profiles. Each result replaces its own area of the
//! snapshot whole. The listing is never merged into what was there before,
//! and device order is kept as the canonical profile order.

use onvif_api::types::Profile as WireProfile;
use onvif_api::ApiError;
use onvif_state::model::{Profile, Profiles};
use onvif_state::Snapshot;
use tracing::{debug, warn};

use crate::error::SdkError;

/// Raw outcome of the three profile queries
#[derive(Debug)]
pub struct ProfileFetch {
    pub listing: Result<Vec<WireProfile>, ApiError>,
    pub profile_720p: Result<WireProfile, ApiError>,
    pub profile_d1: Result<WireProfile, ApiError>,
}

/// Commit every successful part of `fetch` and return the first failure
pub fn apply(snapshot: &mut Snapshot, fetch: ProfileFetch) -> Result<(), SdkError> {
    let mut first_error = None;

    match fetch.listing {
        Ok(listing) => {
            snapshot.profiles = Profiles::from(listing.as_slice());
            debug!(count = snapshot.profiles.len(), "profile listing replaced");
        }
        Err(e) => {
            warn!(error = %e, "profile listing refresh failed");
            first_error.get_or_insert(e);
        }
    }

    let named = [
        ("720p", fetch.profile_720p, &mut snapshot.profile_720p),
        ("d1", fetch.profile_d1, &mut snapshot.profile_d1),
    ];
    for (label, result, slot) in named {
        match result {
            Ok(profile) => {
                *slot = Profile::from(&profile);
                debug!(profile = label, token = %slot.token, "named profile replaced");
            }
            Err(e) => {
                warn!(profile = label, error = %e, "named profile refresh failed");
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
