//! GetProfiles operation for the Media service

use crate::types::Profile;
use crate::xml;

crate::define_onvif_operation! {
    /// List all media profiles in device order
    operation: GetProfilesOperation,
    action: "GetProfiles",
    service: Media,
    request: {},
    response: Vec<Profile>,
    payload: |_req| Ok(String::new()),
    parse: |response| xml::children(response, "Profiles").map(Profile::from_xml).collect(),
}
