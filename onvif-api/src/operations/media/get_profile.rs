//! GetProfile operation for the Media service

use crate::operation::require_token;
use crate::types::Profile;
use crate::xml;

crate::define_onvif_operation! {
    /// Fetch a single profile by token
    operation: GetProfileOperation,
    action: "GetProfile",
    service: Media,
    request: {
        profile_token: String,
    },
    response: Profile,
    payload: |req| {
        require_token("ProfileToken", &req.profile_token)?;
        Ok(format!("<ProfileToken>{}</ProfileToken>", xml::escape(&req.profile_token)))
    },
    parse: |response| Profile::from_xml(xml::required(response, &["Profile"])?),
}
