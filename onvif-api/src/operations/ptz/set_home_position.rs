//! SetHomePosition operation for the PTZ service

use crate::operation::require_token;
use crate::xml;

crate::define_onvif_operation! {
    /// Store the current position as the home position of a profile
    operation: SetHomePositionOperation,
    action: "SetHomePosition",
    service: Ptz,
    request: {
        profile_token: String,
    },
    response: (),
    payload: |req| {
        require_token("ProfileToken", &req.profile_token)?;
        Ok(format!("<ProfileToken>{}</ProfileToken>", xml::escape(&req.profile_token)))
    },
    parse: |_response| Ok(()),
}
