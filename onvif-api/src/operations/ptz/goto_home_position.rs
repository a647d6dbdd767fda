//! GotoHomePosition operation for the PTZ service

use crate::operation::require_token;
use crate::xml;

crate::define_onvif_operation! {
    /// Move the camera to the stored home position
    operation: GotoHomePositionOperation,
    action: "GotoHomePosition",
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
