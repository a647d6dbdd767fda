//! SetScopes operation for the Device service

use crate::operation::ValidationError;
use crate::xml;

use super::get_scopes::SCOPE_PREFIX;

crate::define_onvif_operation! {
    /// Replace the configurable scopes of the device
    ///
    /// Each entry must be a full scope URI; see [`super::scope_uri`].
    operation: SetScopesOperation,
    action: "SetScopes",
    service: Device,
    request: {
        scopes: Vec<String>,
    },
    response: (),
    payload: |req| {
        if req.scopes.is_empty() {
            return Err(ValidationError::missing("Scopes"));
        }
        req.scopes
            .iter()
            .map(|scope| {
                if scope.starts_with(SCOPE_PREFIX) {
                    Ok(format!("<Scopes>{}</Scopes>", xml::escape(scope)))
                } else {
                    Err(ValidationError::invalid_value("Scopes", scope, "not an onvif:// scope URI"))
                }
            })
            .collect::<Result<String, ValidationError>>()
    },
    parse: |_response| Ok(()),
}
