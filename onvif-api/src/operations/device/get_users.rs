//! GetUsers operation for the Device service

use crate::types::User;
use crate::xml;

crate::define_onvif_operation! {
    /// List the user accounts
    operation: GetUsersOperation,
    action: "GetUsers",
    service: Device,
    request: {},
    response: Vec<User>,
    payload: |_req| Ok(String::new()),
    parse: |response| xml::children(response, "User").map(User::from_xml).collect(),
}
