//! SetSystemFactoryDefault operation for the Device service

use crate::types::FactoryDefaultType;

crate::define_onvif_operation! {
    /// Reset the device to factory settings
    operation: SetSystemFactoryDefaultOperation,
    action: "SetSystemFactoryDefault",
    service: Device,
    request: {
        factory_default: FactoryDefaultType,
    },
    response: (),
    payload: |req| Ok(format!("<FactoryDefault>{}</FactoryDefault>", req.factory_default.as_str())),
    parse: |_response| Ok(()),
}
