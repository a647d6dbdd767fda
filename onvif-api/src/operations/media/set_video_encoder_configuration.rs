//! SetVideoEncoderConfiguration operation for the Media service

use crate::operation::{require_token, ValidationError};
use crate::types::VideoEncoderConfiguration;

crate::define_onvif_operation! {
    /// Replace an encoder configuration on the device
    ///
    /// `force_persistence` asks the device to keep the change across reboots.
    operation: SetVideoEncoderConfigurationOperation,
    action: "SetVideoEncoderConfiguration",
    service: Media,
    request: {
        configuration: VideoEncoderConfiguration,
        force_persistence: bool,
    },
    response: (),
    payload: |req| {
        let config = &req.configuration;
        require_token("Configuration token", &config.token)?;
        if config.resolution.width == 0 || config.resolution.height == 0 {
            return Err(ValidationError::invalid_value(
                "Resolution",
                format!("{}x{}", config.resolution.width, config.resolution.height),
                "width and height must be non-zero",
            ));
        }
        Ok(format!(
            "{}<ForcePersistence>{}</ForcePersistence>",
            config.to_xml(),
            req.force_persistence
        ))
    },
    parse: |_response| Ok(()),
}
