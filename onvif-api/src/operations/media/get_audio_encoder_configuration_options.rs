//! GetAudioEncoderConfigurationOptions operation for the Media service

use crate::types::AudioEncoderOption;
use crate::xml;

crate::define_onvif_operation! {
    /// Read the codec options for audio encoding
    ///
    /// Both tokens are optional; without them the device answers for its
    /// generic audio encoder capabilities.
    operation: GetAudioEncoderConfigurationOptionsOperation,
    action: "GetAudioEncoderConfigurationOptions",
    service: Media,
    request: {
        configuration_token: Option<String>,
        profile_token: Option<String>,
    },
    response: Vec<AudioEncoderOption>,
    payload: |req| {
        let mut payload = String::new();
        if let Some(token) = &req.configuration_token {
            payload.push_str(&format!("<ConfigurationToken>{}</ConfigurationToken>", xml::escape(token)));
        }
        if let Some(token) = &req.profile_token {
            payload.push_str(&format!("<ProfileToken>{}</ProfileToken>", xml::escape(token)));
        }
        Ok(payload)
    },
    parse: |response| match xml::child(response, &["Options"]) {
        Some(options) => xml::children(options, "Options")
            .map(AudioEncoderOption::from_xml)
            .collect(),
        None => Ok(Vec::new()),
    },
}
