//! GetVideoEncoderConfigurationOptions operation for the Media service

use crate::operation::require_token;
use crate::types::VideoEncoderConfigurationOptions;
use crate::xml;

crate::define_onvif_operation! {
    /// Read the permitted value ranges for one encoder configuration
    ///
    /// The profile token narrows the answer to what that profile can use.
    operation: GetVideoEncoderConfigurationOptionsOperation,
    action: "GetVideoEncoderConfigurationOptions",
    service: Media,
    request: {
        configuration_token: String,
        profile_token: Option<String>,
    },
    response: VideoEncoderConfigurationOptions,
    payload: |req| {
        require_token("ConfigurationToken", &req.configuration_token)?;
        let mut payload = format!(
            "<ConfigurationToken>{}</ConfigurationToken>",
            xml::escape(&req.configuration_token)
        );
        if let Some(profile) = req.profile_token.as_deref().filter(|p| !p.is_empty()) {
            payload.push_str(&format!("<ProfileToken>{}</ProfileToken>", xml::escape(profile)));
        }
        Ok(payload)
    },
    parse: |response| VideoEncoderConfigurationOptions::from_xml(xml::required(response, &["Options"])?),
}
