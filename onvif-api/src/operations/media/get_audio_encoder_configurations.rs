//! GetAudioEncoderConfigurations operation for the Media service

use crate::types::AudioEncoderConfiguration;
use crate::xml;

crate::define_onvif_operation! {
    /// List all audio encoder configurations
    operation: GetAudioEncoderConfigurationsOperation,
    action: "GetAudioEncoderConfigurations",
    service: Media,
    request: {},
    response: Vec<AudioEncoderConfiguration>,
    payload: |_req| Ok(String::new()),
    parse: |response| xml::children(response, "Configurations")
        .map(AudioEncoderConfiguration::from_xml)
        .collect(),
}
