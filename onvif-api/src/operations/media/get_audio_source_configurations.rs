//! GetAudioSourceConfigurations operation for the Media service

use crate::types::AudioSourceConfiguration;
use crate::xml;

crate::define_onvif_operation! {
    /// List all audio source configurations
    operation: GetAudioSourceConfigurationsOperation,
    action: "GetAudioSourceConfigurations",
    service: Media,
    request: {},
    response: Vec<AudioSourceConfiguration>,
    payload: |_req| Ok(String::new()),
    parse: |response| Ok(xml::children(response, "Configurations")
        .map(AudioSourceConfiguration::from_xml)
        .collect()),
}
