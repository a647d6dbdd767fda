//! GetVideoSourceConfigurations operation for the Media service

use crate::types::VideoSourceConfiguration;
use crate::xml;

crate::define_onvif_operation! {
    /// List all video source configurations
    operation: GetVideoSourceConfigurationsOperation,
    action: "GetVideoSourceConfigurations",
    service: Media,
    request: {},
    response: Vec<VideoSourceConfiguration>,
    payload: |_req| Ok(String::new()),
    parse: |response| Ok(xml::children(response, "Configurations")
        .map(VideoSourceConfiguration::from_xml)
        .collect()),
}
