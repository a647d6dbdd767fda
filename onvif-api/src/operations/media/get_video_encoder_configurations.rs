//! GetVideoEncoderConfigurations operation for the Media service

use crate::types::VideoEncoderConfiguration;
use crate::xml;

crate::define_onvif_operation! {
    /// List all video encoder configurations
    operation: GetVideoEncoderConfigurationsOperation,
    action: "GetVideoEncoderConfigurations",
    service: Media,
    request: {},
    response: Vec<VideoEncoderConfiguration>,
    payload: |_req| Ok(String::new()),
    parse: |response| xml::children(response, "Configurations")
        .map(VideoEncoderConfiguration::from_xml)
        .collect(),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::OnvifOperation;
    use crate::operations::media::fixtures::VIDEO_ENCODER_XML;
    use crate::types::{H264Profile, VideoEncoding};
    use xmltree::Element;

    #[test]
    fn test_get_video_encoder_configurations_response_parsing() {
        let xml_str = format!(
            "<GetVideoEncoderConfigurationsResponse>{}</GetVideoEncoderConfigurationsResponse>",
            VIDEO_ENCODER_XML
        );
        let xml = Element::parse(xml_str.as_bytes()).unwrap();

        let configs = GetVideoEncoderConfigurationsOperation::parse_response(&xml).unwrap();
        assert_eq!(configs.len(), 1);

        let config = &configs[0];
        assert_eq!(config.token, "VideoEncoder_1");
        assert_eq!(config.name, "MainStream");
        assert_eq!(config.use_count, 2);
        assert_eq!(config.encoding, VideoEncoding::H264);
        assert_eq!((config.resolution.width, config.resolution.height), (1280, 720));
        assert_eq!(config.quality, 4.5);
        assert_eq!(config.rate_control.map(|rc| rc.bitrate_limit), Some(4096));
        assert_eq!(config.h264.map(|h| h.profile), Some(H264Profile::High));
        assert_eq!(config.h264.map(|h| h.gov_length), Some(50));
        assert_eq!(config.multicast.ttl, 5);
        assert_eq!(config.session_timeout, "PT60S");
    }

    #[test]
    fn test_unknown_encoding_is_malformed() {
        let xml_str = r#"
            <GetVideoEncoderConfigurationsResponse>
                <Configurations token="v"><Encoding>VP9</Encoding></Configurations>
            </GetVideoEncoderConfigurationsResponse>
        "#;
        let xml = Element::parse(xml_str.as_bytes()).unwrap();
        assert!(GetVideoEncoderConfigurationsOperation::parse_response(&xml).is_err());
    }
}
