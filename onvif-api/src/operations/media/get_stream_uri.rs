//! GetStreamUri operation for the Media service

use crate::operation::require_token;
use crate::types::MediaUri;
use crate::xml;

crate::define_onvif_operation! {
    /// Resolve the RTSP URI for a profile (RTP unicast over RTSP)
    operation: GetStreamUriOperation,
    action: "GetStreamUri",
    service: Media,
    request: {
        profile_token: String,
    },
    response: MediaUri,
    payload: |req| {
        require_token("ProfileToken", &req.profile_token)?;
        Ok(format!(
            "<StreamSetup><tt:Stream>RTP-Unicast</tt:Stream><tt:Transport><tt:Protocol>RTSP</tt:Protocol></tt:Transport></StreamSetup><ProfileToken>{}</ProfileToken>",
            xml::escape(&req.profile_token)
        ))
    },
    parse: |response| Ok(MediaUri::from_xml(xml::required(response, &["MediaUri"])?)),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::OnvifOperation;
    use xmltree::Element;

    #[test]
    fn test_get_stream_uri_payload_construction() {
        let request = GetStreamUriOperationRequest {
            profile_token: "Profile_1".to_string(),
        };
        let payload = GetStreamUriOperation::build_payload(&request).unwrap();
        assert!(payload.contains("<tt:Stream>RTP-Unicast</tt:Stream>"));
        assert!(payload.contains("<tt:Protocol>RTSP</tt:Protocol>"));
        assert!(payload.ends_with("<ProfileToken>Profile_1</ProfileToken>"));
    }

    #[test]
    fn test_get_stream_uri_response_parsing() {
        let xml_str = r#"
            <trt:GetStreamUriResponse xmlns:trt="http://www.onvif.org/ver10/media/wsdl"
                                      xmlns:tt="http://www.onvif.org/ver10/schema">
                <trt:MediaUri>
                    <tt:Uri>rtsp://10.0.0.5:554/Streaming/Channels/101</tt:Uri>
                    <tt:InvalidAfterConnect>false</tt:InvalidAfterConnect>
                    <tt:InvalidAfterReboot>false</tt:InvalidAfterReboot>
                    <tt:Timeout>PT0S</tt:Timeout>
                </trt:MediaUri>
            </trt:GetStreamUriResponse>
        "#;
        let xml = Element::parse(xml_str.as_bytes()).unwrap();

        let uri = GetStreamUriOperation::parse_response(&xml).unwrap();
        assert_eq!(uri.uri, "rtsp://10.0.0.5:554/Streaming/Channels/101");
        assert!(!uri.invalid_after_reboot);
        assert_eq!(uri.timeout, "PT0S");
    }
}
