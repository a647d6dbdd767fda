//! GetConfigurations operation for the PTZ service

use crate::types::PtzConfiguration;
use crate::xml;

crate::define_onvif_operation! {
    /// List all PTZ configurations
    operation: GetConfigurationsOperation,
    action: "GetConfigurations",
    service: Ptz,
    request: {},
    response: Vec<PtzConfiguration>,
    payload: |_req| Ok(String::new()),
    parse: |response| xml::children(response, "PTZConfiguration")
        .map(PtzConfiguration::from_xml)
        .collect(),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::OnvifOperation;
    use crate::types::FloatRange;
    use xmltree::Element;

    #[test]
    fn test_get_configurations_response_parsing() {
        let xml_str = r#"
            <tptz:GetConfigurationsResponse xmlns:tptz="http://www.onvif.org/ver20/ptz/wsdl"
                                            xmlns:tt="http://www.onvif.org/ver10/schema">
                <tptz:PTZConfiguration token="PTZToken">
                    <tt:Name>PTZ</tt:Name>
                    <tt:UseCount>2</tt:UseCount>
                    <tt:NodeToken>PTZNodeToken</tt:NodeToken>
                    <tt:DefaultAbsolutePantTiltPositionSpace>http://www.onvif.org/ver10/tptz/PanTiltSpaces/PositionGenericSpace</tt:DefaultAbsolutePantTiltPositionSpace>
                    <tt:DefaultAbsoluteZoomPositionSpace>http://www.onvif.org/ver10/tptz/ZoomSpaces/PositionGenericSpace</tt:DefaultAbsoluteZoomPositionSpace>
                    <tt:DefaultRelativePanTiltTranslationSpace>http://www.onvif.org/ver10/tptz/PanTiltSpaces/TranslationGenericSpace</tt:DefaultRelativePanTiltTranslationSpace>
                    <tt:DefaultRelativeZoomTranslationSpace>http://www.onvif.org/ver10/tptz/ZoomSpaces/TranslationGenericSpace</tt:DefaultRelativeZoomTranslationSpace>
                    <tt:DefaultContinuousPanTiltVelocitySpace>http://www.onvif.org/ver10/tptz/PanTiltSpaces/VelocityGenericSpace</tt:DefaultContinuousPanTiltVelocitySpace>
                    <tt:DefaultContinuousZoomVelocitySpace>http://www.onvif.org/ver10/tptz/ZoomSpaces/VelocityGenericSpace</tt:DefaultContinuousZoomVelocitySpace>
                    <tt:DefaultPTZSpeed>
                        <tt:PanTilt x="0.5" y="0.25" space="http://www.onvif.org/ver10/tptz/PanTiltSpaces/GenericSpeedSpace"/>
                        <tt:Zoom x="1"/>
                    </tt:DefaultPTZSpeed>
                    <tt:DefaultPTZTimeout>PT5S</tt:DefaultPTZTimeout>
                    <tt:PanTiltLimits>
                        <tt:Range>
                            <tt:URI>http://www.onvif.org/ver10/tptz/PanTiltSpaces/PositionGenericSpace</tt:URI>
                            <tt:XRange><tt:Min>-1</tt:Min><tt:Max>1</tt:Max></tt:XRange>
                            <tt:YRange><tt:Min>-1</tt:Min><tt:Max>1</tt:Max></tt:YRange>
                        </tt:Range>
                    </tt:PanTiltLimits>
                    <tt:ZoomLimits>
                        <tt:Range>
                            <tt:URI>http://www.onvif.org/ver10/tptz/ZoomSpaces/PositionGenericSpace</tt:URI>
                            <tt:XRange><tt:Min>0</tt:Min><tt:Max>1</tt:Max></tt:XRange>
                        </tt:Range>
                    </tt:ZoomLimits>
                </tptz:PTZConfiguration>
            </tptz:GetConfigurationsResponse>
        "#;
        let xml = Element::parse(xml_str.as_bytes()).unwrap();

        let configs = GetConfigurationsOperation::parse_response(&xml).unwrap();
        assert_eq!(configs.len(), 1);

        let config = &configs[0];
        assert_eq!(config.token, "PTZToken");
        assert_eq!(config.node_token, "PTZNodeToken");
        assert!(config.default_absolute_pan_tilt_position_space.ends_with("PositionGenericSpace"));
        assert!(config.default_continuous_zoom_velocity_space.ends_with("VelocityGenericSpace"));
        assert_eq!(config.default_timeout, "PT5S");

        let speed = config.default_speed.as_ref().expect("default speed");
        let pan_tilt = speed.pan_tilt.as_ref().expect("pan/tilt speed");
        assert_eq!((pan_tilt.x, pan_tilt.y), (0.5, 0.25));
        assert_eq!(speed.zoom.as_ref().map(|z| z.x), Some(1.0));
        assert!(speed.zoom.as_ref().and_then(|z| z.space.as_ref()).is_none());

        let limits = config.pan_tilt_limits.as_ref().expect("pan/tilt limits");
        assert_eq!(limits.x_range, FloatRange { min: -1.0, max: 1.0 });
        assert!(limits.y_range.is_some());
        assert!(config.zoom_limits.as_ref().unwrap().y_range.is_none());
    }
}
