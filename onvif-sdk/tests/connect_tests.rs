//! `OnvifDevice::connect` against a mock HTTP camera

use mockito::{Matcher, Server};
use onvif_sdk::{DeviceConfig, OnvifDevice, SdkError};

fn envelope(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<env:Envelope xmlns:env="http://www.w3.org/2003/05/soap-envelope"
              xmlns:tds="http://www.onvif.org/ver10/device/wsdl"
              xmlns:tt="http://www.onvif.org/ver10/schema">
  <env:Body>{}</env:Body>
</env:Envelope>"#,
        body
    )
}

#[test]
fn connect_rejects_invalid_config() {
    let err = OnvifDevice::connect(DeviceConfig::default()).unwrap_err();
    assert!(matches!(err, SdkError::Config(_)));
}

#[test]
fn refresh_over_http_with_credentials() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/onvif/device_service")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("<wsse:Username>admin</wsse:Username>".to_string()),
            Matcher::Regex("GetDeviceInformation".to_string()),
        ]))
        .with_status(200)
        .with_body(envelope(
            r#"<tds:GetDeviceInformationResponse>
                 <tds:Manufacturer>Acme</tds:Manufacturer>
                 <tds:Model>IPC-100</tds:Model>
                 <tds:FirmwareVersion>2.1</tds:FirmwareVersion>
                 <tds:SerialNumber>SN42</tds:SerialNumber>
                 <tds:HardwareId>HW7</tds:HardwareId>
               </tds:GetDeviceInformationResponse>"#,
        ))
        .create();

    let config = DeviceConfig::new(server.url()).with_credentials("admin", "secret");
    let mut camera = OnvifDevice::connect(config).unwrap();
    camera.refresh_information().unwrap();

    mock.assert();
    let info = &camera.snapshot().information;
    assert_eq!(info.manufacturer, "Acme");
    assert_eq!(info.firmware_version, "2.1");
    assert_eq!(info.hardware_id, "HW7");
}

#[test]
fn device_fault_leaves_area_empty() {
    let mut server = Server::new();
    server
        .mock("POST", "/onvif/device_service")
        .with_status(400)
        .with_body(envelope(
            r#"<env:Fault>
                 <env:Code><env:Value>env:Sender</env:Value>
                   <env:Subcode><env:Value>ter:NotAuthorized</env:Value></env:Subcode>
                 </env:Code>
                 <env:Reason><env:Text xml:lang="en">Sender not authorized</env:Text></env:Reason>
               </env:Fault>"#,
        ))
        .create();

    let mut camera = OnvifDevice::connect(DeviceConfig::new(server.url())).unwrap();
    let err = camera.refresh_scopes().unwrap_err();

    assert!(matches!(err, SdkError::Api(onvif_api::ApiError::SoapFault { .. })));
    assert_eq!(camera.snapshot().scopes, onvif_sdk::model::Scopes::default());
}
