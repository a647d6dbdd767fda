//! Refresh orchestrator behavior against scripted facades

mod support;

use chrono::{TimeZone, Utc};
use onvif_api::types::{
    info_keys, scope_keys, AudioEncoderConfiguration, AudioEncoderOption, AudioEncoding,
    AudioSourceConfiguration, DateTimeParts, DateTimeType, Duplex as WireDuplex, LinkSettings,
    NetworkInterface, PtzConfiguration, SystemDateAndTime, User, UserLevel as WireUserLevel,
    VideoSourceConfiguration,
};
use onvif_sdk::model::{Duplex, EncoderConfig, UserLevel};
use onvif_sdk::{Area, DeviceConfig, FailureKind, OptionsRebuild, SdkError};
use proptest::prelude::*;
use rstest::rstest;

use support::*;

fn load_profiles(camera: &FakeCamera, tokens: &[&str]) {
    *camera.media_service().profiles.borrow_mut() = tokens.iter().map(|t| profile(t)).collect();
}

fn load_encoders(camera: &FakeCamera, tokens: &[&str]) {
    *camera.media_service().encoders.borrow_mut() = tokens.iter().map(|t| encoder(t)).collect();
}

fn option_tokens(camera: &FakeCamera) -> Vec<String> {
    camera
        .snapshot()
        .media
        .video
        .encoders
        .options
        .iter()
        .map(|o| o.token.clone())
        .collect()
}

// ============================================================================
// Profiles
// ============================================================================

#[test]
fn scenario_a_three_profiles() {
    let mut camera = camera_with(DeviceConfig::new("10.0.0.5").with_named_profiles("p1", "p2"));
    load_profiles(&camera, &["p1", "p2", "p3"]);

    camera.refresh_profiles().unwrap();

    let snapshot = camera.snapshot();
    assert_eq!(snapshot.profiles.tokens(), vec!["p1", "p2", "p3"]);
    let columns = snapshot.profile_columns();
    assert!(columns.is_consistent());
    assert_eq!(columns.len(), 3);
    assert_eq!(columns.encoder_token, vec!["enc-p1", "enc-p2", "enc-p3"]);
    assert_eq!(snapshot.profile_720p.token, "p1");
    assert_eq!(snapshot.profile_d1.token, "p2");
}

#[test]
fn profile_listing_is_rebuilt_not_merged() {
    let mut camera = camera();
    load_profiles(&camera, &["a", "b", "c", "d"]);
    let _ = camera.refresh_profiles();

    load_profiles(&camera, &["x", "y"]);
    let _ = camera.refresh_profiles();

    assert_eq!(camera.snapshot().profiles.tokens(), vec!["x", "y"]);
}

#[test]
fn missing_named_profile_fails_but_listing_commits() {
    // Default named tokens Profile_1 / Profile_2 are absent
    let mut camera = camera();
    load_profiles(&camera, &["p1", "p2"]);

    let err = camera.refresh_profiles().unwrap_err();

    assert!(err.is_unsupported());
    assert_eq!(camera.snapshot().profiles.len(), 2);
    assert_eq!(camera.media_service().script.count("profile:Profile_1"), 1);
    assert_eq!(camera.media_service().script.count("profile:Profile_2"), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_columns_match_device_listing(count in 0usize..16) {
        let mut camera = camera();
        let tokens: Vec<String> = (0..count).map(|i| format!("p{}", i)).collect();
        *camera.media_service().profiles.borrow_mut() =
            tokens.iter().map(|t| profile(t)).collect();

        let _ = camera.refresh_profiles();

        let columns = camera.snapshot().profile_columns();
        prop_assert!(columns.is_consistent());
        prop_assert_eq!(columns.len(), count);
        prop_assert_eq!(camera.snapshot().profiles.tokens(), tokens);
    }
}

// ============================================================================
// Video configs and options table
// ============================================================================

#[test]
fn video_configs_build_options_in_token_order() {
    let mut camera = camera();
    load_encoders(&camera, &["e1", "e2", "e3"]);
    *camera.media_service().sources.borrow_mut() = vec![VideoSourceConfiguration {
        token: "src".to_string(),
        source_token: "vs0".to_string(),
        ..Default::default()
    }];

    camera.refresh_video_configs().unwrap();

    let video = &camera.snapshot().media.video;
    assert_eq!(video.encoders.tokens(), vec!["e1", "e2", "e3"]);
    assert_eq!(video.encoders.active().map(|e| e.token.as_str()), Some("e1"));
    assert_eq!(video.source.source_token, "vs0");
    assert_eq!(option_tokens(&camera), vec!["e1", "e2", "e3"]);
    assert_eq!(
        camera.snapshot().media.video.encoders.options_for("e3").map(|o| o.quality.max),
        Some(2)
    );
}

#[test]
fn options_from_previous_generation_do_not_survive() {
    let mut camera = camera();
    load_encoders(&camera, &["old1", "old2", "old3"]);
    camera.refresh_video_configs().unwrap();

    load_encoders(&camera, &["new1"]);
    camera.refresh_video_configs().unwrap();

    assert_eq!(option_tokens(&camera), vec!["new1"]);
}

#[test]
fn options_failure_does_not_fail_video_configs() {
    let mut camera = camera();
    load_encoders(&camera, &["p1", "p2"]);
    camera.media_service().script.fail("options:p2");

    assert!(camera.refresh_video_configs().is_ok());
    assert_eq!(camera.snapshot().media.video.encoders.tokens(), vec!["p1", "p2"]);
    assert!(camera.refresh_video_configs_options().is_err());
}

#[test]
fn scenario_b_atomic_keeps_previous_table() {
    let mut camera = camera();
    load_encoders(&camera, &["p1", "p2", "p3"]);
    camera.refresh_video_configs().unwrap();
    let before = camera.snapshot().media.video.encoders.options.clone();

    camera.media_service().script.fail("options:p2");
    let err = camera.refresh_video_configs_options().unwrap_err();

    assert_eq!(err.failure_kind(), Some(FailureKind::Transport));
    assert_eq!(camera.snapshot().media.video.encoders.options, before);
    assert_eq!(camera.media_service().script.count("options:p3"), 1);
}

#[test]
fn scenario_b_partial_keeps_prefix() {
    let config = DeviceConfig::new("10.0.0.5").with_options_rebuild(OptionsRebuild::Partial);
    let mut camera = camera_with(config);
    load_encoders(&camera, &["p1", "p2", "p3"]);
    let _ = camera.refresh_video_configs();
    camera.media_service().script.fail("options:p2");

    assert!(camera.refresh_video_configs_options().is_err());

    assert_eq!(option_tokens(&camera), vec!["p1"]);
}

#[test]
fn failed_listing_leaves_video_untouched() {
    let mut camera = camera();
    load_encoders(&camera, &["e1"]);
    camera.refresh_video_configs().unwrap();
    let before = camera.snapshot().media.clone();

    load_encoders(&camera, &["e2"]);
    camera.media_service().script.fail("get_video_source_configurations");
    assert!(camera.refresh_video_configs().is_err());

    assert_eq!(camera.snapshot().media, before);
}

// ============================================================================
// Stream URI
// ============================================================================

#[test]
fn stream_uri_needs_a_profile() {
    let mut camera = camera();

    let err = camera.refresh_stream_uri().unwrap_err();

    assert!(matches!(err, SdkError::MissingPrerequisite("profiles")));
    assert_eq!(camera.media_service().script.count("get_stream_uri"), 0);
}

#[test]
fn stream_uri_uses_first_profile() {
    let mut camera = camera();
    load_profiles(&camera, &["main", "sub"]);
    let _ = camera.refresh_profiles();

    camera.refresh_stream_uri().unwrap();

    assert_eq!(camera.snapshot().media.video.stream_uri.uri, "rtsp://cam/main");
    assert_eq!(*camera.media_service().stream_uri_tokens.borrow(), vec!["main"]);
}

// ============================================================================
// Capabilities and PTZ
// ============================================================================

#[test]
fn scenario_c_ptz_unsupported() {
    let mut camera = camera();
    *camera.device_service().capabilities.borrow_mut() = capabilities(None);

    camera.refresh_capabilities().unwrap();
    assert!(camera.snapshot().capabilities.ptz_x_addr.is_none());
    assert!(!camera.snapshot().capabilities.supports_ptz());

    let err = camera.refresh_ptz_config().unwrap_err();
    assert!(err.is_unsupported());
    assert!(camera.snapshot().ptz.config.is_none());
    assert_eq!(camera.ptz_service().script.total_calls(), 0);
}

#[test]
fn capabilities_rebind_service_endpoints() {
    let mut camera = camera();
    *camera.device_service().capabilities.borrow_mut() =
        capabilities(Some("http://10.0.0.5:8000/onvif/PTZ"));

    camera.refresh_capabilities().unwrap();

    assert_eq!(camera.media_service().endpoint, "http://10.0.0.5:8000/onvif/Media");
    assert_eq!(camera.ptz_service().endpoint, "http://10.0.0.5:8000/onvif/PTZ");
    assert!(camera.snapshot().capabilities.rtp_multicast);
}

#[test]
fn ptz_config_refresh() {
    let mut camera = camera();
    *camera.device_service().capabilities.borrow_mut() = capabilities(Some("http://cam/ptz"));
    *camera.ptz_service().configuration.borrow_mut() = PtzConfiguration {
        token: "ptz0".to_string(),
        node_token: "node0".to_string(),
        default_timeout: "PT5S".to_string(),
        ..Default::default()
    };
    camera.refresh_capabilities().unwrap();

    camera.refresh_ptz_config().unwrap();

    let config = camera.snapshot().ptz.config.as_ref().unwrap();
    assert_eq!(config.node_token, "node0");
    assert_eq!(config.default_timeout, "PT5S");
}

#[test]
fn home_position_records_outcome() {
    let mut camera = camera();

    camera.set_home_position("p1").unwrap();
    let home = camera.snapshot().ptz.home_position.clone().unwrap();
    assert_eq!(home.profile_token, "p1");
    assert!(home.result);

    camera.ptz_service().script.fail("set_home_position");
    assert!(camera.set_home_position("p2").is_err());
    let home = camera.snapshot().ptz.home_position.clone().unwrap();
    assert_eq!(home.profile_token, "p2");
    assert!(!home.result);
}

// ============================================================================
// Idempotence on failure
// ============================================================================

#[rstest]
#[case("get_system_date_and_time")]
#[case("get_capabilities")]
#[case("get_device_information")]
#[case("get_scopes")]
#[case("get_network_interfaces")]
#[case("get_users")]
fn failed_device_refresh_leaves_snapshot_unchanged(#[case] method: &str) {
    let mut camera = populated_camera();
    let _ = camera.refresh_all();
    let before = camera.snapshot().clone();

    // The device now reports different data, but the query fails
    *camera.device_service().information.borrow_mut() =
        info_map(&[(info_keys::MANUFACTURER, "Other")]);
    camera.device_service().users.borrow_mut().clear();
    camera.device_service().interfaces.borrow_mut().clear();
    camera.device_service().scopes.borrow_mut().clear();
    camera.device_service().date_time.borrow_mut().daylight_savings = false;
    *camera.device_service().capabilities.borrow_mut() = capabilities(None);
    camera.device_service().script.fail(method);

    let result = match method {
        "get_system_date_and_time" => camera.refresh_date_time(),
        "get_capabilities" => camera.refresh_capabilities(),
        "get_device_information" => camera.refresh_information(),
        "get_scopes" => camera.refresh_scopes(),
        "get_network_interfaces" => camera.refresh_network_interfaces(),
        "get_users" => camera.refresh_users(),
        other => panic!("unscripted method {}", other),
    };

    assert!(result.is_err());
    assert_eq!(camera.snapshot(), &before);
}

#[rstest]
#[case("get_stream_uri")]
#[case("get_audio_encoder_configurations")]
#[case("get_audio_source_configurations")]
#[case("get_audio_encoder_configuration_options")]
#[case("get_configuration")]
fn failed_media_refresh_leaves_snapshot_unchanged(#[case] method: &str) {
    let mut camera = populated_camera();
    let report = camera.refresh_all();
    assert!(report.is_complete(), "failed: {:?}", report.failed_areas());
    let before = camera.snapshot().clone();

    // The device now reports different data, but one query of the area fails
    let media = camera.media_service();
    *media.stream_host.borrow_mut() = Some("10.0.0.9".to_string());
    for encoder in media.audio_encoders.borrow_mut().iter_mut() {
        encoder.bitrate = 128;
    }
    media.audio_sources.borrow_mut().clear();
    media.audio_options.borrow_mut().clear();
    camera.ptz_service().configuration.borrow_mut().node_token = "node9".to_string();
    camera.media_service().script.fail(method);
    camera.ptz_service().script.fail(method);

    let result = match method {
        "get_stream_uri" => camera.refresh_stream_uri(),
        "get_configuration" => camera.refresh_ptz_config(),
        _ => camera.refresh_audio_configs(),
    };

    assert!(result.is_err());
    let calls =
        camera.media_service().script.count(method) + camera.ptz_service().script.count(method);
    assert_eq!(calls, 2, "{} should be issued by refresh_all and by the failed refresh", method);
    assert_eq!(camera.snapshot(), &before);
}

#[test]
fn failed_network_refresh_before_first_read_keeps_result_unset() {
    let mut camera = camera();
    camera.device_service().script.fail("get_network_interfaces");
    assert!(camera.refresh_network_interfaces().is_err());
    assert!(!camera.snapshot().network.result);

    camera.device_service().script.heal("get_network_interfaces");
    camera.refresh_network_interfaces().unwrap();
    assert!(camera.snapshot().network.result);
    assert!(camera.snapshot().network.primary().is_none());
}

#[test]
fn failed_refresh_keeps_client_usable() {
    let mut camera = populated_camera();
    camera.device_service().script.fail("get_device_information");
    assert!(camera.refresh_information().is_err());

    camera.device_service().script.heal("get_device_information");
    camera.refresh_information().unwrap();
    assert_eq!(camera.snapshot().information.manufacturer, "Acme");
}

fn populated_camera() -> FakeCamera {
    let camera = camera_with(DeviceConfig::new("10.0.0.5").with_named_profiles("p1", "p2"));
    let device = camera.device_service();

    *device.capabilities.borrow_mut() = capabilities(Some("http://cam/ptz"));
    *device.date_time.borrow_mut() = SystemDateAndTime {
        date_time_type: DateTimeType::Ntp,
        daylight_savings: true,
        time_zone: Some("CET-1CEST".to_string()),
        utc: Some(DateTimeParts { year: 2024, month: 5, day: 1, hour: 12, minute: 0, second: 0 }),
        local: None,
    };
    *device.information.borrow_mut() = info_map(&[
        (info_keys::MANUFACTURER, "Acme"),
        (info_keys::MODEL, "Cam-1"),
        (info_keys::SERIAL_NUMBER, "SN1"),
    ]);
    *device.scopes.borrow_mut() = info_map(&[
        (scope_keys::NAME, "Front Door"),
        (scope_keys::LOCATION, "Porch"),
    ]);
    *device.interfaces.borrow_mut() = vec![NetworkInterface {
        token: "eth0".to_string(),
        enabled: true,
        oper_settings: Some(LinkSettings {
            auto_negotiation: true,
            speed: 100,
            duplex: WireDuplex::Full,
        }),
        ..Default::default()
    }];
    *device.users.borrow_mut() = vec![User {
        username: "admin".to_string(),
        password: None,
        user_level: WireUserLevel::Administrator,
    }];

    load_profiles(&camera, &["p1", "p2"]);
    load_encoders(&camera, &["enc-p1", "enc-p2"]);

    let media = camera.media_service();
    *media.audio_encoders.borrow_mut() = vec![AudioEncoderConfiguration {
        token: "aenc0".to_string(),
        encoding: AudioEncoding::G711,
        bitrate: 64,
        sample_rate: 8,
        ..Default::default()
    }];
    *media.audio_sources.borrow_mut() = vec![AudioSourceConfiguration {
        token: "asrc0".to_string(),
        source_token: "mic0".to_string(),
        ..Default::default()
    }];
    *media.audio_options.borrow_mut() = vec![AudioEncoderOption {
        encoding: AudioEncoding::G711,
        bitrate_list: vec![64],
        sample_rate_list: vec![8],
    }];
    *camera.ptz_service().configuration.borrow_mut() = PtzConfiguration {
        token: "ptz0".to_string(),
        node_token: "node0".to_string(),
        ..Default::default()
    };
    camera
}

#[test]
fn refresh_all_populates_every_area() {
    let mut camera = populated_camera();

    let report = camera.refresh_all();

    assert!(report.is_complete(), "failed: {:?}", report.failed_areas());
    let snapshot = camera.snapshot();
    assert_eq!(snapshot.information.model, "Cam-1");
    assert_eq!(snapshot.scopes.location, "Porch");
    assert!(snapshot.date_time.ntp);
    assert_eq!(snapshot.network.primary().map(|i| i.duplex), Some(Duplex::Full));
    assert_eq!(snapshot.users.primary().map(|u| u.level), Some(UserLevel::Administrator));
    assert_eq!(snapshot.media.video.stream_uri.uri, "rtsp://cam/p1");
    assert!(snapshot.network.result);
    assert_eq!(snapshot.media.audio.encoders.len(), 1);
    assert_eq!(snapshot.media.audio.options.len(), 1);
    assert!(snapshot.ptz.config.is_some());
    // Options fetched once per token, not again for the report
    assert_eq!(camera.media_service().script.count("options:enc-p1"), 1);
}

#[test]
fn refresh_all_reports_failed_areas() {
    let mut camera = populated_camera();
    camera.device_service().script.fail("get_users");
    camera.media_service().script.fail("get_profiles");

    let report = camera.refresh_all();

    // The stream URI needs the profile listing
    assert_eq!(
        report.failed_areas(),
        vec![Area::Users, Area::Profiles, Area::StreamUri]
    );
    assert!(report.refreshed.contains(&Area::Information));
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn commands_do_not_mutate_snapshot() {
    let mut camera = populated_camera();
    let _ = camera.refresh_all();
    let before = camera.snapshot().clone();

    let time = Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
    camera.set_date_time(time).unwrap();
    camera.set_scopes("Back Yard", "Garden").unwrap();
    let active = camera.snapshot().media.video.encoders.active().cloned().unwrap();
    camera
        .set_video_config(&EncoderConfig { width: 640, height: 480, ..active })
        .unwrap();

    assert_eq!(camera.snapshot(), &before);
    assert_eq!(camera.snapshot().scopes.name, "Front Door");
}

#[test]
fn set_date_time_sends_manual_utc() {
    let mut camera = populated_camera();
    camera.refresh_date_time().unwrap();

    let time = Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
    camera.set_date_time(time).unwrap();

    let sent = camera.device_service().sent_date_time.borrow().clone().unwrap();
    assert_eq!(sent.date_time_type, DateTimeType::Manual);
    assert_eq!(sent.time_zone.as_deref(), Some("CET-1CEST"));
    assert!(sent.daylight_savings);
    assert_eq!(
        sent.utc,
        Some(DateTimeParts { year: 2025, month: 3, day: 4, hour: 5, minute: 6, second: 7 })
    );
}

#[test]
fn set_video_config_converts_to_wire() {
    let camera = camera();
    let config = EncoderConfig {
        token: "enc1".to_string(),
        width: 1920,
        height: 1080,
        ..Default::default()
    };

    camera.set_video_config(&config).unwrap();

    let sent = camera.media_service().sent_encoder.borrow().clone().unwrap();
    assert_eq!(sent.token, "enc1");
    assert_eq!((sent.resolution.width, sent.resolution.height), (1920, 1080));
}

#[test]
fn failed_command_reports_kind() {
    let camera = camera();
    camera.device_service().script.unsupported("system_reboot");

    let err = camera.reboot().unwrap_err();

    assert_eq!(err.failure_kind(), Some(FailureKind::Unsupported));
}
