//! Refresh orchestrator for one camera

use chrono::{DateTime, Utc};
use onvif_api::types::{
    FactoryDefaultType, SystemDateAndTime, VideoEncoderConfiguration,
};
use onvif_api::{
    ApiError, DeviceClient, DeviceService, MediaClient, MediaService, OnvifClient, PtzClient,
    PtzService, Service, SoapClient,
};
use onvif_state::model::{
    to_wire_utc, AudioConfig, AudioEncoderConfig, AudioEncoderOptions, AudioSourceConfig,
    Capabilities, DeviceDateTime, EncoderConfig, EncoderOptions, HomePosition, Information,
    NetworkInterfaces, ProbeData, PtzConfig, Scopes, SourceConfig, StreamUri, Users,
};
use onvif_state::Snapshot;
use tracing::{debug, info, warn};

use crate::config::DeviceConfig;
use crate::error::{Result, SdkError};
use crate::normalizer::{self, ProfileFetch};
use crate::options;
use crate::report::{Area, RefreshReport};

/// Where PTZ requests go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PtzRoute {
    /// Conventional path; capabilities not refreshed yet
    Default,
    /// Address reported by capabilities
    Bound,
    /// Capabilities reported no PTZ service
    Unsupported,
}

/// One camera: its query facades and the cached [`Snapshot`]
///
/// Every `refresh_*` method issues its queries, then either replaces its
/// area of the snapshot whole or leaves it exactly as it was and returns the
/// error. Commands never write the snapshot, except that the home-position
/// command records its own outcome.
///
/// ```rust,ignore
/// let mut camera = OnvifDevice::connect(DeviceConfig::new("192.168.1.64"))?;
/// camera.refresh_capabilities()?;
/// if camera.refresh_profiles().is_ok() {
///     println!("{:?}", camera.snapshot().profiles.tokens());
/// }
/// ```
pub struct OnvifDevice<D = DeviceClient, M = MediaClient, P = PtzClient> {
    config: DeviceConfig,
    device: D,
    media: M,
    ptz: P,
    ptz_route: PtzRoute,
    snapshot: Snapshot,
}

impl OnvifDevice {
    /// Build SOAP-backed facades for the configured address
    ///
    /// No request is sent until the first refresh.
    pub fn connect(config: DeviceConfig) -> Result<Self> {
        config.validate()?;

        let mut soap = SoapClient::with_timeouts(config.connect_timeout, config.read_timeout);
        if let Some(credentials) = config.credentials() {
            soap = soap.with_credentials(credentials);
        }
        let client = OnvifClient::with_soap_client(soap);

        let device = DeviceClient::new(client.clone(), config.device_url());
        let media = MediaClient::new(client.clone(), config.service_url(Service::Media));
        let ptz = PtzClient::new(client, config.service_url(Service::Ptz));

        info!(device = %config.device_url(), "camera client created");
        Ok(Self::with_services(config, device, media, ptz))
    }
}

impl<D, M, P> OnvifDevice<D, M, P>
where
    D: DeviceService,
    M: MediaService,
    P: PtzService,
{
    pub fn with_services(config: DeviceConfig, device: D, media: M, ptz: P) -> Self {
        let mut probe = ProbeData::new(config.address.trim());
        probe.x_addrs.push(config.device_url());

        Self {
            config,
            device,
            media,
            ptz,
            ptz_route: PtzRoute::Default,
            snapshot: Snapshot::new(probe),
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn device_service(&self) -> &D {
        &self.device
    }

    pub fn media_service(&self) -> &M {
        &self.media
    }

    pub fn ptz_service(&self) -> &P {
        &self.ptz
    }

    /// Replace discovery data, e.g. after a WS-Discovery probe match
    pub fn set_probe(&mut self, probe: ProbeData) {
        self.snapshot.probe = probe;
    }

    // ========================================================================
    // Device area
    // ========================================================================

    pub fn refresh_date_time(&mut self) -> Result<()> {
        let wire = self.device.get_system_date_and_time().map_err(failed(Area::DateTime))?;
        self.snapshot.date_time = DeviceDateTime::from(&wire);
        debug!(area = %Area::DateTime, "refreshed");
        Ok(())
    }

    /// Also re-binds the media and PTZ facades to the reported addresses
    pub fn refresh_capabilities(&mut self) -> Result<()> {
        let wire = self.device.get_capabilities().map_err(failed(Area::Capabilities))?;
        let capabilities = Capabilities::from(&wire);

        if let Some(addr) = &capabilities.media_x_addr {
            self.media.set_endpoint(addr);
        }
        match &capabilities.ptz_x_addr {
            Some(addr) => {
                self.ptz.set_endpoint(addr);
                self.ptz_route = PtzRoute::Bound;
            }
            None => self.ptz_route = PtzRoute::Unsupported,
        }

        debug!(
            area = %Area::Capabilities,
            media = self.media.endpoint(),
            ptz = ?capabilities.ptz_x_addr,
            "refreshed"
        );
        self.snapshot.capabilities = capabilities;
        Ok(())
    }

    pub fn refresh_information(&mut self) -> Result<()> {
        let map = self.device.get_device_information().map_err(failed(Area::Information))?;
        self.snapshot.information = Information::from(&map);
        debug!(area = %Area::Information, "refreshed");
        Ok(())
    }

    pub fn refresh_scopes(&mut self) -> Result<()> {
        let map = self.device.get_scopes().map_err(failed(Area::Scopes))?;
        self.snapshot.scopes = Scopes::from(&map);
        debug!(area = %Area::Scopes, "refreshed");
        Ok(())
    }

    pub fn refresh_network_interfaces(&mut self) -> Result<()> {
        let wire = self
            .device
            .get_network_interfaces()
            .map_err(failed(Area::NetworkInterfaces))?;
        self.snapshot.network = NetworkInterfaces::from(wire.as_slice());
        debug!(area = %Area::NetworkInterfaces, count = wire.len(), "refreshed");
        Ok(())
    }

    pub fn refresh_users(&mut self) -> Result<()> {
        let wire = self.device.get_users().map_err(failed(Area::Users))?;
        self.snapshot.users = Users::from(wire.as_slice());
        debug!(area = %Area::Users, count = wire.len(), "refreshed");
        Ok(())
    }

    // ========================================================================
    // Media area
    // ========================================================================

    /// Refresh encoder and source listings, then the options table
    ///
    /// Both listings must succeed for either to be committed. An options
    /// failure is logged and does not fail this refresh.
    pub fn refresh_video_configs(&mut self) -> Result<()> {
        let (configs, options) = self.refresh_video_configs_and_options();
        if let Err(e) = options {
            warn!(error = %e, "encoder options not refreshed after video configs");
        }
        configs
    }

    /// Listing result and, when the listing succeeded, the options result
    fn refresh_video_configs_and_options(&mut self) -> (Result<()>, Result<()>) {
        let listings = self.media.get_video_encoder_configurations().and_then(|encoders| {
            let sources = self.media.get_video_source_configurations()?;
            Ok((encoders, sources))
        });
        let (encoders, sources) = match listings {
            Ok(listings) => listings,
            Err(e) => {
                let e = failed(Area::VideoConfigs)(e);
                return (Err(e), Err(SdkError::MissingPrerequisite("video configs")));
            }
        };

        let video = &mut self.snapshot.media.video;
        video.encoders.configs = encoders.iter().map(EncoderConfig::from).collect();
        video.source = sources.first().map(SourceConfig::from).unwrap_or_default();
        debug!(area = %Area::VideoConfigs, encoders = encoders.len(), "refreshed");

        (Ok(()), self.refresh_video_configs_options())
    }

    /// Rebuild the options table for the known encoder tokens
    pub fn refresh_video_configs_options(&mut self) -> Result<()> {
        let tokens = self.snapshot.media.video.encoders.tokens();
        let media = &self.media;

        options::rebuild(
            &tokens,
            &mut self.snapshot.media.video.encoders.options,
            self.config.options_rebuild,
            |token| {
                media
                    .get_video_encoder_configuration_options(token, None)
                    .map(|wire| EncoderOptions::from_wire(token, &wire))
            },
        )
        .map_err(failed(Area::VideoConfigsOptions))?;

        debug!(area = %Area::VideoConfigsOptions, tokens = tokens.len(), "refreshed");
        Ok(())
    }

    /// Stream URI of the first listed profile
    pub fn refresh_stream_uri(&mut self) -> Result<()> {
        let token = match self.snapshot.profiles.first_token() {
            Some(token) => token.to_string(),
            None => {
                warn!(area = %Area::StreamUri, "no profile known");
                return Err(SdkError::MissingPrerequisite("profiles"));
            }
        };

        let uri = self.media.get_stream_uri(&token).map_err(failed(Area::StreamUri))?;
        self.snapshot.media.video.stream_uri = StreamUri::from(&uri);
        debug!(area = %Area::StreamUri, profile = %token, "refreshed");
        Ok(())
    }

    /// Audio encoders, sources and encoder options, committed together
    pub fn refresh_audio_configs(&mut self) -> Result<()> {
        let encoders = self
            .media
            .get_audio_encoder_configurations()
            .map_err(failed(Area::AudioConfigs))?;
        let sources = self
            .media
            .get_audio_source_configurations()
            .map_err(failed(Area::AudioConfigs))?;
        let options = if encoders.is_empty() {
            Vec::new()
        } else {
            self.media
                .get_audio_encoder_configuration_options()
                .map_err(failed(Area::AudioConfigs))?
        };

        self.snapshot.media.audio = AudioConfig {
            encoders: encoders.iter().map(AudioEncoderConfig::from).collect(),
            sources: sources.iter().map(AudioSourceConfig::from).collect(),
            options: options.iter().map(AudioEncoderOptions::from).collect(),
        };
        debug!(area = %Area::AudioConfigs, "refreshed");
        Ok(())
    }

    /// Rebuild the profile listing and both named profiles
    pub fn refresh_profiles(&mut self) -> Result<()> {
        let fetch = ProfileFetch {
            listing: self.media.get_profiles(),
            profile_720p: self.media.get_profile(&self.config.profile_720p_token),
            profile_d1: self.media.get_profile(&self.config.profile_d1_token),
        };
        normalizer::apply(&mut self.snapshot, fetch)
    }

    // ========================================================================
    // PTZ area
    // ========================================================================

    fn ptz_available(&self) -> std::result::Result<(), ApiError> {
        match self.ptz_route {
            PtzRoute::Unsupported => Err(ApiError::NotSupported(
                "device reports no PTZ service".to_string(),
            )),
            PtzRoute::Default | PtzRoute::Bound => Ok(()),
        }
    }

    pub fn refresh_ptz_config(&mut self) -> Result<()> {
        let wire = self
            .ptz_available()
            .and_then(|()| self.ptz.get_configuration())
            .map_err(failed(Area::PtzConfig))?;
        self.snapshot.ptz.config = Some(PtzConfig::from(&wire));
        debug!(area = %Area::PtzConfig, token = %wire.token, "refreshed");
        Ok(())
    }

    // ========================================================================
    // Refresh pass
    // ========================================================================

    /// Run every refresh in dependency order
    ///
    /// Capabilities come first so later queries use the reported endpoints;
    /// profiles precede the stream URI that needs a profile token.
    pub fn refresh_all(&mut self) -> RefreshReport {
        let mut report = RefreshReport::default();

        let r = self.refresh_capabilities();
        report.record(Area::Capabilities, r);
        let r = self.refresh_date_time();
        report.record(Area::DateTime, r);
        let r = self.refresh_information();
        report.record(Area::Information, r);
        let r = self.refresh_scopes();
        report.record(Area::Scopes, r);
        let r = self.refresh_network_interfaces();
        report.record(Area::NetworkInterfaces, r);
        let r = self.refresh_users();
        report.record(Area::Users, r);
        let r = self.refresh_profiles();
        report.record(Area::Profiles, r);
        let (configs, options) = self.refresh_video_configs_and_options();
        report.record(Area::VideoConfigs, configs);
        report.record(Area::VideoConfigsOptions, options);
        let r = self.refresh_stream_uri();
        report.record(Area::StreamUri, r);
        let r = self.refresh_audio_configs();
        report.record(Area::AudioConfigs, r);
        let r = self.refresh_ptz_config();
        report.record(Area::PtzConfig, r);

        info!(
            refreshed = report.refreshed.len(),
            failed = report.failed.len(),
            "refresh pass finished"
        );
        report
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Set the device clock manually to `time`
    ///
    /// Keeps the zone and daylight-savings flag from the last date/time
    /// refresh.
    pub fn set_date_time(&self, time: DateTime<Utc>) -> Result<()> {
        let request = SystemDateAndTime {
            daylight_savings: self.snapshot.date_time.daylight_savings,
            time_zone: self.snapshot.date_time.time_zone.clone(),
            utc: Some(to_wire_utc(time)),
            ..Default::default()
        };
        self.device
            .set_system_date_and_time(&request)
            .map_err(command_failed("set_date_time"))
    }

    /// Set the clock to this host's current time
    pub fn sync_time(&self) -> Result<()> {
        self.set_date_time(Utc::now())
    }

    pub fn set_scopes(&self, name: &str, location: &str) -> Result<()> {
        self.device
            .set_scopes(name, location)
            .map_err(command_failed("set_scopes"))
    }

    pub fn set_video_config(&self, config: &EncoderConfig) -> Result<()> {
        self.media
            .set_video_encoder_configuration(&VideoEncoderConfiguration::from(config))
            .map_err(command_failed("set_video_config"))
    }

    /// Returns the device's reboot message
    pub fn reboot(&self) -> Result<String> {
        self.device.system_reboot().map_err(command_failed("reboot"))
    }

    pub fn factory_reset(&self, kind: FactoryDefaultType) -> Result<()> {
        self.device
            .set_system_factory_default(kind)
            .map_err(command_failed("factory_reset"))
    }

    /// Store the current position as home for `profile_token`
    ///
    /// The token and outcome are recorded in `snapshot().ptz.home_position`.
    pub fn set_home_position(&mut self, profile_token: &str) -> Result<()> {
        let result = self
            .ptz_available()
            .and_then(|()| self.ptz.set_home_position(profile_token));

        self.snapshot.ptz.home_position = Some(HomePosition {
            profile_token: profile_token.to_string(),
            result: result.is_ok(),
        });
        result.map_err(command_failed("set_home_position"))
    }

    pub fn goto_home_position(&self, profile_token: &str) -> Result<()> {
        self.ptz_available()
            .and_then(|()| self.ptz.goto_home_position(profile_token))
            .map_err(command_failed("goto_home_position"))
    }
}

fn failed(area: Area) -> impl Fn(ApiError) -> SdkError {
    move |e| {
        warn!(area = %area, kind = ?e.kind(), error = %e, "refresh failed");
        SdkError::Api(e)
    }
}

fn command_failed(command: &'static str) -> impl Fn(ApiError) -> SdkError {
    move |e| {
        warn!(command, kind = ?e.kind(), error = %e, "command failed");
        SdkError::Api(e)
    }
}

impl<D, M, P> std::fmt::Debug for OnvifDevice<D, M, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnvifDevice")
            .field("address", &self.config.address)
            .field("ptz_route", &self.ptz_route)
            .finish_non_exhaustive()
    }
}
