use crate::operations::media::*;
use crate::types::{
    AudioEncoderConfiguration, AudioEncoderOption, AudioSourceConfiguration, MediaUri, Profile,
    VideoEncoderConfiguration, VideoEncoderConfigurationOptions, VideoSourceConfiguration,
};
use crate::{OnvifClient, Result, Service};

use super::MediaService;

/// SOAP-backed [`MediaService`]
#[derive(Debug, Clone)]
pub struct MediaClient {
    client: OnvifClient,
    endpoint: String,
}

impl MediaClient {
    pub fn new(client: OnvifClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Media service at its conventional path on `address`
    pub fn for_address(client: OnvifClient, address: &str) -> Self {
        Self::new(client, Service::Media.default_endpoint(address))
    }
}

impl MediaService for MediaClient {
    fn set_endpoint(&mut self, endpoint: &str) {
        self.endpoint = endpoint.to_string();
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn get_video_encoder_configurations(&self) -> Result<Vec<VideoEncoderConfiguration>> {
        self.client
            .execute::<GetVideoEncoderConfigurationsOperation>(&self.endpoint, &Default::default())
    }

    fn get_video_source_configurations(&self) -> Result<Vec<VideoSourceConfiguration>> {
        self.client
            .execute::<GetVideoSourceConfigurationsOperation>(&self.endpoint, &Default::default())
    }

    fn get_video_encoder_configuration_options(
        &self,
        configuration_token: &str,
        profile_token: Option<&str>,
    ) -> Result<VideoEncoderConfigurationOptions> {
        let request = GetVideoEncoderConfigurationOptionsOperationRequest {
            configuration_token: configuration_token.to_string(),
            profile_token: profile_token.map(str::to_string),
        };
        self.client
            .execute::<GetVideoEncoderConfigurationOptionsOperation>(&self.endpoint, &request)
    }

    fn get_stream_uri(&self, profile_token: &str) -> Result<MediaUri> {
        let request = GetStreamUriOperationRequest {
            profile_token: profile_token.to_string(),
        };
        self.client.execute::<GetStreamUriOperation>(&self.endpoint, &request)
    }

    fn get_profiles(&self) -> Result<Vec<Profile>> {
        self.client
            .execute::<GetProfilesOperation>(&self.endpoint, &Default::default())
    }

    fn get_profile(&self, token: &str) -> Result<Profile> {
        let request = GetProfileOperationRequest {
            profile_token: token.to_string(),
        };
        self.client.execute::<GetProfileOperation>(&self.endpoint, &request)
    }

    fn set_video_encoder_configuration(&self, configuration: &VideoEncoderConfiguration) -> Result<()> {
        let request = SetVideoEncoderConfigurationOperationRequest {
            configuration: configuration.clone(),
            force_persistence: true,
        };
        self.client
            .execute::<SetVideoEncoderConfigurationOperation>(&self.endpoint, &request)
    }

    fn get_audio_encoder_configurations(&self) -> Result<Vec<AudioEncoderConfiguration>> {
        self.client
            .execute::<GetAudioEncoderConfigurationsOperation>(&self.endpoint, &Default::default())
    }

    fn get_audio_source_configurations(&self) -> Result<Vec<AudioSourceConfiguration>> {
        self.client
            .execute::<GetAudioSourceConfigurationsOperation>(&self.endpoint, &Default::default())
    }

    fn get_audio_encoder_configuration_options(&self) -> Result<Vec<AudioEncoderOption>> {
        self.client.execute::<GetAudioEncoderConfigurationOptionsOperation>(
            &self.endpoint,
            &Default::default(),
        )
    }
}
