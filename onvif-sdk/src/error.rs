use onvif_api::{ApiError, FailureKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A refresh needs data another refresh has not produced yet
    #[error("Missing prerequisite: {0} must be refreshed first")]
    MissingPrerequisite(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SdkError {
    /// Broad cause, when the failure came from the device exchange
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            SdkError::Api(e) => Some(e.kind()),
            _ => None,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        self.failure_kind() == Some(FailureKind::Unsupported)
    }
}

pub type Result<T> = std::result::Result<T, SdkError>;
