use thiserror::Error;

/// Failures talking to the messaging provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("Provider rejected request with status {status}")]
    Rejected {
        status: u16,
        body: serde_json::Value,
    },
}

/// Failures of the local template mirror.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Template record already exists: {0}")]
    Duplicate(String),

    #[error("Template store error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Provider create response carries no status")]
    MissingStatus,

    #[error("Template structure could not be mapped: {0}")]
    Structure(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Upstream rejected request with status {status}")]
    UpstreamRejected {
        status: u16,
        body: serde_json::Value,
    },

    #[error("Persistence failure: {0}")]
    Persistence(String),

    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<ProviderError> for SyncError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Unavailable(reason) => SyncError::UpstreamUnavailable(reason),
            ProviderError::Rejected { status, body } => SyncError::UpstreamRejected { status, body },
        }
    }
}

impl From<StoreError> for SyncError {
    fn from(err: StoreError) -> Self {
        SyncError::Persistence(err.to_string())
    }
}

pub type SyncResult<T> = Result<T, SyncError>;
