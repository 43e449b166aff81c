use thiserror::Error;

use crate::providers::ProviderId;

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{variable} missing")]
    MissingCredential { variable: &'static str },

    #[error("{provider} returned status {status}: {body}")]
    Upstream {
        provider: ProviderId,
        status: u16,
        body: String,
    },

    #[error("Translation failed via all providers")]
    AllProvidersFailed,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type TranslationResult<T> = Result<T, TranslationError>;
