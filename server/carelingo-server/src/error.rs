use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use transcription_service::TranscriptionError;
use translation_service::TranslationError;

/// Standard API error response structure
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Unique error ID for tracking
    pub error_id: String,
    /// Error type/code
    pub error_type: String,
    /// Human-readable error message
    pub message: String,
    /// Timestamp when error occurred
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Main API error enum
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Configuration { message: String },

    #[error("{message}")]
    Upstream { message: String },

    #[error("Translation failed via all providers")]
    AllProvidersFailed,

    #[error("{message}")]
    ServiceUnavailable { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a service-unavailable error
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            ApiError::AllProvidersFailed => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "validation_error",
            ApiError::Configuration { .. } => "configuration_error",
            ApiError::Upstream { .. } => "upstream_error",
            ApiError::AllProvidersFailed => "all_providers_failed",
            ApiError::ServiceUnavailable { .. } => "service_unavailable",
            ApiError::Internal { .. } => "internal_error",
        }
    }
}

impl From<TranslationError> for ApiError {
    fn from(err: TranslationError) -> Self {
        match err {
            TranslationError::Validation(message) => ApiError::Validation { message },
            TranslationError::MissingCredential { .. } => ApiError::Configuration {
                message: err.to_string(),
            },
            TranslationError::Upstream { .. } => ApiError::Upstream {
                message: err.to_string(),
            },
            TranslationError::AllProvidersFailed => ApiError::AllProvidersFailed,
            // Transport and decode failures stay opaque to callers.
            TranslationError::Network(_) | TranslationError::Serialization(_) => {
                ApiError::ServiceUnavailable {
                    message: "Translation service temporarily unavailable. Please try again."
                        .to_string(),
                }
            }
        }
    }
}

impl From<TranscriptionError> for ApiError {
    fn from(err: TranscriptionError) -> Self {
        match err {
            TranscriptionError::MissingCredential => ApiError::Configuration {
                message: err.to_string(),
            },
            TranscriptionError::Upstream { .. } => ApiError::Upstream {
                message: err.to_string(),
            },
            TranscriptionError::Unavailable => ApiError::ServiceUnavailable {
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4().to_string();
        let status_code = self.status_code();

        // Log the error with correlation ID
        error!(
            error_id = %error_id,
            error_type = %self.error_type(),
            status_code = %status_code.as_u16(),
            error = %self,
            "API error occurred"
        );

        let error_response = ApiErrorResponse {
            error_id,
            error_type: self.error_type().to_string(),
            message: self.to_string(),
            timestamp: chrono::Utc::now(),
        };

        (status_code, Json(error_response)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_errors_map_to_documented_statuses() {
        let validation: ApiError =
            TranslationError::Validation("text is required".to_string()).into();
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(validation.error_type(), "validation_error");

        let credential: ApiError = TranslationError::MissingCredential {
            variable: "GROQ_API_KEY",
        }
        .into();
        assert_eq!(credential.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(credential.to_string(), "GROQ_API_KEY missing");

        let exhausted: ApiError = TranslationError::AllProvidersFailed.into();
        assert_eq!(exhausted.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(exhausted.to_string(), "Translation failed via all providers");
    }

    #[test]
    fn transcription_errors_map_to_documented_statuses() {
        let credential: ApiError = TranscriptionError::MissingCredential.into();
        assert_eq!(credential.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(credential.to_string(), "GROQ_API_KEY not configured");

        let upstream: ApiError = TranscriptionError::Upstream {
            status: 413,
            body: "payload too large".to_string(),
        }
        .into();
        assert_eq!(upstream.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(upstream.to_string(), "Groq STT failed: 413 payload too large");

        let unavailable: ApiError = TranscriptionError::Unavailable.into();
        assert_eq!(unavailable.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(unavailable.to_string(), "Transcription service unavailable");
    }
}
