use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use transcription_service::{AudioPayload, TranscriptionError};

use crate::error::{ApiError, ApiResult};
use crate::server::CareLingoServer;

const DEFAULT_LANGUAGE_HINT: &str = "en";
const DEFAULT_AUDIO_FILE_NAME: &str = "recording.webm";
const DEFAULT_AUDIO_CONTENT_TYPE: &str = "audio/webm";

/// Transcription response body
#[derive(Debug, Serialize, ToSchema)]
pub struct TranscribeResponse {
    /// Transcribed text, empty when the provider produced none
    #[schema(example = "patient reports chest pain since this morning")]
    pub transcript: String,
}

/// Multipart form accepted by the transcribe endpoint
#[derive(Debug, ToSchema)]
pub struct TranscribeForm {
    /// Recorded audio payload
    #[schema(value_type = String, format = Binary)]
    pub audio: Vec<u8>,
    /// Language hint, defaults to `en`
    pub language: Option<String>,
}

/// Transcription handler
#[utoipa::path(
    post,
    path = "/transcribe",
    tag = "transcription",
    request_body(content = TranscribeForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Transcript produced", body = TranscribeResponse),
        (status = 400, description = "Audio file missing", body = crate::error::ApiErrorResponse),
        (status = 500, description = "Provider credential not configured", body = crate::error::ApiErrorResponse),
        (status = 502, description = "Transcription provider failed", body = crate::error::ApiErrorResponse)
    )
)]
pub async fn transcribe(
    State(server): State<CareLingoServer>,
    mut multipart: Multipart,
) -> ApiResult<Json<TranscribeResponse>> {
    // Credential is checked before the form is read; no body is consumed
    // when the proxy cannot forward it anyway.
    if !server.transcriber.is_configured() {
        return Err(TranscriptionError::MissingCredential.into());
    }

    let mut audio: Option<AudioPayload> = None;
    let mut language = DEFAULT_LANGUAGE_HINT.to_string();

    while let Some(field) = multipart.next_field().await.map_err(body_read_failure)? {
        match field.name() {
            Some("audio") => {
                let file_name = field
                    .file_name()
                    .unwrap_or(DEFAULT_AUDIO_FILE_NAME)
                    .to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_AUDIO_CONTENT_TYPE)
                    .to_string();
                let bytes = field.bytes().await.map_err(body_read_failure)?;
                audio = Some(AudioPayload {
                    bytes: bytes.to_vec(),
                    file_name,
                    content_type,
                });
            }
            Some("language") => {
                let value = field.text().await.map_err(body_read_failure)?;
                if !value.is_empty() {
                    language = value;
                }
            }
            _ => {}
        }
    }

    let Some(audio) = audio else {
        return Err(ApiError::validation("Audio file is required"));
    };

    let transcript = server.transcriber.transcribe(audio, &language).await?;
    Ok(Json(TranscribeResponse { transcript }))
}

fn body_read_failure(err: MultipartError) -> ApiError {
    warn!(error = %err, "failed to read multipart request body");
    ApiError::service_unavailable("Transcription service unavailable")
}
