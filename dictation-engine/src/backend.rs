use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::recorder::RecordedAudio;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("transcription endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unusable recording payload: {0}")]
    InvalidPayload(String),

    #[error("malformed transcription response")]
    MalformedResponse,
}

/// Where a packaged recording goes for transcription.
///
/// The recorder only needs text back; everything about transport and
/// provider selection lives behind this seam.
#[async_trait]
pub trait TranscriptionBackend: Send + Sync {
    async fn transcribe(&self, audio: RecordedAudio, language: &str)
        -> Result<String, BackendError>;
}

/// Posts recordings to the transcription proxy endpoint as multipart
/// form data with `audio` and `language` fields.
pub struct HttpTranscriptionBackend {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpTranscriptionBackend {
    /// `endpoint` is the full URL of the proxy's transcribe route,
    /// e.g. `http://localhost:8080/transcribe`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TranscribeReply {
    #[serde(default)]
    transcript: String,
}

#[async_trait]
impl TranscriptionBackend for HttpTranscriptionBackend {
    async fn transcribe(
        &self,
        audio: RecordedAudio,
        language: &str,
    ) -> Result<String, BackendError> {
        let part = reqwest::multipart::Part::bytes(audio.bytes)
            .file_name(audio.file_name)
            .mime_str(&audio.content_type)
            .map_err(|err| BackendError::InvalidPayload(err.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .part("audio", part)
            .text("language", language.to_string());

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::Status {
                status: response.status().as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let reply: TranscribeReply = response
            .json()
            .await
            .map_err(|_| BackendError::MalformedResponse)?;
        Ok(reply.transcript)
    }
}
