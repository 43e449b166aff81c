use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::TranscriptionConfig;
use crate::error::{TranscriptionError, TranscriptionResult};

/// One audio payload captured by a client.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

/// Transcription seam the server is wired through, so handlers can be
/// exercised without a live provider.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Whether the provider credential is present.
    fn is_configured(&self) -> bool;

    /// Transcribe one payload, returning plain text.
    async fn transcribe(&self, audio: AudioPayload, language: &str) -> TranscriptionResult<String>;
}

/// Proxy to the external speech-to-text provider.
pub struct TranscriptionService {
    config: TranscriptionConfig,
    client: reqwest::Client,
}

impl TranscriptionService {
    pub fn new(config: TranscriptionConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(TranscriptionConfig::from_env())
    }

    /// Forward one payload to the provider and extract the transcript.
    ///
    /// Fails with [`TranscriptionError::MissingCredential`] before any
    /// network traffic when no API key is configured.
    pub async fn transcribe(
        &self,
        audio: AudioPayload,
        language: &str,
    ) -> TranscriptionResult<String> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(TranscriptionError::MissingCredential);
        };

        debug!(
            bytes = audio.bytes.len(),
            language = %language,
            model = %self.config.model,
            "forwarding audio to transcription provider"
        );

        let part = reqwest::multipart::Part::bytes(audio.bytes)
            .file_name(audio.file_name)
            .mime_str(&audio.content_type)
            .map_err(|err| {
                warn!(error = %err, "audio payload had an unusable content type");
                TranscriptionError::Unavailable
            })?;

        let mut form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", self.config.model.clone())
            .text("response_format", "json");
        if !language.is_empty() {
            form = form.text("language", language.to_string());
        }

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, "transcription request failed");
                TranscriptionError::Unavailable
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TranscriptionError::Upstream { status, body });
        }

        let data: serde_json::Value = response.json().await.map_err(|err| {
            warn!(error = %err, "transcription response was not valid JSON");
            TranscriptionError::Unavailable
        })?;

        Ok(extract_transcript(&data))
    }
}

#[async_trait]
impl Transcriber for TranscriptionService {
    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn transcribe(&self, audio: AudioPayload, language: &str) -> TranscriptionResult<String> {
        TranscriptionService::transcribe(self, audio, language).await
    }
}

/// Pull the transcript out of the provider response, tolerating both
/// field names the upstream schema has used. Empty fields are skipped the
/// same way a missing field is.
fn extract_transcript(data: &serde_json::Value) -> String {
    let primary = data
        .get("text")
        .and_then(serde_json::Value::as_str)
        .filter(|text| !text.is_empty());
    let fallback = data
        .get("transcript")
        .and_then(serde_json::Value::as_str)
        .filter(|text| !text.is_empty());
    primary.or(fallback).unwrap_or_default().to_string()
}
