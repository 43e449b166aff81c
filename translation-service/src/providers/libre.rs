//! LibreTranslate provider.
//!
//! Talks to the configured endpoint (public keyed instance or self-hosted)
//! with reduced ISO 639-1 codes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::LibreConfig;
use crate::error::{TranslationError, TranslationResult};
use crate::providers::{ProviderId, TranslationProvider};
use crate::router::TranslationRequest;

pub struct LibreTranslator {
    config: LibreConfig,
    client: reqwest::Client,
}

impl LibreTranslator {
    pub fn new(config: LibreConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }
}

#[derive(Debug, Serialize)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct LibreResponse {
    #[serde(default, rename = "translatedText")]
    translated_text: Option<String>,
    // some self-hosted builds reply with the snake_case spelling
    #[serde(default, rename = "translated_text")]
    translated_text_alt: Option<String>,
}

impl LibreResponse {
    fn into_text(self) -> String {
        self.translated_text
            .or(self.translated_text_alt)
            .unwrap_or_default()
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslator {
    fn id(&self) -> ProviderId {
        ProviderId::Libretranslate
    }

    async fn translate(&self, request: &TranslationRequest) -> TranslationResult<String> {
        let body = LibreRequest {
            q: &request.text,
            source: request.source.primary(),
            target: request.target.primary(),
            format: "text",
            api_key: self.config.api_key.as_deref(),
        };

        let response = self
            .client
            .post(self.config.endpoint())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslationError::Upstream {
                provider: ProviderId::Libretranslate,
                status: response.status().as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let data: LibreResponse = response.json().await?;
        Ok(data.into_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_primary_subtags() {
        let request = TranslationRequest::new("Good morning", "en-GB", "pt-BR");
        let body = LibreRequest {
            q: &request.text,
            source: request.source.primary(),
            target: request.target.primary(),
            format: "text",
            api_key: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["source"], "en");
        assert_eq!(value["target"], "pt");
        assert!(value.get("api_key").is_none());
    }

    #[test]
    fn response_accepts_both_field_spellings() {
        let camel: LibreResponse =
            serde_json::from_value(serde_json::json!({"translatedText": "Bom dia"})).unwrap();
        assert_eq!(camel.into_text(), "Bom dia");

        let snake: LibreResponse =
            serde_json::from_value(serde_json::json!({"translated_text": "Bom dia"})).unwrap();
        assert_eq!(snake.into_text(), "Bom dia");

        let neither: LibreResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(neither.into_text(), "");
    }
}
