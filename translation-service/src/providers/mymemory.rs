//! MyMemory provider, the unconditional last resort.
//!
//! Public free tier, no credential. Queried with
//! `q=<text>&langpair=<src>|<tgt>` using primary subtags.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{TranslationError, TranslationResult};
use crate::providers::{ProviderId, TranslationProvider};
use crate::router::TranslationRequest;

pub const MYMEMORY_API_URL: &str = "https://api.mymemory.translated.net/get";

pub struct MyMemoryTranslator {
    client: reqwest::Client,
}

impl MyMemoryTranslator {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(default, rename = "responseData")]
    response_data: Option<MyMemoryData>,
}

#[derive(Debug, Deserialize)]
struct MyMemoryData {
    #[serde(default, rename = "translatedText")]
    translated_text: Option<String>,
}

#[async_trait]
impl TranslationProvider for MyMemoryTranslator {
    fn id(&self) -> ProviderId {
        ProviderId::Mymemory
    }

    async fn translate(&self, request: &TranslationRequest) -> TranslationResult<String> {
        let langpair = format!("{}|{}", request.source.primary(), request.target.primary());

        let response = self
            .client
            .get(MYMEMORY_API_URL)
            .query(&[("q", request.text.as_str()), ("langpair", langpair.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslationError::Upstream {
                provider: ProviderId::Mymemory,
                status: response.status().as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let data: MyMemoryResponse = response.json().await?;
        Ok(data
            .response_data
            .and_then(|data| data.translated_text)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_extraction() {
        let data: MyMemoryResponse = serde_json::from_value(serde_json::json!({
            "responseData": {"translatedText": "Hola", "match": 0.98}
        }))
        .unwrap();
        assert_eq!(
            data.response_data.and_then(|d| d.translated_text).as_deref(),
            Some("Hola")
        );

        let empty: MyMemoryResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(empty.response_data.is_none());
    }

    #[test]
    fn langpair_uses_primary_subtags() {
        let request = TranslationRequest::new("hello", "en-US", "zh-TW");
        let langpair = format!("{}|{}", request.source.primary(), request.target.primary());
        assert_eq!(langpair, "en|zh");
    }
}
