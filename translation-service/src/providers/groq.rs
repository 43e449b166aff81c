//! Groq LLM translation provider.
//!
//! Uses the OpenAI-compatible chat completions endpoint with a system
//! prompt that pins the model to the healthcare translator role. Gets the
//! full locale tags, not the reduced ISO 639-1 codes; the model handles
//! regional variants better with them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::GroqConfig;
use crate::error::{TranslationError, TranslationResult};
use crate::providers::{ProviderId, TranslationProvider};
use crate::router::TranslationRequest;

pub const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

const SYSTEM_PROMPT: &str = "You are a professional healthcare translator. \
    Provide accurate, clear translations while preserving medical terminology and context.";

pub struct GroqTranslator {
    config: GroqConfig,
    client: reqwest::Client,
}

impl GroqTranslator {
    pub fn new(config: GroqConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

fn build_prompt(request: &TranslationRequest) -> String {
    format!(
        "Translate the following text from {} to {}. \
         Keep it medically accurate and professional.\n\nText: {}",
        request.source, request.target, request.text
    )
}

#[async_trait]
impl TranslationProvider for GroqTranslator {
    fn id(&self) -> ProviderId {
        ProviderId::Groq
    }

    async fn translate(&self, request: &TranslationRequest) -> TranslationResult<String> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(TranslationError::MissingCredential {
                variable: "GROQ_API_KEY",
            });
        };

        let prompt = build_prompt(request);
        let body = ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
        };

        let response = self
            .client
            .post(GROQ_CHAT_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslationError::Upstream {
                provider: ProviderId::Groq,
                status: response.status().as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let data: ChatResponse = response.json().await?;
        let content = data
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        Ok(content)
    }
}
