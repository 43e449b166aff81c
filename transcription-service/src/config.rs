/// Default transcription model.
pub const DEFAULT_WHISPER_MODEL: &str = "whisper-large-v3";

/// Default OpenAI-compatible transcription endpoint.
pub const DEFAULT_STT_URL: &str = "https://api.groq.com/openai/v1/audio/transcriptions";

/// Transcription provider settings.
#[derive(Debug, Clone)]
pub struct TranscriptionConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_WHISPER_MODEL.to_string(),
            api_url: DEFAULT_STT_URL.to_string(),
        }
    }
}

impl TranscriptionConfig {
    /// Load configuration from environment variables.
    ///
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GROQ_API_KEY").ok().filter(|key| !key.is_empty()),
            model: std::env::var("GROQ_WHISPER_MODEL")
                .ok()
                .filter(|model| !model.is_empty())
                .unwrap_or_else(|| DEFAULT_WHISPER_MODEL.to_string()),
            api_url: std::env::var("GROQ_STT_URL")
                .ok()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_STT_URL.to_string()),
        }
    }

    /// Whether the provider credential is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
