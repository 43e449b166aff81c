use serde::{Deserialize, Serialize};

/// Default Groq chat model used for translation.
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.1-70b-versatile";

/// Default sampling temperature; translation wants near-deterministic output.
pub const DEFAULT_GROQ_TEMPERATURE: f32 = 0.1;

/// Default completion cap for a single translation.
pub const DEFAULT_GROQ_MAX_TOKENS: u32 = 500;

/// Public LibreTranslate endpoint used when no self-hosted URL is configured.
pub const DEFAULT_LIBRETRANSLATE_URL: &str = "https://libretranslate.com/translate";

/// Forced provider selection, parsed from `TRANSLATION_PROVIDER`.
///
/// When set, the fallback chain collapses to exactly this provider and its
/// failure fails the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderOverride {
    Groq,
    Libre,
    Mymemory,
}

impl ProviderOverride {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "groq" => Some(Self::Groq),
            "libre" => Some(Self::Libre),
            "mymemory" => Some(Self::Mymemory),
            _ => None,
        }
    }
}

/// Groq LLM translation settings.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GROQ_MODEL.to_string(),
            temperature: DEFAULT_GROQ_TEMPERATURE,
            max_tokens: DEFAULT_GROQ_MAX_TOKENS,
        }
    }
}

/// LibreTranslate settings.
///
/// The provider joins the fallback chain only when an API key or a
/// self-hosted URL is explicitly configured.
#[derive(Debug, Clone, Default)]
pub struct LibreConfig {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
}

impl LibreConfig {
    pub fn enabled(&self) -> bool {
        self.api_key.is_some() || self.api_url.is_some()
    }

    pub fn endpoint(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_LIBRETRANSLATE_URL)
    }
}

/// Translation service configuration.
#[derive(Debug, Clone, Default)]
pub struct TranslationConfig {
    pub provider_override: Option<ProviderOverride>,
    pub groq: GroqConfig,
    pub libre: LibreConfig,
}

impl TranslationConfig {
    /// Load configuration from environment variables.
    ///
    /// Empty values count as unset, and an unrecognized
    /// `TRANSLATION_PROVIDER` falls back to the automatic chain.
    pub fn from_env() -> Self {
        let provider_override = std::env::var("TRANSLATION_PROVIDER")
            .ok()
            .filter(|value| !value.is_empty())
            .and_then(|value| {
                let parsed = ProviderOverride::parse(&value);
                if parsed.is_none() {
                    tracing::warn!(
                        value = %value,
                        "unknown TRANSLATION_PROVIDER value, using automatic fallback"
                    );
                }
                parsed
            });

        let groq = GroqConfig {
            api_key: std::env::var("GROQ_API_KEY").ok().filter(|key| !key.is_empty()),
            model: std::env::var("GROQ_MODEL")
                .ok()
                .filter(|model| !model.is_empty())
                .unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string()),
            temperature: std::env::var("GROQ_TEMPERATURE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_GROQ_TEMPERATURE),
            max_tokens: std::env::var("GROQ_MAX_TOKENS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_GROQ_MAX_TOKENS),
        };

        let libre = LibreConfig {
            api_key: std::env::var("LIBRETRANSLATE_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            api_url: std::env::var("LIBRETRANSLATE_URL")
                .ok()
                .filter(|url| !url.is_empty()),
        };

        Self {
            provider_override,
            groq,
            libre,
        }
    }
}
