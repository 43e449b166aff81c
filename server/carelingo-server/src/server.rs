use std::sync::Arc;

use language_registry::{DEFAULT_SOURCE, DEFAULT_TARGET};
use transcription_service::{Transcriber, TranscriptionConfig, TranscriptionService};
use translation_service::{TranslationConfig, TranslationRouter};

/// Main CareLingo server state
#[derive(Clone)]
pub struct CareLingoServer {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Translation fallback router
    pub translator: Arc<TranslationRouter>,
    /// Speech-to-text proxy
    pub transcriber: Arc<dyn Transcriber>,
}

/// Application configuration assembled once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Translation provider settings
    pub translation: TranslationConfig,
    /// Transcription provider settings
    pub transcription: TranscriptionConfig,
    /// Default source locale tag
    pub default_source: String,
    /// Default target locale tag
    pub default_target: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            translation: TranslationConfig::from_env(),
            transcription: TranscriptionConfig::from_env(),
            default_source: std::env::var("DEFAULT_SOURCE_LANG")
                .ok()
                .filter(|tag| !tag.is_empty())
                .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            default_target: std::env::var("DEFAULT_TARGET_LANG")
                .ok()
                .filter(|tag| !tag.is_empty())
                .unwrap_or_else(|| DEFAULT_TARGET.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            translation: TranslationConfig::default(),
            transcription: TranscriptionConfig::default(),
            default_source: DEFAULT_SOURCE.to_string(),
            default_target: DEFAULT_TARGET.to_string(),
        }
    }
}

impl CareLingoServer {
    /// Create a server instance from the process environment.
    pub fn from_env() -> Self {
        let config = AppConfig::from_env();
        let translator = TranslationRouter::from_config(&config.translation);
        let transcriber = TranscriptionService::new(config.transcription.clone());

        Self {
            config: Arc::new(config),
            translator: Arc::new(translator),
            transcriber: Arc::new(transcriber),
        }
    }

    /// Create a server instance over explicit services. Used by tests to
    /// inject stub providers.
    pub fn with_services(
        config: AppConfig,
        translator: TranslationRouter,
        transcriber: Arc<dyn Transcriber>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            translator: Arc::new(translator),
            transcriber,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_registry_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.default_source, "en-US");
        assert_eq!(config.default_target, "es-ES");
        assert!(config.translation.provider_override.is_none());
        assert!(!config.transcription.is_configured());
    }
}
