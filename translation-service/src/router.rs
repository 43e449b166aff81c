use language_registry::LanguageTag;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::TranslationConfig;
use crate::error::{TranslationError, TranslationResult};
use crate::providers::{build_chain, ProviderId, TranslationProvider};

/// One translation request. Immutable for the duration of the call.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source: LanguageTag,
    pub target: LanguageTag,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source: impl Into<LanguageTag>,
        target: impl Into<LanguageTag>,
    ) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    fn validate(&self) -> TranslationResult<()> {
        if self.text.trim().is_empty()
            || self.source.as_str().trim().is_empty()
            || self.target.as_str().trim().is_empty()
        {
            return Err(TranslationError::Validation(
                "text, source language and target language are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// A successful translation and the provider that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationOutcome {
    pub translated_text: String,
    pub provider: ProviderId,
}

/// Ordered fallback over the configured providers.
///
/// Providers are tried strictly sequentially. The first non-empty result
/// short-circuits the chain; a non-final provider that fails or returns
/// nothing is logged at warn and skipped. In override mode the single
/// provider's result is returned as produced, empty or not, and its
/// failure is terminal.
pub struct TranslationRouter {
    providers: Vec<Box<dyn TranslationProvider>>,
    terminal: bool,
}

impl TranslationRouter {
    /// Build the router from configuration with a shared HTTP client.
    pub fn from_config(config: &TranslationConfig) -> Self {
        let client = reqwest::Client::new();
        let chain = build_chain(config, &client);
        Self {
            providers: chain.providers,
            terminal: chain.terminal,
        }
    }

    /// Build a router over an explicit provider list.
    ///
    /// `terminal` reproduces override semantics: the first provider's
    /// failure fails the request instead of falling through.
    pub fn with_providers(providers: Vec<Box<dyn TranslationProvider>>, terminal: bool) -> Self {
        Self {
            providers,
            terminal,
        }
    }

    /// Wire tags of the chain in attempt order.
    pub fn provider_ids(&self) -> Vec<ProviderId> {
        self.providers.iter().map(|provider| provider.id()).collect()
    }

    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> TranslationResult<TranslationOutcome> {
        request.validate()?;

        let last_index = self.providers.len().saturating_sub(1);
        for (index, provider) in self.providers.iter().enumerate() {
            let is_last = index == last_index;
            debug!(provider = %provider.id(), "attempting translation");

            match provider.translate(request).await {
                Ok(text) if self.terminal || !text.trim().is_empty() => {
                    return Ok(TranslationOutcome {
                        translated_text: text,
                        provider: provider.id(),
                    });
                }
                Ok(_) => {
                    warn!(provider = %provider.id(), "provider returned an empty translation");
                }
                Err(err) if self.terminal || is_last => return Err(err),
                Err(err) => {
                    warn!(
                        provider = %provider.id(),
                        error = %err,
                        "translation provider failed, trying next"
                    );
                }
            }
        }

        Err(TranslationError::AllProvidersFailed)
    }
}
