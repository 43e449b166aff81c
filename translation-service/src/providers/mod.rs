pub mod groq;
pub mod libre;
pub mod mymemory;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::{ProviderOverride, TranslationConfig};
use crate::error::TranslationResult;
use crate::router::TranslationRequest;

/// Identity of a translation provider, serialized as its wire tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Groq,
    Libretranslate,
    Mymemory,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::Libretranslate => "libretranslate",
            Self::Mymemory => "mymemory",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for translation providers.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Wire tag reported alongside a successful translation.
    fn id(&self) -> ProviderId;

    /// Translate one request, returning the provider text as produced.
    ///
    /// An empty string is a valid return; the router decides whether it
    /// falls through to the next provider.
    async fn translate(&self, request: &TranslationRequest) -> TranslationResult<String>;
}

/// Ordered provider chain plus its fallback semantics.
pub struct ProviderChain {
    pub providers: Vec<Box<dyn TranslationProvider>>,
    /// Set for an override chain: the single provider's failure is
    /// terminal and nothing falls through.
    pub terminal: bool,
}

/// Assemble the provider chain for a configuration.
///
/// An explicit override yields exactly one terminal provider. Otherwise
/// the chain is Groq (when a key is configured), LibreTranslate (when a
/// key or a self-hosted URL is configured), then MyMemory as the
/// unconditional last resort.
pub fn build_chain(config: &TranslationConfig, client: &reqwest::Client) -> ProviderChain {
    if let Some(forced) = config.provider_override {
        let provider: Box<dyn TranslationProvider> = match forced {
            ProviderOverride::Groq => {
                Box::new(groq::GroqTranslator::new(config.groq.clone(), client.clone()))
            }
            ProviderOverride::Libre => {
                Box::new(libre::LibreTranslator::new(config.libre.clone(), client.clone()))
            }
            ProviderOverride::Mymemory => {
                Box::new(mymemory::MyMemoryTranslator::new(client.clone()))
            }
        };
        return ProviderChain {
            providers: vec![provider],
            terminal: true,
        };
    }

    let mut providers: Vec<Box<dyn TranslationProvider>> = Vec::new();
    if config.groq.api_key.is_some() {
        providers.push(Box::new(groq::GroqTranslator::new(
            config.groq.clone(),
            client.clone(),
        )));
    }
    if config.libre.enabled() {
        providers.push(Box::new(libre::LibreTranslator::new(
            config.libre.clone(),
            client.clone(),
        )));
    }
    providers.push(Box::new(mymemory::MyMemoryTranslator::new(client.clone())));

    ProviderChain {
        providers,
        terminal: false,
    }
}
