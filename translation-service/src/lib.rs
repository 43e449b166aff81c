//! Translation fallback router for healthcare conversations.
//!
//! Routes one translation request through an ordered chain of external
//! providers with graceful degradation:
//!
//! 1. **Groq** - LLM translation tuned for medical terminology (needs an
//!    API key)
//! 2. **LibreTranslate** - self-hosted or keyed public instance (only when
//!    explicitly configured)
//! 3. **MyMemory** - public free tier, always attempted as the last resort
//!
//! The first provider returning a non-empty result wins. A non-final
//! provider that fails or returns nothing is logged and skipped, never
//! surfaced to the caller. Setting `TRANSLATION_PROVIDER` pins the chain
//! to a single provider whose failure is terminal.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use translation_service::{TranslationConfig, TranslationRequest, TranslationRouter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TranslationConfig::from_env();
//! let router = TranslationRouter::from_config(&config);
//!
//! let request = TranslationRequest::new(
//!     "Take two tablets daily with food.",
//!     "en-US",
//!     "es-ES",
//! );
//! let outcome = router.translate(&request).await?;
//! println!("[{}] {}", outcome.provider, outcome.translated_text);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod providers;
pub mod router;

pub use config::*;
pub use error::*;
pub use providers::{build_chain, ProviderChain, ProviderId, TranslationProvider};
pub use router::*;
