//! Speech-to-text proxy.
//!
//! Forwards one recorded audio payload plus a language hint to the
//! transcription provider (Groq Whisper over the OpenAI-compatible audio
//! endpoint) and hands back plain text. The credential is checked before
//! anything touches the network, and unexpected failures are normalized
//! to a generic service-unavailable error so no provider internals leak
//! to callers.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use transcription_service::{AudioPayload, TranscriptionService};
//!
//! # async fn example(webm_bytes: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
//! let service = TranscriptionService::from_env();
//! let audio = AudioPayload {
//!     bytes: webm_bytes,
//!     file_name: "recording.webm".to_string(),
//!     content_type: "audio/webm".to_string(),
//! };
//! let transcript = service.transcribe(audio, "en").await?;
//! println!("{transcript}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::*;
pub use error::*;
pub use service::*;
