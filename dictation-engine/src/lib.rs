//! Speech capture for healthcare dictation.
//!
//! Two capture paths feed one transcript:
//!
//! - **Live dictation**: a platform recognition stream wrapped behind the
//!   [`RecognitionEngine`] trait, driven by [`DictationMachine`] through
//!   `Idle → Starting → Recording → Stopping → Idle`. Result events carry
//!   the full segment snapshot and the transcript is recomputed from
//!   scratch each time, so duplicated or reordered partials cannot
//!   corrupt it.
//! - **Fallback recording**: when live dictation is unavailable,
//!   [`FallbackRecorder`] buffers raw audio chunks for one record/stop
//!   cycle and submits the packaged recording through a
//!   [`TranscriptionBackend`] (HTTP implementation included).
//!
//! Every capture error maps to a fixed user-facing message and returns
//! the machine to idle; nothing here is fatal to the session loop.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use dictation_engine::{DictationMachine, RecognitionEvent, TranscriptSegment};
//! # use dictation_engine::{EngineError, RecognitionEngine};
//! # use language_registry::LanguageTag;
//! # struct PlatformStream;
//! # #[async_trait::async_trait]
//! # impl RecognitionEngine for PlatformStream {
//! #     async fn start(&mut self) -> Result<(), EngineError> { Ok(()) }
//! #     fn stop(&mut self) {}
//! #     fn abort(&mut self) {}
//! #     fn set_language(&mut self, _language: &LanguageTag) {}
//! # }
//! # async fn example() {
//! let mut machine = DictationMachine::new(PlatformStream);
//! machine.start_recording().await;
//! machine.handle_event(RecognitionEvent::Started);
//! machine.handle_event(RecognitionEvent::Result {
//!     segments: vec![TranscriptSegment::finalized("patient reports chest pain")],
//! });
//! machine.stop_recording();
//! machine.handle_event(RecognitionEvent::Ended);
//! assert_eq!(machine.transcript(), "patient reports chest pain");
//! # }
//! ```

pub mod backend;
pub mod engine;
pub mod error;
pub mod machine;
pub mod recorder;
pub mod transcript;

pub use backend::*;
pub use engine::*;
pub use error::*;
pub use machine::*;
pub use recorder::*;
pub use transcript::*;
