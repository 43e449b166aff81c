use async_trait::async_trait;
use language_registry::LanguageTag;
use thiserror::Error;

use crate::transcript::TranscriptSegment;

/// Failure starting or preparing the platform stream.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct EngineError(pub String);

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Platform speech recognition stream behind a narrow seam.
///
/// `start`/`stop`/`abort` only issue commands; actual lifecycle changes
/// arrive back through [`RecognitionEvent`]s fed to the state machine.
#[async_trait]
pub trait RecognitionEngine: Send {
    /// Request microphone permission ahead of starting the stream.
    ///
    /// Engines without a separate permission primitive keep the default.
    async fn request_permission(&mut self) -> Result<(), EngineError> {
        Ok(())
    }

    /// Begin the recognition stream.
    async fn start(&mut self) -> Result<(), EngineError>;

    /// Ask the stream to finish; the engine confirms with
    /// [`RecognitionEvent::Ended`].
    fn stop(&mut self);

    /// Drop the stream immediately, discarding in-flight audio.
    fn abort(&mut self);

    /// Set the recognition locale used by the next started stream.
    fn set_language(&mut self, language: &LanguageTag);
}

/// Event delivered by the platform recognition stream.
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    /// The stream is live and audio is flowing.
    Started,
    /// Full ordered snapshot of every segment observed so far in this
    /// session, partials included.
    Result { segments: Vec<TranscriptSegment> },
    /// The stream finished, intentionally or not.
    Ended,
    /// Transport or capture failure.
    Error { kind: RecognitionErrorKind },
}

/// Platform error classes the machine knows how to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionErrorKind {
    PermissionDenied,
    NoSpeech,
    AudioCapture,
    Network,
    /// The stream was torn down deliberately.
    Aborted,
    Other,
}
