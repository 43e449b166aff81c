use std::time::Duration;

use language_registry::LanguageTag;
use tracing::{debug, warn};

use crate::engine::{RecognitionEngine, RecognitionErrorKind, RecognitionEvent};
use crate::error::CaptureError;
use crate::transcript::TranscriptState;

/// How long the UI keeps a surfaced capture error before auto-dismissing.
pub const ERROR_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Capture session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    /// Start was issued; waiting for the stream to report live.
    Starting,
    Recording,
    /// Stop was issued; waiting for the stream to confirm the end.
    Stopping,
}

/// Drives one platform recognition stream through
/// `Idle → Starting → Recording → Stopping → Idle`.
///
/// Commands go out through the [`RecognitionEngine`]; lifecycle changes
/// come back in through [`DictationMachine::handle_event`]. Errors are
/// surfaced as state ([`DictationMachine::error`]) rather than returned,
/// and every one of them settles the machine back at idle.
pub struct DictationMachine<E> {
    engine: Option<E>,
    state: CaptureState,
    transcript: TranscriptState,
    error: Option<CaptureError>,
    language: LanguageTag,
}

impl<E: RecognitionEngine> DictationMachine<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine: Some(engine),
            state: CaptureState::Idle,
            transcript: TranscriptState::default(),
            error: None,
            language: LanguageTag::new(language_registry::DEFAULT_SOURCE),
        }
    }

    /// Machine for a platform without live dictation.
    ///
    /// `start_recording` becomes a no-op and the not-supported message is
    /// surfaced immediately; callers switch to the fallback recorder.
    pub fn unsupported() -> Self {
        Self {
            engine: None,
            state: CaptureState::Idle,
            transcript: TranscriptState::default(),
            error: Some(CaptureError::Unsupported),
            language: LanguageTag::new(language_registry::DEFAULT_SOURCE),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.engine.is_some()
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state == CaptureState::Recording
    }

    pub fn transcript(&self) -> &str {
        self.transcript.text()
    }

    pub fn error(&self) -> Option<CaptureError> {
        self.error
    }

    pub fn language(&self) -> &LanguageTag {
        &self.language
    }

    /// The wrapped platform stream, for event pumping by the caller glue.
    pub fn engine(&self) -> Option<&E> {
        self.engine.as_ref()
    }

    pub fn engine_mut(&mut self) -> Option<&mut E> {
        self.engine.as_mut()
    }

    /// Begin a capture session.
    ///
    /// No-op unless idle: a session that is starting, recording or still
    /// stopping rejects the call outright, nothing is queued. Clears the
    /// surfaced error, applies the pending locale, requests microphone
    /// permission and starts the stream. The session counts as live only
    /// once [`RecognitionEvent::Started`] arrives.
    pub async fn start_recording(&mut self) {
        if self.state != CaptureState::Idle {
            debug!(state = ?self.state, "start ignored, capture already in flight");
            return;
        }
        let Some(engine) = self.engine.as_mut() else {
            self.error = Some(CaptureError::Unsupported);
            return;
        };

        self.error = None;
        self.state = CaptureState::Starting;
        engine.set_language(&self.language);

        let started = match engine.request_permission().await {
            Ok(()) => engine.start().await,
            Err(err) => Err(err),
        };
        if let Err(err) = started {
            warn!(error = %err, "failed to start dictation");
            self.state = CaptureState::Idle;
            self.error = Some(CaptureError::StartFailed);
        }
    }

    /// Request the end of the running session. No-op unless recording.
    ///
    /// Issues `abort` then `stop`; the transition to idle happens when
    /// the engine confirms with [`RecognitionEvent::Ended`].
    pub fn stop_recording(&mut self) {
        if self.state != CaptureState::Recording {
            debug!(state = ?self.state, "stop ignored, not recording");
            return;
        }
        if let Some(engine) = self.engine.as_mut() {
            self.state = CaptureState::Stopping;
            engine.abort();
            engine.stop();
        }
    }

    /// Clear the accumulated transcript and any surfaced error.
    /// Valid in every state.
    pub fn reset_transcript(&mut self) {
        self.transcript.clear();
        self.error = None;
    }

    /// Install proxy-produced text, replacing whatever the live path
    /// accumulated. Used as the fallback path's completion callback.
    pub fn replace_transcript(&mut self, text: impl Into<String>) {
        self.transcript.set_text(text);
    }

    /// Set the locale for subsequent sessions.
    ///
    /// A session already in progress keeps its locale until the next
    /// start. An empty tag falls back to the default source locale.
    pub fn update_language(&mut self, language: LanguageTag) {
        if language.as_str().is_empty() {
            self.language = LanguageTag::new(language_registry::DEFAULT_SOURCE);
        } else {
            self.language = language;
        }
    }

    /// Feed one platform event through the state machine.
    pub fn handle_event(&mut self, event: RecognitionEvent) {
        match event {
            RecognitionEvent::Started => {
                debug!("dictation stream live");
                self.state = CaptureState::Recording;
                self.transcript.clear();
                self.error = None;
            }
            RecognitionEvent::Result { segments } => {
                self.transcript.apply_snapshot(segments);
            }
            RecognitionEvent::Ended => {
                debug!("dictation stream ended");
                self.state = CaptureState::Idle;
            }
            RecognitionEvent::Error { kind } => self.handle_error(kind),
        }
    }

    fn handle_error(&mut self, kind: RecognitionErrorKind) {
        self.state = CaptureState::Idle;
        let error = match kind {
            // expected transport artifact of an intentional stop
            RecognitionErrorKind::Aborted => {
                debug!("recognition aborted");
                None
            }
            RecognitionErrorKind::PermissionDenied => Some(CaptureError::PermissionDenied),
            RecognitionErrorKind::NoSpeech => Some(CaptureError::NoSpeech),
            RecognitionErrorKind::AudioCapture => Some(CaptureError::AudioCapture),
            RecognitionErrorKind::Network => Some(CaptureError::Network),
            RecognitionErrorKind::Other => Some(CaptureError::Recognition),
        };
        if let Some(error) = error {
            warn!(%error, "dictation error");
            self.error = Some(error);
        }
    }
}
