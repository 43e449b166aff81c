use language_registry::LanguageTag;
use tracing::{debug, warn};

use crate::backend::TranscriptionBackend;
use crate::error::CaptureError;

/// Container type of a packaged recording.
pub const RECORDING_CONTENT_TYPE: &str = "audio/webm";

/// File name the transcription proxy sees for uploaded recordings.
pub const RECORDING_FILE_NAME: &str = "recording.webm";

/// Transient audio-chunk buffer for one record/stop cycle.
///
/// Owned exclusively by the recorder. Chunks are dropped at the start of
/// the next cycle, not at stop, so a finished recording can still be
/// repackaged until a new one begins.
#[derive(Debug, Default)]
pub struct RecordingSession {
    chunks: Vec<Vec<u8>>,
}

impl RecordingSession {
    pub fn clear(&mut self) {
        self.chunks.clear();
    }

    pub fn push(&mut self, chunk: Vec<u8>) {
        if !chunk.is_empty() {
            self.chunks.push(chunk);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn byte_len(&self) -> usize {
        self.chunks.iter().map(Vec::len).sum()
    }

    /// Concatenate the buffered chunks into one uploadable payload.
    pub fn package(&self) -> RecordedAudio {
        RecordedAudio {
            bytes: self.chunks.concat(),
            content_type: RECORDING_CONTENT_TYPE.to_string(),
            file_name: RECORDING_FILE_NAME.to_string(),
        }
    }
}

/// A packaged recording ready for upload.
#[derive(Debug, Clone)]
pub struct RecordedAudio {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub file_name: String,
}

/// Record-and-upload capture path, used when live dictation is
/// unavailable or explicitly bypassed.
///
/// The platform glue feeds raw chunks in while recording; `stop` packages
/// them and submits the recording through the configured
/// [`TranscriptionBackend`]. Errors surface as state, like the live
/// machine's, but from the capture-specific message set.
pub struct FallbackRecorder<B> {
    backend: B,
    session: RecordingSession,
    language: LanguageTag,
    recording: bool,
    error: Option<CaptureError>,
}

impl<B: TranscriptionBackend> FallbackRecorder<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            session: RecordingSession::default(),
            language: LanguageTag::new(language_registry::DEFAULT_SOURCE),
            recording: false,
            error: None,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn error(&self) -> Option<CaptureError> {
        self.error
    }

    /// Locale hint sent with the next submitted recording.
    pub fn set_language(&mut self, language: LanguageTag) {
        self.language = language;
    }

    /// Begin a record cycle. The previous cycle's chunks and error are
    /// dropped here. No-op while already recording.
    pub fn begin(&mut self) {
        if self.recording {
            debug!("begin ignored, already recording");
            return;
        }
        self.session.clear();
        self.error = None;
        self.recording = true;
    }

    /// The platform could not hand over a capture stream.
    pub fn fail_microphone(&mut self) {
        self.recording = false;
        self.error = Some(CaptureError::MicrophoneAccess);
    }

    /// Buffer one chunk from the capture device. Empty chunks and chunks
    /// arriving outside a record cycle are ignored.
    pub fn push_chunk(&mut self, chunk: &[u8]) {
        if !self.recording {
            return;
        }
        self.session.push(chunk.to_vec());
    }

    /// End the cycle and submit the packaged recording.
    ///
    /// Returns the transcript for the caller to install (typically via
    /// `DictationMachine::replace_transcript`). A backend failure is
    /// logged and surfaced as the capture-specific transcription error;
    /// `None` is also returned when no cycle was running.
    pub async fn stop_and_transcribe(&mut self) -> Option<String> {
        if !self.recording {
            debug!("stop ignored, no recording in progress");
            return None;
        }
        self.recording = false;

        let audio = self.session.package();
        debug!(bytes = audio.bytes.len(), language = %self.language, "submitting recording");

        match self.backend.transcribe(audio, self.language.primary()).await {
            Ok(text) => Some(text),
            Err(err) => {
                warn!(error = %err, "fallback transcription failed");
                self.error = Some(CaptureError::TranscriptionFailed);
                None
            }
        }
    }
}
