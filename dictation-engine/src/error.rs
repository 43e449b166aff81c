use thiserror::Error;

/// User-facing capture errors.
///
/// The `Display` string is exactly what the UI shows; the live-dictation
/// set and the fallback-recorder set do not overlap. All of these are
/// recoverable: the machine is back at idle once one is surfaced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureError {
    #[error("Speech recognition is not supported on this platform.")]
    Unsupported,

    #[error("Failed to start recording. Check mic permission and try again.")]
    StartFailed,

    #[error("Microphone access denied. Enable mic permission and reload.")]
    PermissionDenied,

    #[error("No speech detected. Please try again.")]
    NoSpeech,

    #[error("Audio capture failed. Check your microphone.")]
    AudioCapture,

    #[error("Network error. Disable ad/tracker blockers, ensure HTTPS or localhost, and try again.")]
    Network,

    #[error("Speech recognition error. Please try again.")]
    Recognition,

    #[error("Microphone access failed.")]
    MicrophoneAccess,

    #[error("Transcription failed. Ensure GROQ_API_KEY is set and try again.")]
    TranscriptionFailed,
}
