use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranscriptionError {
    #[error("GROQ_API_KEY not configured")]
    MissingCredential,

    #[error("Groq STT failed: {status} {body}")]
    Upstream { status: u16, body: String },

    #[error("Transcription service unavailable")]
    Unavailable,
}

pub type TranscriptionResult<T> = Result<T, TranscriptionError>;
