use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{health, languages, transcribe, translate},
    openapi,
    server::CareLingoServer,
};

// Provider-side cap for audio uploads.
const MAX_AUDIO_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Create health check routes
pub fn health_routes() -> Router<CareLingoServer> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/version", get(health::version_info))
}

/// Create language registry routes
pub fn language_routes() -> Router<CareLingoServer> {
    Router::new().route("/languages", get(languages::list_languages))
}

/// Create translation routes
pub fn translation_routes() -> Router<CareLingoServer> {
    Router::new().route("/translate", post(translate::translate))
}

/// Create transcription routes
pub fn transcription_routes() -> Router<CareLingoServer> {
    Router::new()
        .route("/transcribe", post(transcribe::transcribe))
        .layer(DefaultBodyLimit::max(MAX_AUDIO_BODY_BYTES))
}

/// Create all application routes
pub fn create_routes() -> Router<CareLingoServer> {
    Router::new()
        .merge(health_routes())
        .merge(language_routes())
        .merge(translation_routes())
        .merge(transcription_routes())
        // API documentation routes
        .merge(openapi::create_docs_routes())
}
