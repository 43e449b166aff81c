use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::CareLingoServer;

/// Main OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::handlers::health::health_check,
        crate::handlers::health::version_info,

        // Language registry
        crate::handlers::languages::list_languages,

        // Translation and transcription
        crate::handlers::translate::translate,
        crate::handlers::transcribe::transcribe,
    ),
    components(
        schemas(
            crate::handlers::health::HealthResponse,
            crate::handlers::health::VersionResponse,
            crate::handlers::languages::LanguagesResponse,
            crate::handlers::translate::TranslateRequest,
            crate::handlers::translate::TranslateResponse,
            crate::handlers::transcribe::TranscribeForm,
            crate::handlers::transcribe::TranscribeResponse,
            crate::error::ApiErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health and version endpoints"),
        (name = "languages", description = "Supported locale registry"),
        (name = "translation", description = "Healthcare translation with provider fallback"),
        (name = "transcription", description = "Speech-to-text proxy for recorded audio"),
    ),
    info(
        title = "CareLingo Engine API",
        version = "0.1.0",
        description = "Healthcare translation API providing provider-fallback text translation and speech-to-text transcription for patient-clinician conversations.",
        contact(
            name = "CareLingo Team",
            email = "api@carelingo.dev",
            url = "https://carelingo.dev"
        ),
        license(
            name = "AGPL-3.0-only",
            url = "https://github.com/carelingo/carelingo-engine/blob/main/LICENSE"
        ),
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
        (url = "https://api.carelingo.dev", description = "Production server"),
    ),
)]
pub struct ApiDoc;

/// Create OpenAPI documentation routes
pub fn create_docs_routes() -> Router<CareLingoServer> {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
