use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use language_registry::{Language, SUPPORTED_LANGUAGES};

use crate::error::ApiError;
use crate::server::CareLingoServer;

/// Supported languages response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesResponse {
    /// Supported locales in picker order
    pub languages: Vec<Language>,
    /// Default source locale tag
    #[schema(example = "en-US")]
    pub default_source: String,
    /// Default target locale tag
    #[schema(example = "es-ES")]
    pub default_target: String,
}

/// Supported languages handler
#[utoipa::path(
    get,
    path = "/languages",
    tag = "languages",
    responses(
        (status = 200, description = "Supported languages retrieved successfully", body = LanguagesResponse)
    )
)]
pub async fn list_languages(
    State(server): State<CareLingoServer>,
) -> Result<Json<LanguagesResponse>, ApiError> {
    Ok(Json(LanguagesResponse {
        languages: SUPPORTED_LANGUAGES.to_vec(),
        default_source: server.config.default_source.clone(),
        default_target: server.config.default_target.clone(),
    }))
}
