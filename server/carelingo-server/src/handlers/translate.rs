use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use translation_service::TranslationRequest;

use crate::error::{ApiError, ApiResult};
use crate::server::CareLingoServer;
use crate::validate_field;
use crate::validation::RequestValidation;

/// Translation request body
///
/// Missing fields deserialize as empty strings and are rejected by
/// validation, so absent and blank fields get the same response.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TranslateRequest {
    /// Text to translate
    #[schema(example = "Where does it hurt?")]
    pub text: String,
    /// Source locale tag
    #[schema(example = "en-US")]
    pub src_lang: String,
    /// Target locale tag
    #[schema(example = "es-ES")]
    pub tgt_lang: String,
}

impl RequestValidation for TranslateRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_field!(
            self.text,
            !self.text.trim().is_empty()
                && !self.src_lang.trim().is_empty()
                && !self.tgt_lang.trim().is_empty(),
            "Missing required fields: text, srcLang, tgtLang"
        );
        Ok(())
    }
}

/// Translation response body
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    /// Translated text as produced by the provider
    #[schema(example = "¿Dónde le duele?")]
    pub translated_text: String,
    /// Source locale tag as submitted
    #[schema(example = "en-US")]
    pub source_language: String,
    /// Target locale tag as submitted
    #[schema(example = "es-ES")]
    pub target_language: String,
    /// Provider that produced the translation
    #[schema(example = "groq")]
    pub provider: String,
}

/// Translation handler
#[utoipa::path(
    post,
    path = "/translate",
    tag = "translation",
    request_body = TranslateRequest,
    responses(
        (status = 200, description = "Translation produced", body = TranslateResponse),
        (status = 400, description = "Missing required fields", body = crate::error::ApiErrorResponse),
        (status = 500, description = "Override provider credential not configured", body = crate::error::ApiErrorResponse),
        (status = 502, description = "All translation providers failed", body = crate::error::ApiErrorResponse)
    )
)]
pub async fn translate(
    State(server): State<CareLingoServer>,
    Json(request): Json<TranslateRequest>,
) -> ApiResult<Json<TranslateResponse>> {
    request.validate()?;

    let outcome = server
        .translator
        .translate(&TranslationRequest::new(
            request.text,
            request.src_lang.as_str(),
            request.tgt_lang.as_str(),
        ))
        .await?;

    Ok(Json(TranslateResponse {
        translated_text: outcome.translated_text,
        source_language: request.src_lang,
        target_language: request.tgt_lang,
        provider: outcome.provider.to_string(),
    }))
}
