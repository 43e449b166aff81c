use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::server::CareLingoServer;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall service health status
    #[schema(example = "healthy")]
    pub status: String,
    /// Current timestamp in RFC3339 format
    #[schema(example = "2026-01-15T10:30:00Z")]
    pub timestamp: String,
    /// API version
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Per-capability configuration checks
    pub checks: HashMap<String, String>,
}

/// Version information response
#[derive(Debug, Serialize, ToSchema)]
pub struct VersionResponse {
    /// Application name
    #[schema(example = "CareLingo Engine")]
    pub name: String,
    /// Application version
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Enabled capabilities
    pub features: Vec<String>,
}

fn configured(flag: bool) -> String {
    if flag { "configured" } else { "not_configured" }.to_string()
}

/// Health check handler
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(
    State(server): State<CareLingoServer>,
) -> Result<Json<HealthResponse>, ApiError> {
    let mut checks = HashMap::new();

    // Report which providers would participate, never the credentials.
    checks.insert(
        "groq_translation".to_string(),
        configured(server.config.translation.groq.api_key.is_some()),
    );
    checks.insert(
        "libretranslate".to_string(),
        configured(server.config.translation.libre.enabled()),
    );
    checks.insert("mymemory".to_string(), "available".to_string());
    checks.insert(
        "transcription".to_string(),
        configured(server.transcriber.is_configured()),
    );

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks,
    };

    Ok(Json(response))
}

/// Version information handler
#[utoipa::path(
    get,
    path = "/version",
    tag = "health",
    responses(
        (status = 200, description = "Version information retrieved successfully", body = VersionResponse)
    )
)]
pub async fn version_info() -> Result<Json<VersionResponse>, ApiError> {
    let features = vec![
        "translation-fallback".to_string(),
        "speech-transcription".to_string(),
        "language-registry".to_string(),
    ];

    let response = VersionResponse {
        name: "CareLingo Engine".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        features,
    };

    Ok(Json(response))
}
