//! CareLingo Server - healthcare translation and transcription API
//!
//! This library provides the HTTP surface of the CareLingo engine: a
//! translation endpoint backed by an ordered provider fallback chain, a
//! speech-to-text proxy for recorded audio, and the supported-language
//! registry, wired together behind one cloneable server state.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod validation;

// Re-export commonly used types
pub use error::*;
pub use server::{AppConfig, CareLingoServer};

use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes and middleware
pub fn create_app(server: CareLingoServer) -> Router {
    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::create_cors_layer())
                .layer(from_fn(middleware::request_timing_middleware)),
        )
        .with_state(server)
}
