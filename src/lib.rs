// src/lib.rs
pub mod config;
pub mod docs;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use state::AppState;

use axum::Router;
use http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// Router with CORS opened to the configured UI origin.
pub fn build_app(state: AppState, cors_origin: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);
    let cors = match cors_origin.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(e) => {
            tracing::warn!(%cors_origin, error = %e, "Invalid CORS origin, cross-origin requests disabled");
            cors
        }
    };

    routes::app(state).layer(cors)
}
