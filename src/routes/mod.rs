// src/routes/mod.rs
pub mod pricing_profiles;
pub mod products;
pub mod reference;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;

use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(pricing_profiles::routes())
        .merge(reference::routes())
}

/// The full application: `/api` routes plus banner, health check, Swagger UI
/// and 404 fallback.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .nest("/api", create_router())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .with_state(state)
}

async fn index() -> Json<Value> {
    Json(json!({
        "message": "Pricing Profiles API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "products": "/api/products",
            "pricingProfiles": "/api/pricing-profiles",
            "reference": "/api/reference",
        },
        "docs": "/docs",
    }))
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "error": "Route not found" })),
    )
}
