// src/routes/reference.rs
use axum::{routing::get, Router};
use crate::handlers::product::get_reference_data;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/reference/categories", get(get_reference_data))
}
