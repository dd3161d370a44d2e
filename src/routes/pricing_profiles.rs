// src/routes/pricing_profiles.rs
use axum::{
    routing::{get, post},
    Router,
};
use crate::handlers::pricing::{
    calculate_prices, create_profile, delete_profile, get_profile, get_profiles, update_profile,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pricing-profiles", get(get_profiles).post(create_profile))
        // Static segment wins over the `{id}` capture in axum's router.
        .route("/pricing-profiles/calculate", post(calculate_prices))
        .route(
            "/pricing-profiles/{id}",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
}
