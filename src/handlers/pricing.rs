// src/handlers/pricing.rs
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{instrument, warn};

use crate::dtos::pricing::{
    CalculatePricesRequest, CreateProfileRequest, PricePreview, UpdateProfileRequest,
};
use crate::dtos::response::{ApiResponse, MessageResponse};
use crate::error::AppError;
use crate::models::pricing_profile::{
    CalculatedPrice, NewPricingProfile, PricingProfile, PricingProfileChanges,
};
use crate::services::pricing::PROFILE_NOT_FOUND;
use crate::state::AppState;

// GET /pricing-profiles - List all profiles
#[utoipa::path(
    get,
    path = "/api/pricing-profiles",
    tag = "pricing-profiles",
    responses(
        (status = 200, description = "All profiles in creation order", body = ApiResponse<Vec<PricingProfile>>)
    )
)]
#[instrument(skip(state))]
pub async fn get_profiles(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PricingProfile>>>, AppError> {
    let profiles = state
        .pricing
        .get_all_profiles()
        .map_err(|e| e.context("Failed to fetch pricing profiles"))?;

    Ok(Json(ApiResponse::list(profiles)))
}

// GET /pricing-profiles/:id - Get single profile
#[utoipa::path(
    get,
    path = "/api/pricing-profiles/{id}",
    tag = "pricing-profiles",
    params(("id" = String, Path, description = "Pricing profile id")),
    responses(
        (status = 200, description = "Profile found", body = ApiResponse<PricingProfile>),
        (status = 404, description = "Pricing profile not found")
    )
)]
#[instrument(skip(state))]
pub async fn get_profile(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PricingProfile>>, AppError> {
    let profile = state
        .pricing
        .get_profile(&id)
        .map_err(|e| e.context("Failed to fetch pricing profile"))?
        .ok_or_else(|| AppError::not_found(PROFILE_NOT_FOUND))?;

    Ok(Json(ApiResponse::ok(profile)))
}

// POST /pricing-profiles - Create profile
#[utoipa::path(
    post,
    path = "/api/pricing-profiles",
    tag = "pricing-profiles",
    request_body = CreateProfileRequest,
    responses(
        (status = 201, description = "Profile created", body = ApiResponse<PricingProfile>),
        (status = 400, description = "Missing fields, empty selection, bad value or negative price"),
        (status = 404, description = "A selected product or the base profile does not exist")
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_profile(
    State(state): State<AppState>,
    payload: Result<Json<CreateProfileRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<PricingProfile>>), AppError> {
    let Json(req) = payload.map_err(|e| AppError::from(e).context("Validation error"))?;
    let data = NewPricingProfile::try_from(req)?;

    let profile = state.pricing.create_profile(data).map_err(|e| {
        warn!(error = %e, "Profile creation rejected");
        e.context("Failed to create pricing profile")
    })?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(profile))))
}

// PUT /pricing-profiles/:id - Partial update
#[utoipa::path(
    put,
    path = "/api/pricing-profiles/{id}",
    tag = "pricing-profiles",
    params(("id" = String, Path, description = "Pricing profile id")),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<PricingProfile>),
        (status = 400, description = "Invalid change or negative price"),
        (status = 404, description = "Profile, product or base profile not found")
    )
)]
#[instrument(skip(state, payload))]
pub async fn update_profile(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<PricingProfile>>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::from(e).context("Validation error"))?;
    let changes = PricingProfileChanges::try_from(req)?;

    let profile = state
        .pricing
        .update_profile(&id, changes)
        .map_err(|e| {
            warn!(error = %e, "Profile update rejected");
            e.context("Failed to update pricing profile")
        })?;

    Ok(Json(ApiResponse::ok(profile)))
}

// DELETE /pricing-profiles/:id - Delete profile
#[utoipa::path(
    delete,
    path = "/api/pricing-profiles/{id}",
    tag = "pricing-profiles",
    params(("id" = String, Path, description = "Pricing profile id")),
    responses(
        (status = 200, description = "Profile deleted", body = MessageResponse),
        (status = 404, description = "Pricing profile not found")
    )
)]
#[instrument(skip(state))]
pub async fn delete_profile(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = state
        .pricing
        .delete_profile(&id)
        .map_err(|e| e.context("Failed to delete pricing profile"))?;

    if !deleted {
        return Err(AppError::not_found(PROFILE_NOT_FOUND));
    }

    Ok(Json(MessageResponse::ok("Pricing profile deleted successfully")))
}

// POST /pricing-profiles/calculate - Preview prices without saving
#[utoipa::path(
    post,
    path = "/api/pricing-profiles/calculate",
    tag = "pricing-profiles",
    request_body = CalculatePricesRequest,
    responses(
        (status = 200, description = "Adjusted prices, nothing stored", body = ApiResponse<Vec<CalculatedPrice>>),
        (status = 400, description = "Missing fields, no valid products or negative price")
    )
)]
#[instrument(skip(state, payload))]
pub async fn calculate_prices(
    State(state): State<AppState>,
    payload: Result<Json<CalculatePricesRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Vec<CalculatedPrice>>>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::from(e).context("Validation error"))?;
    let preview = PricePreview::try_from(req)?;

    let prices = state
        .pricing
        .calculate_prices(&preview.based_on, preview.adjustment, &preview.product_ids)
        .map_err(|e| e.context("Failed to calculate prices"))?;

    Ok(Json(ApiResponse::ok(prices)))
}
