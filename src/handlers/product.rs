// src/handlers/product.rs
use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{instrument, warn};

use crate::dtos::product::ProductQuery;
use crate::dtos::response::ApiResponse;
use crate::error::AppError;
use crate::models::product::{Product, ReferenceData};
use crate::state::AppState;

// GET /products - List products, optionally filtered
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Products matching every supplied filter", body = ApiResponse<Vec<Product>>)
    )
)]
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<ApiResponse<Vec<Product>>> {
    let products = state.catalog.get_all(&query.into());
    Json(ApiResponse::list(products))
}

// GET /products/:id - Get single product
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<Product>),
        (status = 404, description = "Product not found")
    )
)]
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let product = state.catalog.get_by_id(&id).cloned().ok_or_else(|| {
        warn!(%id, "Product not found");
        AppError::not_found("Product not found")
    })?;

    Ok(Json(ApiResponse::ok(product)))
}

// GET /reference/categories - Filter values for the product picker
#[utoipa::path(
    get,
    path = "/api/reference/categories",
    tag = "reference",
    responses(
        (status = 200, description = "Sub-categories, segments and brands", body = ApiResponse<ReferenceData>)
    )
)]
pub async fn get_reference_data(State(state): State<AppState>) -> Json<ApiResponse<ReferenceData>> {
    Json(ApiResponse::ok(state.catalog.reference_data()))
}
