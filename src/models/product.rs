// src/models/product.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440001")]
    pub id: String,
    #[schema(example = "High Garden Pinot Noir 2021")]
    pub title: String,
    pub sku_code: String,
    pub brand: String,
    pub category_id: String,
    pub sub_category_id: String,
    pub segment_id: String,
    pub global_wholesale_price: f64,
}

/// Lookup values the product filters are built from.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceData {
    pub sub_categories: Vec<String>,
    pub segments: Vec<String>,
    pub brands: Vec<String>,
}
