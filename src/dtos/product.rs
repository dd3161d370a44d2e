// src/dtos/product.rs
use serde::Deserialize;
use utoipa::IntoParams;

use crate::services::catalog::ProductFilters;

/// Query string for `GET /products`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Case-insensitive match on title or SKU.
    pub search: Option<String>,
    pub brand: Option<String>,
    pub sub_category: Option<String>,
    pub segment: Option<String>,
}

impl From<ProductQuery> for ProductFilters {
    fn from(query: ProductQuery) -> Self {
        Self {
            search: query.search,
            brand: query.brand,
            sub_category: query.sub_category,
            segment: query.segment,
        }
    }
}
