// src/services/catalog.rs
//
// Read-only product catalog seeded at start-up.

use crate::models::product::{Product, ReferenceData};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    /// Case-insensitive substring of the title or SKU.
    pub search: Option<String>,
    pub brand: Option<String>,
    pub sub_category: Option<String>,
    pub segment: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    pub fn get_all(&self, filters: &ProductFilters) -> Vec<Product> {
        let search = non_empty(&filters.search).map(str::to_lowercase);
        let brand = non_empty(&filters.brand);
        let sub_category = non_empty(&filters.sub_category);
        let segment = non_empty(&filters.segment);

        self.products
            .iter()
            .filter(|p| {
                search.as_deref().map_or(true, |s| {
                    p.title.to_lowercase().contains(s) || p.sku_code.to_lowercase().contains(s)
                })
            })
            .filter(|p| brand.map_or(true, |b| p.brand == b))
            .filter(|p| sub_category.map_or(true, |c| p.sub_category_id == c))
            .filter(|p| segment.map_or(true, |s| p.segment_id == s))
            .cloned()
            .collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Existing products among `ids`, in request order. Unknown ids are skipped
    /// and a repeated id resolves once.
    pub fn get_by_ids(&self, ids: &[String]) -> Vec<&Product> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();
        for id in ids {
            if !seen.insert(id.as_str()) {
                continue;
            }
            if let Some(product) = self.get_by_id(id) {
                found.push(product);
            }
        }
        found
    }

    pub fn reference_data(&self) -> ReferenceData {
        ReferenceData {
            sub_categories: to_strings(&[
                "wine",
                "beer",
                "liquor-spirits",
                "cider",
                "premixed-ready-to-drink",
                "other",
            ]),
            segments: to_strings(&["red", "white", "rose", "orange", "sparkling", "port-dessert"]),
            brands: to_strings(&["High Garden", "Koyama Wines", "LacourteGodbillon"]),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn product(id: &str, title: &str, sku: &str, brand: &str, segment: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        sku_code: sku.to_string(),
        brand: brand.to_string(),
        category_id: "alcoholic-beverage".to_string(),
        sub_category_id: "wine".to_string(),
        segment_id: segment.to_string(),
        global_wholesale_price: price,
    }
}

pub fn seed_products() -> Vec<Product> {
    vec![
        product(
            "550e8400-e29b-41d4-a716-446655440001",
            "High Garden Pinot Noir 2021",
            "HGVPIN216",
            "High Garden",
            "red",
            279.06,
        ),
        product(
            "550e8400-e29b-41d4-a716-446655440002",
            "Koyama Methode Brut Nature NV",
            "KOYBRUNV6",
            "Koyama Wines",
            "sparkling",
            120.0,
        ),
        product(
            "550e8400-e29b-41d4-a716-446655440003",
            "Koyama Riesling 2018",
            "KOYNR1837",
            "Koyama Wines",
            "port-dessert",
            215.04,
        ),
        product(
            "550e8400-e29b-41d4-a716-446655440004",
            "Koyama Tussock Riesling 2019",
            "KOYRIE19",
            "Koyama Wines",
            "white",
            215.04,
        ),
        product(
            "550e8400-e29b-41d4-a716-446655440005",
            "LacourteGodbillon Brut Cru NV",
            "LACBNATNV6",
            "LacourteGodbillon",
            "sparkling",
            409.32,
        ),
    ]
}
