// src/services/pricing.rs
//
// Persistence is strict (every product and base profile must exist) while the
// preview is lenient (unknown products are dropped, an unknown base profile
// falls back to the catalog price).

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::pricing_profile::{
    Adjustment, BasedOn, CalculatedPrice, NewPricingProfile, PricingProfile,
    PricingProfileChanges,
};
use crate::services::calculation::{compute, round_cents};
use crate::services::catalog::ProductCatalog;
use crate::services::profile_store::ProfileStore;

pub const PROFILE_NOT_FOUND: &str = "Pricing profile not found";
pub const BASE_PROFILE_NOT_FOUND: &str = "Base profile does not exist";
pub const UNKNOWN_PRODUCTS: &str = "One or more selected products do not exist";
pub const NO_VALID_PRODUCTS: &str = "No valid products selected";
pub const NON_POSITIVE_VALUE: &str = "Adjustment value must be greater than 0";
pub const VALUE_TOO_LARGE: &str = "Adjustment value is too large";

pub struct PricingService {
    catalog: Arc<ProductCatalog>,
    store: Mutex<ProfileStore>,
}

impl PricingService {
    pub fn new(catalog: Arc<ProductCatalog>, store: ProfileStore) -> Self {
        Self {
            catalog,
            store: Mutex::new(store),
        }
    }

    fn store(&self) -> Result<MutexGuard<'_, ProfileStore>, AppError> {
        self.store
            .lock()
            .map_err(|_| AppError::internal("Profile store lock poisoned"))
    }

    pub fn get_all_profiles(&self) -> Result<Vec<PricingProfile>, AppError> {
        Ok(self.store()?.all())
    }

    pub fn get_profile(&self, id: &str) -> Result<Option<PricingProfile>, AppError> {
        Ok(self.store()?.get(id).cloned())
    }

    pub fn create_profile(&self, data: NewPricingProfile) -> Result<PricingProfile, AppError> {
        validate_name(&data.name)?;
        self.validate_selection(&data.selected_products)?;
        validate_value(data.adjustment_value)?;

        let mut store = self.store()?;
        if let Some(base_id) = data.based_on.profile_id() {
            if !store.contains(base_id) {
                warn!(base_id, "Rejected profile based on unknown profile");
                return Err(AppError::not_found(BASE_PROFILE_NOT_FOUND));
            }
        }

        let now = Utc::now();
        let profile = PricingProfile {
            id: Uuid::new_v4().to_string(),
            name: data.name.trim().to_string(),
            description: data.description,
            based_on: data.based_on,
            adjustment_type: data.adjustment_type,
            adjustment_mode: data.adjustment_mode,
            adjustment_value: data.adjustment_value,
            selected_products: data.selected_products,
            created_at: now,
            updated_at: now,
        };
        store.insert(profile.clone());

        info!(id = %profile.id, name = %profile.name, "Created pricing profile");
        Ok(profile)
    }

    pub fn update_profile(
        &self,
        id: &str,
        changes: PricingProfileChanges,
    ) -> Result<PricingProfile, AppError> {
        let mut store = self.store()?;
        if !store.contains(id) {
            return Err(AppError::not_found(PROFILE_NOT_FOUND));
        }

        if let Some(name) = &changes.name {
            validate_name(name)?;
        }
        if let Some(selected) = &changes.selected_products {
            self.validate_selection(selected)?;
        }
        if let Some(value) = changes.adjustment_value {
            validate_value(value)?;
        }
        if let Some(base_id) = changes.based_on.as_ref().and_then(BasedOn::profile_id) {
            if base_id == id {
                return Err(AppError::validation("A profile cannot be based on itself"));
            }
            if !store.contains(base_id) {
                return Err(AppError::not_found(BASE_PROFILE_NOT_FOUND));
            }
        }

        let profile = store
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(PROFILE_NOT_FOUND))?;

        if let Some(name) = changes.name {
            profile.name = name.trim().to_string();
        }
        if let Some(description) = changes.description {
            profile.description = Some(description);
        }
        if let Some(based_on) = changes.based_on {
            profile.based_on = based_on;
        }
        if let Some(kind) = changes.adjustment_type {
            profile.adjustment_type = kind;
        }
        if let Some(mode) = changes.adjustment_mode {
            profile.adjustment_mode = mode;
        }
        if let Some(value) = changes.adjustment_value {
            profile.adjustment_value = value;
        }
        if let Some(selected) = changes.selected_products {
            profile.selected_products = selected;
        }
        profile.updated_at = Utc::now();

        info!(id, "Updated pricing profile");
        Ok(profile.clone())
    }

    /// Returns whether a profile was removed. Profiles based on it are left as is;
    /// previews against them fall back to the catalog price.
    pub fn delete_profile(&self, id: &str) -> Result<bool, AppError> {
        let removed = self.store()?.remove(id);
        if removed {
            info!(id, "Deleted pricing profile");
        }
        Ok(removed)
    }

    /// Preview the prices an adjustment would produce, without storing anything.
    ///
    /// A chained base applies the referenced profile's own adjustment to the
    /// catalog price first; that profile's `basedOn` is not followed further.
    /// One negative price fails the whole batch.
    pub fn calculate_prices(
        &self,
        based_on: &BasedOn,
        adjustment: Adjustment,
        product_ids: &[String],
    ) -> Result<Vec<CalculatedPrice>, AppError> {
        validate_value(adjustment.value)?;

        let products = self.catalog.get_by_ids(product_ids);
        if products.is_empty() {
            return Err(AppError::validation(NO_VALID_PRODUCTS));
        }

        let base_adjustment = match based_on.profile_id() {
            Some(base_id) => {
                let base = self.store()?.get(base_id).map(PricingProfile::adjustment);
                if base.is_none() {
                    warn!(base_id, "Base profile missing, previewing against catalog price");
                }
                base
            }
            None => None,
        };

        products
            .into_iter()
            .map(|product| -> Result<CalculatedPrice, AppError> {
                let catalog_price = product.global_wholesale_price;
                let based_on_price = match &base_adjustment {
                    Some(base) => compute(catalog_price, base)?.new_price,
                    None => catalog_price,
                };
                let change = compute(based_on_price, &adjustment)?;

                Ok(CalculatedPrice {
                    product_id: product.id.clone(),
                    product_title: product.title.clone(),
                    sku_code: product.sku_code.clone(),
                    category: product.sub_category_id.clone(),
                    based_on_price: round_cents(based_on_price),
                    adjustment_value: change.adjustment,
                    new_price: change.new_price,
                })
            })
            .collect()
    }

    fn validate_selection(&self, ids: &[String]) -> Result<(), AppError> {
        if ids.is_empty() {
            return Err(AppError::validation("selectedProducts must be a non-empty array"));
        }
        if self.catalog.get_by_ids(ids).len() != ids.len() {
            warn!(requested = ids.len(), "Selection contains unknown products");
            return Err(AppError::validation(UNKNOWN_PRODUCTS));
        }
        Ok(())
    }
}

fn validate_value(value: f64) -> Result<(), AppError> {
    if value.is_nan() || value <= 0.0 {
        return Err(AppError::validation(NON_POSITIVE_VALUE));
    }
    if value.is_infinite() {
        return Err(AppError::validation("Adjustment value must be a finite number"));
    }
    if !(value * 100.0).is_finite() {
        return Err(AppError::validation(VALUE_TOO_LARGE));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Profile name is required"));
    }
    Ok(())
}
