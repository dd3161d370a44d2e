// src/dtos/pricing.rs
//
// Request bodies keep every field optional so that a missing field is reported
// as "Missing required fields" rather than as a deserialization failure.
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::models::pricing_profile::{
    Adjustment, AdjustmentMode, AdjustmentType, BasedOn, NewPricingProfile,
    PricingProfileChanges,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub based_on: Option<String>,
    pub adjustment_type: Option<AdjustmentType>,
    pub adjustment_mode: Option<AdjustmentMode>,
    pub adjustment_value: Option<f64>,
    pub selected_products: Option<Vec<String>>,
}

impl TryFrom<CreateProfileRequest> for NewPricingProfile {
    type Error = AppError;

    fn try_from(req: CreateProfileRequest) -> Result<Self, Self::Error> {
        let (
            Some(name),
            Some(based_on),
            Some(adjustment_type),
            Some(adjustment_mode),
            Some(adjustment_value),
            Some(selected_products),
        ) = (
            req.name.filter(|n| !n.trim().is_empty()),
            req.based_on.filter(|b| !b.is_empty()),
            req.adjustment_type,
            req.adjustment_mode,
            req.adjustment_value,
            req.selected_products,
        )
        else {
            return Err(AppError::validation(
                "name, basedOn, adjustmentType, adjustmentMode, adjustmentValue, and selectedProducts are required",
            )
            .context("Missing required fields"));
        };

        if selected_products.is_empty() {
            return Err(AppError::validation("selectedProducts must be a non-empty array")
                .context("Validation error"));
        }

        Ok(NewPricingProfile {
            name,
            description: req.description,
            based_on: BasedOn::from(based_on),
            adjustment_type,
            adjustment_mode,
            adjustment_value,
            selected_products,
        })
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub based_on: Option<String>,
    pub adjustment_type: Option<AdjustmentType>,
    pub adjustment_mode: Option<AdjustmentMode>,
    pub adjustment_value: Option<f64>,
    pub selected_products: Option<Vec<String>>,
}

impl TryFrom<UpdateProfileRequest> for PricingProfileChanges {
    type Error = AppError;

    fn try_from(req: UpdateProfileRequest) -> Result<Self, Self::Error> {
        if req.based_on.as_deref().is_some_and(|b| b.trim().is_empty()) {
            return Err(AppError::validation("basedOn cannot be empty").context("Validation error"));
        }

        Ok(Self {
            name: req.name,
            description: req.description,
            based_on: req.based_on.map(BasedOn::from),
            adjustment_type: req.adjustment_type,
            adjustment_mode: req.adjustment_mode,
            adjustment_value: req.adjustment_value,
            selected_products: req.selected_products,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculatePricesRequest {
    pub based_on: Option<String>,
    pub adjustment_type: Option<AdjustmentType>,
    pub adjustment_mode: Option<AdjustmentMode>,
    pub adjustment_value: Option<f64>,
    pub product_ids: Option<Vec<String>>,
}

/// A preview request with every required field present.
#[derive(Debug)]
pub struct PricePreview {
    pub based_on: BasedOn,
    pub adjustment: Adjustment,
    pub product_ids: Vec<String>,
}

impl TryFrom<CalculatePricesRequest> for PricePreview {
    type Error = AppError;

    fn try_from(req: CalculatePricesRequest) -> Result<Self, Self::Error> {
        let (Some(based_on), Some(kind), Some(mode), Some(value), Some(product_ids)) = (
            req.based_on.filter(|b| !b.is_empty()),
            req.adjustment_type,
            req.adjustment_mode,
            req.adjustment_value,
            req.product_ids,
        ) else {
            return Err(AppError::validation(
                "basedOn, adjustmentType, adjustmentMode, adjustmentValue, and productIds are required",
            )
            .context("Missing required fields"));
        };

        if product_ids.is_empty() {
            return Err(AppError::validation("productIds must be a non-empty array")
                .context("Validation error"));
        }

        Ok(PricePreview {
            based_on: BasedOn::from(based_on),
            adjustment: Adjustment { kind, mode, value },
            product_ids,
        })
    }
}
