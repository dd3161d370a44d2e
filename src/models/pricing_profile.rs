// src/models/pricing_profile.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Literal `basedOn` value meaning "the catalog wholesale price".
pub const GLOBAL_BASE: &str = "global";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentType {
    /// Flat dollar amount.
    Fixed,
    /// Percentage points of the base price.
    Dynamic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentMode {
    Increase,
    Decrease,
}

/// The price an adjustment is layered onto.
///
/// On the wire this is a plain string: `"global"` or the id of another profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BasedOn {
    Global,
    Profile(String),
}

impl BasedOn {
    pub fn profile_id(&self) -> Option<&str> {
        match self {
            BasedOn::Global => None,
            BasedOn::Profile(id) => Some(id.as_str()),
        }
    }
}

impl From<String> for BasedOn {
    fn from(value: String) -> Self {
        if value == GLOBAL_BASE {
            BasedOn::Global
        } else {
            BasedOn::Profile(value)
        }
    }
}

impl From<&str> for BasedOn {
    fn from(value: &str) -> Self {
        BasedOn::from(value.to_string())
    }
}

impl From<BasedOn> for String {
    fn from(value: BasedOn) -> Self {
        match value {
            BasedOn::Global => GLOBAL_BASE.to_string(),
            BasedOn::Profile(id) => id,
        }
    }
}

/// The adjustment parameters shared by stored profiles and preview requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub kind: AdjustmentType,
    pub mode: AdjustmentMode,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingProfile {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `"global"` or the id of another profile.
    #[schema(value_type = String, example = "global")]
    pub based_on: BasedOn,
    pub adjustment_type: AdjustmentType,
    pub adjustment_mode: AdjustmentMode,
    pub adjustment_value: f64,
    pub selected_products: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PricingProfile {
    pub fn adjustment(&self) -> Adjustment {
        Adjustment {
            kind: self.adjustment_type,
            mode: self.adjustment_mode,
            value: self.adjustment_value,
        }
    }
}

/// Validated input for a new profile; id and timestamps are assigned by the service.
#[derive(Debug, Clone)]
pub struct NewPricingProfile {
    pub name: String,
    pub description: Option<String>,
    pub based_on: BasedOn,
    pub adjustment_type: AdjustmentType,
    pub adjustment_mode: AdjustmentMode,
    pub adjustment_value: f64,
    pub selected_products: Vec<String>,
}

/// Partial update; `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default)]
pub struct PricingProfileChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub based_on: Option<BasedOn>,
    pub adjustment_type: Option<AdjustmentType>,
    pub adjustment_mode: Option<AdjustmentMode>,
    pub adjustment_value: Option<f64>,
    pub selected_products: Option<Vec<String>>,
}

/// One row of a price preview. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedPrice {
    pub product_id: String,
    pub product_title: String,
    pub sku_code: String,
    pub category: String,
    pub based_on_price: f64,
    /// Signed amount actually applied to `based_on_price`.
    pub adjustment_value: f64,
    pub new_price: f64,
}
