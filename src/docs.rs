// src/docs.rs
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pricing Profiles API",
        description = "Pricing profiles with fixed and dynamic adjustments over a product catalog"
    ),
    paths(
        crate::handlers::product::get_products,
        crate::handlers::product::get_product,
        crate::handlers::product::get_reference_data,
        crate::handlers::pricing::get_profiles,
        crate::handlers::pricing::get_profile,
        crate::handlers::pricing::create_profile,
        crate::handlers::pricing::update_profile,
        crate::handlers::pricing::delete_profile,
        crate::handlers::pricing::calculate_prices
    ),
    components(
        schemas(
            crate::models::product::Product,
            crate::models::product::ReferenceData,
            crate::models::pricing_profile::PricingProfile,
            crate::models::pricing_profile::AdjustmentType,
            crate::models::pricing_profile::AdjustmentMode,
            crate::models::pricing_profile::CalculatedPrice,
            crate::dtos::pricing::CreateProfileRequest,
            crate::dtos::pricing::UpdateProfileRequest,
            crate::dtos::pricing::CalculatePricesRequest,
            crate::dtos::response::MessageResponse
        )
    ),
    tags(
        (name = "products", description = "Product catalog"),
        (name = "pricing-profiles", description = "Pricing profiles and price previews"),
        (name = "reference", description = "Filter values for the product picker")
    )
)]
pub struct ApiDoc;
