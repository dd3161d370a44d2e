// tests/api.rs
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use pricing_backend::{build_app, AppState};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`

const PINOT: &str = "550e8400-e29b-41d4-a716-446655440001";
const BRUT_NATURE: &str = "550e8400-e29b-41d4-a716-446655440002";
const BRUT_CRU: &str = "550e8400-e29b-41d4-a716-446655440005";

// Fresh store per test
fn test_app() -> Router {
    build_app(AppState::seeded(), "http://localhost:3000")
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().uri(uri).method(method);
    let req = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, value)
}

fn vip_profile(based_on: &str, products: &[&str]) -> Value {
    json!({
        "name": "VIP Customer Discount",
        "description": "10% discount for VIP customers",
        "basedOn": based_on,
        "adjustmentType": "dynamic",
        "adjustmentMode": "decrease",
        "adjustmentValue": 10,
        "selectedProducts": products,
    })
}

#[tokio::test]
async fn test_health_and_banner() {
    let app = test_app();

    let (status, _) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoints"]["pricingProfiles"], "/api/pricing-profiles");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, body) = send(&test_app(), "GET", "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "error": "Route not found" }));
}

#[tokio::test]
async fn test_list_and_filter_products() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 5);
    assert_eq!(body["data"][0]["globalWholesalePrice"], 279.06);

    let (_, body) = send(&app, "GET", "/api/products?brand=Koyama%20Wines&segment=white", None).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["skuCode"], "KOYRIE19");

    let (_, body) = send(&app, "GET", "/api/products?search=PINOT", None).await;
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn test_get_product_by_id() {
    let app = test_app();

    let (status, body) = send(&app, "GET", &format!("/api/products/{PINOT}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "High Garden Pinot Noir 2021");

    let (status, body) = send(&app, "GET", "/api/products/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn test_reference_data() {
    let (status, body) = send(&test_app(), "GET", "/api/reference/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["brands"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["data"]["subCategories"][0], "wine");
}

#[tokio::test]
async fn test_profile_crud_lifecycle() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/api/pricing-profiles", Some(vip_profile("global", &[PINOT]))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["createdAt"], body["data"]["updatedAt"]);
    assert_eq!(body["data"]["basedOn"], "global");

    let (status, body) = send(&app, "GET", "/api/pricing-profiles", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/pricing-profiles/{id}"),
        Some(json!({ "name": "Gold tier", "adjustmentMode": "increase" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Gold tier");
    assert_eq!(body["data"]["adjustmentMode"], "increase");
    assert_eq!(body["data"]["adjustmentType"], "dynamic");

    let (status, body) = send(&app, "GET", &format!("/api/pricing-profiles/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Gold tier");

    let (status, body) = send(&app, "DELETE", &format!("/api/pricing-profiles/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Pricing profile deleted successfully");

    let (status, _) = send(&app, "DELETE", &format!("/api/pricing-profiles/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "GET", &format!("/api/pricing-profiles/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Pricing profile not found");
}

#[tokio::test]
async fn test_create_rejects_one_unknown_product() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/pricing-profiles",
        Some(vip_profile("global", &[PINOT, "invalid-id"])),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Failed to create pricing profile");
    assert_eq!(body["details"], "One or more selected products do not exist");

    let (_, body) = send(&app, "GET", "/api/pricing-profiles", None).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_create_rejects_unknown_base_profile() {
    let (status, body) = send(
        &test_app(),
        "POST",
        "/api/pricing-profiles",
        Some(vip_profile("does-not-exist", &[PINOT])),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["details"], "Base profile does not exist");
}

#[tokio::test]
async fn test_create_validation_failures_are_400() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/api/pricing-profiles", Some(json!({ "name": "Half" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");

    let mut zero = vip_profile("global", &[PINOT]);
    zero["adjustmentValue"] = json!(0);
    let (status, body) = send(&app, "POST", "/api/pricing-profiles", Some(zero)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], "Adjustment value must be greater than 0");

    let mut bad_type = vip_profile("global", &[PINOT]);
    bad_type["adjustmentType"] = json!("percent");
    let (status, body) = send(&app, "POST", "/api/pricing-profiles", Some(bad_type)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let req = Request::builder()
        .uri("/api/pricing-profiles")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("invalid json"))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_missing_profile_is_404() {
    let (status, body) = send(
        &test_app(),
        "PUT",
        "/api/pricing-profiles/missing",
        Some(json!({ "name": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Failed to update pricing profile");
    assert_eq!(body["details"], "Pricing profile not found");
}

#[tokio::test]
async fn test_calculate_preview() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/pricing-profiles/calculate",
        Some(json!({
            "basedOn": "global",
            "adjustmentType": "dynamic",
            "adjustmentMode": "decrease",
            "adjustmentValue": 10,
            "productIds": [PINOT, "invalid-id"],
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["productId"], PINOT);
    assert_eq!(data[0]["basedOnPrice"], 279.06);
    assert_eq!(data[0]["adjustmentValue"], -27.91);
    assert_eq!(data[0]["newPrice"], 251.15);

    // Nothing was stored.
    let (_, body) = send(&app, "GET", "/api/pricing-profiles", None).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_calculate_chained_and_fallback_bases() {
    let app = test_app();
    let (_, body) = send(&app, "POST", "/api/pricing-profiles", Some(vip_profile("global", &[PINOT]))).await;
    let base_id = body["data"]["id"].as_str().unwrap().to_string();

    let preview = |based_on: &str| {
        json!({
            "basedOn": based_on,
            "adjustmentType": "fixed",
            "adjustmentMode": "increase",
            "adjustmentValue": 5,
            "productIds": [PINOT],
        })
    };

    let (status, body) = send(&app, "POST", "/api/pricing-profiles/calculate", Some(preview(&base_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["basedOnPrice"], 251.15);
    assert_eq!(body["data"][0]["newPrice"], 256.15);

    let (status, body) = send(&app, "POST", "/api/pricing-profiles/calculate", Some(preview("ghost"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["basedOnPrice"], 279.06);
    assert_eq!(body["data"][0]["newPrice"], 284.06);
}

#[tokio::test]
async fn test_calculate_negative_price_fails_whole_batch() {
    let (status, body) = send(
        &test_app(),
        "POST",
        "/api/pricing-profiles/calculate",
        Some(json!({
            "basedOn": "global",
            "adjustmentType": "fixed",
            "adjustmentMode": "decrease",
            "adjustmentValue": 200,
            "productIds": [PINOT, BRUT_NATURE],
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Failed to calculate prices");
    assert_eq!(
        body["details"],
        "Calculated price cannot be negative. Adjustment value is too large."
    );
}

#[tokio::test]
async fn test_calculate_with_no_valid_products() {
    let (status, body) = send(
        &test_app(),
        "POST",
        "/api/pricing-profiles/calculate",
        Some(json!({
            "basedOn": "global",
            "adjustmentType": "fixed",
            "adjustmentMode": "increase",
            "adjustmentValue": 1,
            "productIds": ["nope"],
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], "No valid products selected");
}

#[tokio::test]
async fn test_calculate_rejects_prices_that_overflow() {
    let app = test_app();
    let preview = |kind: &str, value: f64| {
        json!({
            "basedOn": "global",
            "adjustmentType": kind,
            "adjustmentMode": "increase",
            "adjustmentValue": value,
            "productIds": [BRUT_CRU],
        })
    };

    let (status, body) = send(&app, "POST", "/api/pricing-profiles/calculate", Some(preview("fixed", 1e307))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Failed to calculate prices");
    assert_eq!(body["details"], "Adjustment value is too large");

    // 409.32 raised by 1e306 percent no longer fits in cents.
    let (status, body) = send(&app, "POST", "/api/pricing-profiles/calculate", Some(preview("dynamic", 1e306))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], "Calculated price is out of range");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_update_with_unknown_base_profile_is_404() {
    let app = test_app();
    let (_, body) = send(&app, "POST", "/api/pricing-profiles", Some(vip_profile("global", &[PINOT]))).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/pricing-profiles/{id}");

    let (status, body) = send(&app, "PUT", &uri, Some(json!({ "basedOn": "does-not-exist" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Failed to update pricing profile");
    assert_eq!(body["details"], "Base profile does not exist");

    // The stored profile is untouched.
    let (_, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(body["data"]["basedOn"], "global");
}

#[tokio::test]
async fn test_update_with_empty_based_on_is_400() {
    let app = test_app();
    let (_, body) = send(&app, "POST", "/api/pricing-profiles", Some(vip_profile("global", &[PINOT]))).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/pricing-profiles/{id}"),
        Some(json!({ "basedOn": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error");
    assert_eq!(body["details"], "basedOn cannot be empty");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = send(&test_app(), "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Pricing Profiles API");
    let paths = body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/api/pricing-profiles/calculate"));
    assert!(paths.contains_key("/api/pricing-profiles/{id}"));
    assert!(body["components"]["schemas"].get("PricingProfile").is_some());
}
