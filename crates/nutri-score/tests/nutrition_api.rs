use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use nutri_score::api::nutrition_router;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds");

    let response = nutrition_router()
        .oneshot(request)
        .await
        .expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

#[tokio::test]
async fn estimator_payload_is_graded() {
    let (status, body) = post_json(
        "/api/calculate-nutrition",
        json!({
            "Energy": 1000,
            "Sugars": 15,
            "Fibre": 2,
            "Protein": 3,
            "Fruits": 45,
            "Sodium": 500,
            "SaturatedFattyAcids": 4,
            "IsWater": false
        }),
    )
    .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(
        body,
        json!({
            "status": 202,
            "message": "nutrition score calculated successfully",
            "data": "C"
        })
    );
}

#[tokio::test]
async fn negative_measurement_is_rejected_before_scoring() {
    let (status, body) = post_json("/api/calculate-nutrition", json!({ "fibre": -0.5 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn breakdown_endpoint_exposes_components() {
    let (status, body) = post_json(
        "/api/v1/nutrition/score",
        json!({ "energy": 3400, "sugars": 50, "category": "cheese" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["score"]["negative"], 20);
    assert_eq!(body["data"]["grade"], "E");
    let energy = &body["data"]["components"][0];
    assert_eq!(energy["nutrient"], "energy");
    assert_eq!(energy["polarity"], "negative");
    assert_eq!(energy["points"], 10);
}
