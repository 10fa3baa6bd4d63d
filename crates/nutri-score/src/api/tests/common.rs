use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};

pub(super) fn sample_payload() -> Value {
    json!({
        "energy": 1000,
        "sugars": 15,
        "fibre": 2,
        "protein": 3,
        "fruits": 45,
        "sodium": 500,
        "saturated_fatty_acids": 4
    })
}

pub(super) fn orange_juice_payload() -> Value {
    json!({
        "Energy": 190,
        "Sugars": 8.9,
        "Fibre": 0.2,
        "Protein": 0.7,
        "Fruits": 100,
        "Sodium": 1,
        "SaturatedFattyAcids": 0,
        "category": "beverage"
    })
}

pub(super) fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("payload serializes")))
        .expect("request builds")
}

pub(super) async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).expect("body is json");
    (status, value)
}
