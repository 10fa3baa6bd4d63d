use super::common::*;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::api::router::{calculate_handler, score_handler};
use crate::api::NutritionRequest;

fn request_from(value: serde_json::Value) -> NutritionRequest {
    serde_json::from_value(value).expect("payload parses")
}

#[tokio::test]
async fn calculate_handler_returns_grade_letter() {
    let response = calculate_handler(Ok(Json(request_from(sample_payload())))).await;

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["status"], 202);
    assert_eq!(body["message"], "nutrition score calculated successfully");
    assert_eq!(body["data"], "C");
}

#[tokio::test]
async fn calculate_handler_rejects_negative_values() {
    let mut payload = sample_payload();
    payload["protein"] = serde_json::json!(-1);

    let response = calculate_handler(Ok(Json(request_from(payload)))).await;

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "required value is missing");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn score_handler_reports_breakdown() {
    let response = score_handler(Ok(Json(request_from(sample_payload()))))
        .await
        .into_response();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["grade"], "C");
    assert_eq!(data["score"]["value"], 9);
    assert_eq!(data["score"]["negative"], 13);
    assert_eq!(data["score"]["positive"], 4);
    assert_eq!(data["score"]["category"], "food");
    assert_eq!(data["components"].as_array().map(Vec::len), Some(7));
    assert!(data.get("notes").is_none());
}

#[tokio::test]
async fn score_handler_flags_water_category() {
    let response = score_handler(Ok(Json(request_from(serde_json::json!({
        "IsWater": true
    })))))
    .await
    .into_response();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["score"]["category"], "water");
    assert_eq!(body["data"]["grade"], "B");
    let notes = body["data"]["notes"].as_array().expect("notes present");
    assert_eq!(notes.len(), 1);
}

#[tokio::test]
async fn score_handler_uses_unprocessable_for_invalid_values() {
    let mut payload = sample_payload();
    payload["sodium"] = serde_json::json!(-20);

    let response = score_handler(Ok(Json(request_from(payload))))
        .await
        .into_response();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);
    assert!(body["message"]
        .as_str()
        .is_some_and(|message| message.contains("Sodium")));
}
