use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::{debug, warn};

use super::request::NutritionRequest;
use super::response::{ApiResponse, ScoreReport};
use crate::error::AppError;
use crate::scoring::{grade, score, score_with_breakdown};
use crate::validation::validate_nutrients;

/// Router exposing the scoring endpoints.
pub fn nutrition_router() -> Router {
    Router::new()
        .route("/api/calculate-nutrition", post(calculate_handler))
        .route("/api/v1/nutrition/score", post(score_handler))
}

/// Grades a product and returns only the letter, wrapped in the envelope.
pub(crate) async fn calculate_handler(
    payload: Result<Json<NutritionRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejected malformed nutrition payload");
            return ApiResponse::failure(StatusCode::BAD_REQUEST, "invalid request data")
                .into_response();
        }
    };

    let data = request.nutritional_data();
    if let Err(error) = validate_nutrients(&data) {
        warn!(%error, "rejected nutrition payload");
        return ApiResponse::failure(StatusCode::BAD_REQUEST, "required value is missing")
            .into_response();
    }

    let category = request.resolved_category();
    let result = score(&data, category);
    let grade = grade(result.value);
    debug!(%category, score = result.value, %grade, "nutrition score calculated");

    ApiResponse::new(
        StatusCode::ACCEPTED,
        "nutrition score calculated successfully",
        Some(grade),
    )
    .into_response()
}

/// Grades a product and returns the subtotals and per-nutrient points.
pub(crate) async fn score_handler(
    payload: Result<Json<NutritionRequest>, JsonRejection>,
) -> Result<ApiResponse<ScoreReport>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected malformed nutrition payload");
        AppError::from(rejection)
    })?;

    let data = request.nutritional_data();
    validate_nutrients(&data).map_err(|error| {
        warn!(%error, "rejected nutrition payload");
        AppError::from(error)
    })?;

    let report = ScoreReport::from(score_with_breakdown(&data, request.resolved_category()));
    debug!(
        category = %report.score.category,
        score = report.score.value,
        grade = %report.grade,
        "nutrition breakdown calculated"
    );

    Ok(ApiResponse::new(
        StatusCode::OK,
        "nutrition score calculated",
        Some(report),
    ))
}
