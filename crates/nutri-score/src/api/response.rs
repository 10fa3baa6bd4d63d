use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::scoring::{Grade, NutrientPoints, ScoreBreakdown, ScoreResult};

/// Uniform JSON envelope: `{ "status", "message", "data" }`, with `status`
/// mirrored as the HTTP status code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl ApiResponse<()> {
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, message, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

/// Detailed scoring result returned by the versioned endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub grade: Grade,
    pub score: ScoreResult,
    pub components: Vec<NutrientPoints>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl From<ScoreBreakdown> for ScoreReport {
    fn from(breakdown: ScoreBreakdown) -> Self {
        Self {
            grade: crate::scoring::grade(breakdown.result.value),
            notes: breakdown
                .result
                .category
                .rule_note()
                .map(str::to_string)
                .into_iter()
                .collect(),
            score: breakdown.result,
            components: breakdown.components,
        }
    }
}
