use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::app_error::AppError;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// `{"Status": "<code>", "Message": "..."}`, the body of every waitlist response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusBody {
    pub status: String,
    pub message: String,
}

pub fn status_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = StatusBody {
        status: status.as_u16().to_string(),
        message: message.into(),
    };
    (status, Json(body)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidInput(msg) => {
                tracing::warn!(message = %msg, "Rejected invalid input");
                status_response(StatusCode::BAD_REQUEST, msg)
            }
            other => {
                // Details stay in the logs.
                tracing::error!(error = ?other, "Request failed");
                status_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}
