use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::Response,
    routing::{get, post},
};
use serde::Deserialize;

use crate::{
    adapters::http::{app_error_impl::status_response, app_state::AppState},
    app_error::AppResult,
};

pub const ADDED_MESSAGE: &str = "Added to waitlist successfully!";

// Both fields are optional here so that a missing email reaches validation
// and gets the usual 400 body instead of an extractor rejection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddPayload {
    full_name: Option<String>,
    email: Option<String>,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_to_waitlist))
        .route("/welcome", get(welcome))
}

async fn add_to_waitlist(
    State(app_state): State<AppState>,
    Json(payload): Json<AddPayload>,
) -> AppResult<Response> {
    app_state
        .waitlist_use_cases
        .submit(payload.full_name.as_deref(), payload.email.as_deref())
        .await?;

    Ok(status_response(StatusCode::OK, ADDED_MESSAGE))
}

async fn welcome() -> &'static str {
    "Welcome to the waitlist!"
}
