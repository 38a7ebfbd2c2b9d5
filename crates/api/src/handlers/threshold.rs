//! Handlers for the `/threshold` resource.
//!
//! The read side answers in JSON. The write side answers in plain text,
//! which is what the dashboard's settings form displays verbatim.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use dht_core::error::CoreError;
use dht_core::threshold::ThresholdForm;
use dht_db::repositories::ThresholdRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Body returned after a threshold has been stored.
pub const UPDATE_SUCCESS_MESSAGE: &str = "Threshold updated successfully.";

/// Prefix of every rejected-input body.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input.";

/// Body returned when the insert fails. The driver error is only logged.
pub const WRITE_FAILED_MESSAGE: &str = "Error: failed to store threshold";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure modes of `POST /threshold`, rendered as `text/plain`.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The body could not be decoded as a form.
    #[error("malformed form body: {0}")]
    Malformed(#[from] FormRejection),

    /// One or more fields are missing or not numbers.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// The insert was rejected by the database.
    #[error("threshold insert failed: {0}")]
    WriteFailed(#[from] sqlx::Error),
}

impl IntoResponse for WriteError {
    fn into_response(self) -> Response {
        match self {
            WriteError::Malformed(rejection) => (
                rejection.status(),
                format!("{INVALID_INPUT_MESSAGE} {}", rejection.body_text()),
            )
                .into_response(),
            WriteError::Invalid(err) => (
                StatusCode::BAD_REQUEST,
                format!("{INVALID_INPUT_MESSAGE} {}", err.detail()),
            )
                .into_response(),
            WriteError::WriteFailed(err) => {
                tracing::error!(error = %err, "Failed to insert threshold");
                (StatusCode::INTERNAL_SERVER_ERROR, WRITE_FAILED_MESSAGE).into_response()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /threshold
///
/// Latest stored threshold, or the built-in defaults if none exists.
pub async fn get_current(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let threshold = ThresholdRepo::current(&state.pool).await?;
    Ok(Json(threshold))
}

/// POST /threshold
///
/// Append a new threshold from `temp_threshold` / `hum_threshold` form fields.
pub async fn update(
    State(state): State<AppState>,
    form: Result<Form<ThresholdForm>, FormRejection>,
) -> Result<&'static str, WriteError> {
    let Form(form) = form?;
    let input = form.validate()?;

    ThresholdRepo::insert(&state.pool, &input).await?;
    tracing::info!(
        temp_threshold = input.temp_threshold,
        hum_threshold = input.hum_threshold,
        "Threshold updated"
    );
    Ok(UPDATE_SUCCESS_MESSAGE)
}
