//! Route definitions for sensor readings.

use axum::routing::get;
use axum::Router;

use crate::handlers::reading;
use crate::state::AppState;

/// Routes mounted at `/readings`.
///
/// ```text
/// GET  /   -> list_recent
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(reading::list_recent))
}
