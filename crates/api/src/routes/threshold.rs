//! Route definitions for alert thresholds.

use axum::routing::get;
use axum::Router;

use crate::handlers::threshold;
use crate::state::AppState;

/// Routes mounted at `/threshold`.
///
/// ```text
/// GET  /   -> get_current
/// POST /   -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(threshold::get_current).post(threshold::update))
}
