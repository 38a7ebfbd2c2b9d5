pub mod health;
pub mod reading;
pub mod threshold;

use axum::Router;

use crate::state::AppState;

/// Build the dashboard route tree.
///
/// ```text
/// /readings        GET   recent sensor readings (oldest first)
/// /threshold       GET   current alert thresholds
/// /threshold       POST  append new alert thresholds (form body)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/readings", reading::router())
        .nest("/threshold", threshold::router())
}
