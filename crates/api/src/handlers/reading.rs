//! Handlers for the `/readings` resource.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use dht_core::reading::resolve_limit;
use dht_db::repositories::ReadingRepo;

use crate::error::{AppError, AppResult};
use crate::query::ReadingsParams;
use crate::state::AppState;

/// GET /readings?limit=50
///
/// Most recent sensor readings as a bare JSON array, oldest first.
pub async fn list_recent(
    State(state): State<AppState>,
    params: Result<Query<ReadingsParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let limit = resolve_limit(params.limit.as_deref())?;

    let readings = ReadingRepo::list_recent(&state.pool, limit).await?;
    tracing::debug!(limit, count = readings.len(), "Fetched readings");
    Ok(Json(readings))
}
