//! HTTP-level integration tests for `GET /threshold` and `POST /threshold`.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, body_text, build_test_app, get, post_form, threshold_count};
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: empty table serves the built-in defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_table_returns_defaults(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/threshold").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["temp_threshold"], 32.0);
    assert_eq!(json["hum_threshold"], 90.0);
    assert_eq!(json.as_object().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Test: latest row by updated_at wins, not the largest value
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn returns_most_recently_updated_row(pool: PgPool) {
    sqlx::query(
        "INSERT INTO threshold_table (temp_threshold, hum_threshold, updated_at) VALUES \
         (50, 99, '2024-01-01 00:00:00+00'), \
         (28, 70, '2024-02-01 00:00:00+00'), \
         (45, 95, '2023-06-01 00:00:00+00')",
    )
    .execute(&pool)
    .await
    .unwrap();
    let app = build_test_app(pool);

    let json = body_json(get(app, "/threshold").await).await;
    assert_eq!(json["temp_threshold"], 28.0);
    assert_eq!(json["hum_threshold"], 70.0);
    assert!(json.get("updated_at").is_none());
}

// ---------------------------------------------------------------------------
// Test: POST then GET round-trips the written values
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn post_then_get_round_trips(pool: PgPool) {
    let app = build_test_app(pool.clone());

    let response = post_form(
        app.clone(),
        "/threshold",
        "temp_threshold=30.5&hum_threshold=85.0",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Threshold updated successfully.");

    let json = body_json(get(app, "/threshold").await).await;
    assert_eq!(json["temp_threshold"], 30.5);
    assert_eq!(json["hum_threshold"], 85.0);
}

// ---------------------------------------------------------------------------
// Test: a valid POST appends exactly one row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn post_appends_one_row_and_keeps_history(pool: PgPool) {
    let app = build_test_app(pool.clone());

    post_form(app.clone(), "/threshold", "temp_threshold=25&hum_threshold=60").await;
    assert_eq!(threshold_count(&pool).await, 1);

    post_form(app, "/threshold", "temp_threshold=0&hum_threshold=-1").await;
    assert_eq!(threshold_count(&pool).await, 2);

    let (first,): (f64,) =
        sqlx::query_as("SELECT temp_threshold FROM threshold_table ORDER BY id LIMIT 1")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(first, 25.0);
}

// ---------------------------------------------------------------------------
// Test: zero values are accepted
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn zero_values_are_accepted(pool: PgPool) {
    let app = build_test_app(pool.clone());

    let response = post_form(app.clone(), "/threshold", "temp_threshold=0&hum_threshold=0").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/threshold").await).await;
    assert_eq!(json["temp_threshold"], 0.0);
    assert_eq!(json["hum_threshold"], 0.0);
}

// ---------------------------------------------------------------------------
// Test: a missing field is rejected without writing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_field_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());

    let response = post_form(app, "/threshold", "temp_threshold=30").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let text = body_text(response).await;
    assert!(text.starts_with("Invalid input."), "got: {text}");
    assert!(text.contains("hum_threshold is required"), "got: {text}");
    assert_eq!(threshold_count(&pool).await, 0);
}

// ---------------------------------------------------------------------------
// Test: an empty body reports both fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_body_reports_both_fields(pool: PgPool) {
    let app = build_test_app(pool.clone());

    let response = post_form(app, "/threshold", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "Invalid input. temp_threshold is required; hum_threshold is required"
    );
    assert_eq!(threshold_count(&pool).await, 0);
}

// ---------------------------------------------------------------------------
// Test: non-numeric input is rejected instead of coerced to zero
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_field_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());

    let response = post_form(app, "/threshold", "temp_threshold=hot&hum_threshold=80").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "Invalid input. temp_threshold must be a number"
    );
    assert_eq!(threshold_count(&pool).await, 0);
}

// ---------------------------------------------------------------------------
// Test: a non-form body is rejected as invalid input
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn json_body_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/threshold")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"temp_threshold":1,"hum_threshold":2}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
    assert!(body_text(response).await.starts_with("Invalid input."));
    assert_eq!(threshold_count(&pool).await, 0);
}

// ---------------------------------------------------------------------------
// Test: insert failure hides the driver message
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn insert_failure_returns_generic_error(pool: PgPool) {
    sqlx::query("DROP TABLE threshold_table")
        .execute(&pool)
        .await
        .unwrap();
    let app = build_test_app(pool);

    let response = post_form(app, "/threshold", "temp_threshold=1&hum_threshold=2").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Error: failed to store threshold");
}

// ---------------------------------------------------------------------------
// Test: read failure surfaces as 500, not as the defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn read_failure_is_not_masked_as_defaults(pool: PgPool) {
    sqlx::query("DROP TABLE threshold_table")
        .execute(&pool)
        .await
        .unwrap();
    let app = build_test_app(pool);

    let response = get(app, "/threshold").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INTERNAL_ERROR");
}
