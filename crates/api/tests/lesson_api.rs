//! HTTP-level integration tests for the `/lessons` endpoints: CRUD, the
//! date/month filters, and the stats aggregation.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, patch_json, post_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_student(pool: &PgPool, name: &str) -> i64 {
    let body = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/students",
            json!({"name": name, "guardians": "Responsável próprio", "plan_name": "Mensal"}),
        )
        .await,
    )
    .await;
    body["id"].as_i64().unwrap()
}

async fn create_lesson(pool: &PgPool, payload: serde_json::Value) -> serde_json::Value {
    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/lessons", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_defaults_to_pending_and_includes_student_name(pool: PgPool) {
    let student = create_student(&pool, "Gabriela").await;
    let body = create_lesson(
        &pool,
        json!({"student": student, "date": "2026-01-19", "title": "Álgebra"}),
    )
    .await;

    assert_eq!(body["status"], "pending");
    assert_eq!(body["student"], student);
    assert_eq!(body["student_name"], "Gabriela");
    assert_eq!(body["time"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_invalid_status(pool: PgPool) {
    let student = create_student(&pool, "Heitor").await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/lessons",
        json!({"student": student, "date": "2026-01-19", "title": "Aula", "status": "scheduled"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let list = body_json(get(common::build_test_app(pool), "/api/v1/lessons").await).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_unknown_student(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/lessons",
        json!({"student": 999999, "date": "2026-01-19", "title": "Aula"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "REFERENCE_NOT_FOUND");

    let list = body_json(get(common::build_test_app(pool), "/api/v1/lessons").await).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn date_filter_matches_exact_day(pool: PgPool) {
    let student = create_student(&pool, "Igor").await;
    create_lesson(&pool, json!({"student": student, "date": "2026-01-19", "title": "A"})).await;
    create_lesson(&pool, json!({"student": student, "date": "2026-01-20", "title": "B"})).await;

    let body = body_json(
        get(common::build_test_app(pool), "/api/v1/lessons?date=2026-01-19").await,
    )
    .await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["date"], "2026-01-19");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn month_filter_covers_the_calendar_month(pool: PgPool) {
    let student = create_student(&pool, "Joana").await;
    create_lesson(&pool, json!({"student": student, "date": "2026-01-01", "title": "A"})).await;
    create_lesson(&pool, json!({"student": student, "date": "2026-01-31", "title": "B"})).await;
    create_lesson(&pool, json!({"student": student, "date": "2025-12-31", "title": "C"})).await;
    create_lesson(&pool, json!({"student": student, "date": "2026-02-01", "title": "D"})).await;

    let body = body_json(
        get(common::build_test_app(pool), "/api/v1/lessons?month=2026-01").await,
    )
    .await;
    let dates: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, ["2026-01-01", "2026-01-31"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_date_filter_is_ignored(pool: PgPool) {
    let student = create_student(&pool, "Kaio").await;
    create_lesson(&pool, json!({"student": student, "date": "2026-01-19", "title": "A"})).await;
    create_lesson(&pool, json!({"student": student, "date": "2026-01-20", "title": "B"})).await;

    // Same result as no filter at all, not an error response.
    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/lessons?date=not-a-date",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let filtered = body_json(response).await;

    let unfiltered = body_json(get(common::build_test_app(pool), "/api/v1/lessons").await).await;
    assert_eq!(filtered, unfiltered);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_month_keeps_valid_date_filter(pool: PgPool) {
    let student = create_student(&pool, "Lara").await;
    create_lesson(&pool, json!({"student": student, "date": "2026-01-19", "title": "A"})).await;
    create_lesson(&pool, json!({"student": student, "date": "2026-01-20", "title": "B"})).await;

    let body = body_json(
        get(
            common::build_test_app(pool),
            "/api/v1/lessons?date=2026-01-19&month=2026-13",
        )
        .await,
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_count_by_status_over_the_filtered_set(pool: PgPool) {
    let student = create_student(&pool, "Mila").await;
    for (date, status) in [
        ("2026-01-05", "confirmed"),
        ("2026-01-12", "confirmed"),
        ("2026-01-19", "pending"),
        ("2026-01-26", "canceled"),
        ("2026-02-02", "confirmed"),
    ] {
        create_lesson(
            &pool,
            json!({"student": student, "date": date, "title": "Aula", "status": status}),
        )
        .await;
    }

    let stats = body_json(
        get(
            common::build_test_app(pool.clone()),
            "/api/v1/lessons/stats?month=2026-01",
        )
        .await,
    )
    .await;
    assert_eq!(stats, json!({"confirmed": 2, "pending": 1, "canceled": 1}));

    // Counts sum to the length of the identically filtered list.
    let list = body_json(
        get(common::build_test_app(pool), "/api/v1/lessons?month=2026-01").await,
    )
    .await;
    let total = stats["confirmed"].as_i64().unwrap()
        + stats["pending"].as_i64().unwrap()
        + stats["canceled"].as_i64().unwrap();
    assert_eq!(total, list.as_array().unwrap().len() as i64);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_updates_status(pool: PgPool) {
    let student = create_student(&pool, "Nina").await;
    let lesson = create_lesson(
        &pool,
        json!({"student": student, "date": "2026-01-19", "title": "Redação"}),
    )
    .await;
    let id = lesson["id"].as_i64().unwrap();

    let response = patch_json(
        common::build_test_app(pool),
        &format!("/api/v1/lessons/{id}"),
        json!({"status": "confirmed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "confirmed");
    assert_eq!(body["title"], "Redação");
}
