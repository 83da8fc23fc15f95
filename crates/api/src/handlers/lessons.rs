//! Handlers for the `/lessons` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;

use tutoria_core::calendar;
use tutoria_core::error::CoreError;
use tutoria_core::lesson::LessonStatus;
use tutoria_core::types::DbId;
use tutoria_core::validate;
use tutoria_db::models::lesson::{CreateLesson, Lesson, LessonStatusCounts, UpdateLesson};
use tutoria_db::repositories::LessonRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for listing lessons and for `/lessons/stats`.
///
/// Both filters are optional and combinable. Values that fail to parse are
/// dropped, not rejected: a malformed `date` or `month` behaves exactly as
/// if the parameter were absent.
#[derive(Debug, serde::Deserialize)]
pub struct LessonListParams {
    /// Exact-date filter, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Calendar-month filter, `YYYY-MM`.
    pub month: Option<String>,
}

impl LessonListParams {
    fn parsed(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        let date = self.date.as_deref().and_then(calendar::parse_date_param);
        let month = self.month.as_deref().and_then(calendar::parse_month_param);
        (date, month)
    }
}

/// POST /api/v1/lessons
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLesson>,
) -> AppResult<(StatusCode, Json<Lesson>)> {
    validate::non_empty("title", &input.title)?;
    if let Some(ref status) = input.status {
        LessonStatus::from_str(status)?;
    }

    let lesson = LessonRepo::create(&state.pool, &input).await?;

    tracing::info!(
        lesson_id = lesson.id,
        student_id = lesson.student_id,
        date = %lesson.date,
        "Lesson created"
    );

    Ok((StatusCode::CREATED, Json(lesson)))
}

/// GET /api/v1/lessons?date=YYYY-MM-DD&month=YYYY-MM
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<LessonListParams>,
) -> AppResult<Json<Vec<Lesson>>> {
    let (date, month) = params.parsed();
    let lessons = LessonRepo::list(&state.pool, date, month).await?;
    Ok(Json(lessons))
}

/// GET /api/v1/lessons/stats?date=YYYY-MM-DD&month=YYYY-MM
///
/// Returns `{"confirmed": n, "pending": n, "canceled": n}` computed over the
/// same filtered set as the list endpoint.
pub async fn stats(
    State(state): State<AppState>,
    Query(params): Query<LessonListParams>,
) -> AppResult<Json<LessonStatusCounts>> {
    let (date, month) = params.parsed();
    let counts = LessonRepo::status_counts(&state.pool, date, month).await?;
    Ok(Json(counts))
}

/// GET /api/v1/lessons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Lesson>> {
    let lesson = LessonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id,
        }))?;
    Ok(Json(lesson))
}

/// PUT /api/v1/lessons/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateLesson>,
) -> AppResult<Json<Lesson>> {
    validate::non_empty("title", &input.title)?;
    if let Some(ref status) = input.status {
        LessonStatus::from_str(status)?;
    }

    let lesson = LessonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id,
        }))?;
    Ok(Json(lesson))
}

/// PATCH /api/v1/lessons/{id}
pub async fn update_partial(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLesson>,
) -> AppResult<Json<Lesson>> {
    if let Some(ref title) = input.title {
        validate::non_empty("title", title)?;
    }
    if let Some(ref status) = input.status {
        LessonStatus::from_str(status)?;
    }

    let lesson = LessonRepo::update_partial(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id,
        }))?;
    Ok(Json(lesson))
}

/// DELETE /api/v1/lessons/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = LessonRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id,
        }))
    }
}
