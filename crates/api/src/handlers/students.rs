//! Handlers for the `/students` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use tutoria_core::error::CoreError;
use tutoria_core::types::DbId;
use tutoria_core::validate;
use tutoria_db::models::student::{CreateStudent, Student, UpdateStudent};
use tutoria_db::repositories::StudentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Validate a full student payload (create and PUT share it).
fn validate_payload(input: &CreateStudent) -> Result<(), CoreError> {
    validate::non_empty("name", &input.name)?;
    validate::non_empty("guardians", &input.guardians)?;
    validate::non_empty("plan_name", &input.plan_name)?;
    if let Some(n) = input.lessons_total {
        validate::non_negative_counter("lessons_total", n)?;
    }
    if let Some(n) = input.lessons_done {
        validate::non_negative_counter("lessons_done", n)?;
    }
    Ok(())
}

/// POST /api/v1/students
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    validate_payload(&input)?;

    let student = StudentRepo::create(&state.pool, &input).await?;

    tracing::info!(student_id = student.id, "Student created");

    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/v1/students
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = StudentRepo::list(&state.pool).await?;
    Ok(Json(students))
}

/// GET /api/v1/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(student))
}

/// PUT /api/v1/students/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateStudent>,
) -> AppResult<Json<Student>> {
    validate_payload(&input)?;

    let student = StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(student))
}

/// PATCH /api/v1/students/{id}
pub async fn update_partial(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<Json<Student>> {
    if let Some(ref name) = input.name {
        validate::non_empty("name", name)?;
    }
    if let Some(ref guardians) = input.guardians {
        validate::non_empty("guardians", guardians)?;
    }
    if let Some(ref plan_name) = input.plan_name {
        validate::non_empty("plan_name", plan_name)?;
    }
    if let Some(n) = input.lessons_total {
        validate::non_negative_counter("lessons_total", n)?;
    }
    if let Some(n) = input.lessons_done {
        validate::non_negative_counter("lessons_done", n)?;
    }

    let student = StudentRepo::update_partial(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(student))
}

/// DELETE /api/v1/students/{id}
///
/// Removes the student together with every lesson and invoice that
/// references them.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = StudentRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(student_id = id, "Student deleted (cascade)");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))
    }
}
