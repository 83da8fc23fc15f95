//! Lesson models and DTOs.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutoria_core::types::{DbId, Timestamp};

/// A row from the `lessons` table, joined with the owning student's name.
///
/// `student_name` is resolved at query time and never stored. The wire field
/// for the foreign key is `student`, matching the column `student_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lesson {
    pub id: DbId,
    #[serde(rename = "student")]
    pub student_id: DbId,
    pub student_name: String,
    pub date: NaiveDate,
    /// Optional time of day. Lessons without a time sort after timed lessons
    /// on the same date (PostgreSQL NULLS LAST for ascending order).
    pub time: Option<NaiveTime>,
    pub title: String,
    pub info: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a lesson. Doubles as the full-replace payload for PUT.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLesson {
    #[serde(rename = "student")]
    pub student_id: DbId,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub title: String,
    pub info: Option<String>,
    /// Defaults to `pending`.
    pub status: Option<String>,
}

/// DTO for partially updating a lesson. Only supplied fields change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLesson {
    #[serde(rename = "student")]
    pub student_id: Option<DbId>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub title: Option<String>,
    pub info: Option<String>,
    pub status: Option<String>,
}

/// Per-status lesson counts over a filtered set.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct LessonStatusCounts {
    pub confirmed: i64,
    pub pending: i64,
    pub canceled: i64,
}
