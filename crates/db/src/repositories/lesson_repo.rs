//! Repository for the `lessons` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use tutoria_core::calendar::month_range;
use tutoria_core::lesson::LessonStatus;
use tutoria_core::types::DbId;

use crate::models::lesson::{CreateLesson, Lesson, LessonStatusCounts, UpdateLesson};

/// Column list for joined lesson queries (`lessons l JOIN students s`).
const SELECT_COLUMNS: &str = "l.id, l.student_id, s.name AS student_name, \
    l.date, l.time, l.title, l.info, l.status, l.created_at, l.updated_at";

/// Column list for `INSERT`/`UPDATE ... RETURNING`, where the student name
/// is resolved with a scalar subquery since RETURNING cannot join.
const RETURNING_COLUMNS: &str = "id, student_id, \
    (SELECT name FROM students WHERE students.id = lessons.student_id) AS student_name, \
    date, time, title, info, status, created_at, updated_at";

/// Shared WHERE clause for the optional date/month filters. A NULL bind
/// disables the corresponding filter.
const FILTER_CLAUSE: &str = "($1::date IS NULL OR l.date = $1) \
    AND ($2::date IS NULL OR (l.date >= $2 AND l.date < $3))";

/// Provides CRUD, filtered listing, and status aggregation for lessons.
pub struct LessonRepo;

impl LessonRepo {
    /// Create a new lesson, returning the created row.
    ///
    /// Fails with a foreign-key violation on `fk_lessons_student` when the
    /// referenced student does not exist.
    pub async fn create(pool: &PgPool, input: &CreateLesson) -> Result<Lesson, sqlx::Error> {
        let status = input
            .status
            .as_deref()
            .unwrap_or(LessonStatus::Pending.as_str());
        let query = format!(
            "INSERT INTO lessons (student_id, date, time, title, info, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {RETURNING_COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(input.student_id)
            .bind(input.date)
            .bind(input.time)
            .bind(&input.title)
            .bind(&input.info)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// Find a lesson by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!(
            "SELECT {SELECT_COLUMNS} FROM lessons l
             JOIN students s ON s.id = l.student_id
             WHERE l.id = $1"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List lessons, optionally restricted to an exact date and/or a calendar
    /// month, ordered by date then time.
    pub async fn list(
        pool: &PgPool,
        date: Option<NaiveDate>,
        month: Option<NaiveDate>,
    ) -> Result<Vec<Lesson>, sqlx::Error> {
        let (month_start, month_end) = split_month(month);
        let query = format!(
            "SELECT {SELECT_COLUMNS} FROM lessons l
             JOIN students s ON s.id = l.student_id
             WHERE {FILTER_CLAUSE}
             ORDER BY l.date ASC, l.time ASC"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(date)
            .bind(month_start)
            .bind(month_end)
            .fetch_all(pool)
            .await
    }

    /// Count lessons per status over the same filtered set as [`Self::list`].
    pub async fn status_counts(
        pool: &PgPool,
        date: Option<NaiveDate>,
        month: Option<NaiveDate>,
    ) -> Result<LessonStatusCounts, sqlx::Error> {
        let (month_start, month_end) = split_month(month);
        let query = format!(
            "SELECT
                COUNT(*) FILTER (WHERE l.status = 'confirmed') AS confirmed,
                COUNT(*) FILTER (WHERE l.status = 'pending') AS pending,
                COUNT(*) FILTER (WHERE l.status = 'canceled') AS canceled
             FROM lessons l
             WHERE {FILTER_CLAUSE}"
        );
        sqlx::query_as::<_, LessonStatusCounts>(&query)
            .bind(date)
            .bind(month_start)
            .bind(month_end)
            .fetch_one(pool)
            .await
    }

    /// Replace a lesson in full, returning the updated row. An omitted
    /// status resets to `pending`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateLesson,
    ) -> Result<Option<Lesson>, sqlx::Error> {
        let status = input
            .status
            .as_deref()
            .unwrap_or(LessonStatus::Pending.as_str());
        let query = format!(
            "UPDATE lessons SET
                student_id = $2, date = $3, time = $4, title = $5,
                info = $6, status = $7
             WHERE id = $1
             RETURNING {RETURNING_COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .bind(input.student_id)
            .bind(input.date)
            .bind(input.time)
            .bind(&input.title)
            .bind(&input.info)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Update only the supplied fields of a lesson, returning the updated row.
    pub async fn update_partial(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLesson,
    ) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!(
            "UPDATE lessons SET
                student_id = COALESCE($2, student_id),
                date = COALESCE($3, date),
                time = COALESCE($4, time),
                title = COALESCE($5, title),
                info = COALESCE($6, info),
                status = COALESCE($7, status)
             WHERE id = $1
             RETURNING {RETURNING_COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .bind(input.student_id)
            .bind(input.date)
            .bind(input.time)
            .bind(&input.title)
            .bind(&input.info)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a lesson by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lessons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Expand an optional month into its half-open range bounds.
fn split_month(month: Option<NaiveDate>) -> (Option<NaiveDate>, Option<NaiveDate>) {
    match month {
        Some(m) => {
            let (start, end) = month_range(m);
            (Some(start), Some(end))
        }
        None => (None, None),
    }
}
