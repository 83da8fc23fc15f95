//! Repository for the `students` table.

use sqlx::PgPool;
use tutoria_core::types::DbId;

use crate::models::student::{CreateStudent, Student, UpdateStudent};

/// Column list for students queries.
const COLUMNS: &str = "id, name, guardians, phone, address, plan_name, \
    lessons_total, lessons_done, pix_key, active, created_at, updated_at";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Create a new student, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students
                (name, guardians, phone, address, plan_name,
                 lessons_total, lessons_done, pix_key, active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.name)
            .bind(&input.guardians)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.plan_name)
            .bind(input.lessons_total.unwrap_or(0))
            .bind(input.lessons_done.unwrap_or(0))
            .bind(&input.pix_key)
            .bind(input.active.unwrap_or(true))
            .fetch_one(pool)
            .await
    }

    /// Find a student by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all students ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY name ASC");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Replace a student in full, returning the updated row. Omitted optional
    /// fields in the payload reset to their defaults.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                name = $2, guardians = $3, phone = $4, address = $5,
                plan_name = $6, lessons_total = $7, lessons_done = $8,
                pix_key = $9, active = $10
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.guardians)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.plan_name)
            .bind(input.lessons_total.unwrap_or(0))
            .bind(input.lessons_done.unwrap_or(0))
            .bind(&input.pix_key)
            .bind(input.active.unwrap_or(true))
            .fetch_optional(pool)
            .await
    }

    /// Update only the supplied fields of a student, returning the updated row.
    pub async fn update_partial(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                name = COALESCE($2, name),
                guardians = COALESCE($3, guardians),
                phone = COALESCE($4, phone),
                address = COALESCE($5, address),
                plan_name = COALESCE($6, plan_name),
                lessons_total = COALESCE($7, lessons_total),
                lessons_done = COALESCE($8, lessons_done),
                pix_key = COALESCE($9, pix_key),
                active = COALESCE($10, active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.guardians)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.plan_name)
            .bind(input.lessons_total)
            .bind(input.lessons_done)
            .bind(&input.pix_key)
            .bind(input.active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student by ID. Returns `true` if a row was deleted.
    ///
    /// Owned lessons and invoices are removed in the same statement through
    /// `ON DELETE CASCADE`, so the cascade is atomic.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
