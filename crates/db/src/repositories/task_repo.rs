//! Repository for the `tasks` table.

use sqlx::PgPool;
use tutoria_core::task::TaskStatus;
use tutoria_core::types::DbId;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list for tasks queries.
const COLUMNS: &str = "id, title, status, tags, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Create a new task, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let status = input
            .status
            .as_deref()
            .unwrap_or(TaskStatus::Todo.as_str());
        let query = format!(
            "INSERT INTO tasks (title, status, tags)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(status)
            .bind(&input.tags)
            .fetch_one(pool)
            .await
    }

    /// Find a task by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tasks, newest first. `id` breaks ties between rows created
    /// in the same instant.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// Replace a task in full, returning the updated row. An omitted status
    /// resets to `todo`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let status = input
            .status
            .as_deref()
            .unwrap_or(TaskStatus::Todo.as_str());
        let query = format!(
            "UPDATE tasks SET title = $2, status = $3, tags = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(status)
            .bind(&input.tags)
            .fetch_optional(pool)
            .await
    }

    /// Update only the supplied fields of a task, returning the updated row.
    pub async fn update_partial(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                status = COALESCE($3, status),
                tags = COALESCE($4, tags)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.status)
            .bind(&input.tags)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
