//! Task models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutoria_core::types::{DbId, Timestamp};

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub status: String,
    /// Comma-separated free text, e.g. `"Planejamento,Financeiro"`.
    pub tags: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a task. Doubles as the full-replace payload for PUT.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: String,
    /// Defaults to `todo`.
    pub status: Option<String>,
    pub tags: Option<String>,
}

/// DTO for partially updating a task. Only supplied fields change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub status: Option<String>,
    pub tags: Option<String>,
}
