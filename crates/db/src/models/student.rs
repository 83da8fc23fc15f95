//! Student models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutoria_core::types::{DbId, Timestamp};

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub guardians: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub plan_name: String,
    pub lessons_total: i32,
    pub lessons_done: i32,
    pub pix_key: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a student. Doubles as the full-replace payload for PUT,
/// where omitted optional fields fall back to their documented defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub name: String,
    /// Free text; by convention `"Responsável próprio"` for self-guardians.
    pub guardians: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub plan_name: String,
    /// Manual counter, no enforced relation to lesson rows. Defaults to 0.
    pub lessons_total: Option<i32>,
    /// Manual counter, no enforced relation to lesson rows. Defaults to 0.
    pub lessons_done: Option<i32>,
    pub pix_key: Option<String>,
    /// Defaults to true.
    pub active: Option<bool>,
}

/// DTO for partially updating a student. Only supplied fields change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudent {
    pub name: Option<String>,
    pub guardians: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub plan_name: Option<String>,
    pub lessons_total: Option<i32>,
    pub lessons_done: Option<i32>,
    pub pix_key: Option<String>,
    pub active: Option<bool>,
}
