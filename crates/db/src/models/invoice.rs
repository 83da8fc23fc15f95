//! Invoice models and DTOs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutoria_core::types::DbId;

/// A row from the `invoices` table, joined with the owning student's name.
///
/// Audit timestamps exist on the table but are not part of the wire format,
/// so they are not selected here.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invoice {
    pub id: DbId,
    #[serde(rename = "student")]
    pub student_id: DbId,
    pub student_name: String,
    /// First day of the billed calendar month.
    pub month: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub amount: Decimal,
    pub status: String,
    pub notes: Option<String>,
}

/// DTO for creating an invoice. Doubles as the full-replace payload for PUT.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoice {
    #[serde(rename = "student")]
    pub student_id: DbId,
    /// Any day of the billed month; normalized to day 1 before writing.
    pub month: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub amount: Decimal,
    /// Defaults to `pending`.
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// DTO for partially updating an invoice. Only supplied fields change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInvoice {
    #[serde(rename = "student")]
    pub student_id: Option<DbId>,
    pub month: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub status: Option<String>,
    pub notes: Option<String>,
}
