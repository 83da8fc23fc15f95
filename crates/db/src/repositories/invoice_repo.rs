//! Repository for the `invoices` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use tutoria_core::calendar::{first_of_month, month_range};
use tutoria_core::invoice::InvoiceStatus;
use tutoria_core::types::DbId;

use crate::models::invoice::{CreateInvoice, Invoice, UpdateInvoice};

/// Column list for joined invoice queries (`invoices i JOIN students s`).
const SELECT_COLUMNS: &str = "i.id, i.student_id, s.name AS student_name, \
    i.month, i.due_date, i.amount, i.status, i.notes";

/// Column list for `INSERT`/`UPDATE ... RETURNING`, where the student name
/// is resolved with a scalar subquery since RETURNING cannot join.
const RETURNING_COLUMNS: &str = "id, student_id, \
    (SELECT name FROM students WHERE students.id = invoices.student_id) AS student_name, \
    month, due_date, amount, status, notes";

/// Default ordering for invoice listings: most recent month first, then
/// student name.
const ORDERING: &str = "ORDER BY i.month DESC, s.name ASC";

/// Provides CRUD operations and month filtering for invoices.
///
/// The one-invoice-per-student-per-month rule lives in the database
/// (`uq_invoices_student_month`); both insert and update surface collisions
/// as unique violations, so no check-then-write race exists here.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// Create a new invoice, returning the created row. The billed month is
    /// normalized to the first day of its calendar month.
    pub async fn create(pool: &PgPool, input: &CreateInvoice) -> Result<Invoice, sqlx::Error> {
        let status = input
            .status
            .as_deref()
            .unwrap_or(InvoiceStatus::Pending.as_str());
        let query = format!(
            "INSERT INTO invoices (student_id, month, due_date, amount, status, notes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {RETURNING_COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(input.student_id)
            .bind(first_of_month(input.month))
            .bind(input.due_date)
            .bind(input.amount)
            .bind(status)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an invoice by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!(
            "SELECT {SELECT_COLUMNS} FROM invoices i
             JOIN students s ON s.id = i.student_id
             WHERE i.id = $1"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List invoices, optionally restricted to one calendar month.
    pub async fn list(
        pool: &PgPool,
        month: Option<NaiveDate>,
    ) -> Result<Vec<Invoice>, sqlx::Error> {
        match month {
            Some(m) => {
                let (start, end) = month_range(m);
                let query = format!(
                    "SELECT {SELECT_COLUMNS} FROM invoices i
                     JOIN students s ON s.id = i.student_id
                     WHERE i.month >= $1 AND i.month < $2
                     {ORDERING}"
                );
                sqlx::query_as::<_, Invoice>(&query)
                    .bind(start)
                    .bind(end)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {SELECT_COLUMNS} FROM invoices i
                     JOIN students s ON s.id = i.student_id
                     {ORDERING}"
                );
                sqlx::query_as::<_, Invoice>(&query).fetch_all(pool).await
            }
        }
    }

    /// Replace an invoice in full, returning the updated row. An omitted
    /// status resets to `pending`; the month is normalized to day 1.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateInvoice,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let status = input
            .status
            .as_deref()
            .unwrap_or(InvoiceStatus::Pending.as_str());
        let query = format!(
            "UPDATE invoices SET
                student_id = $2, month = $3, due_date = $4,
                amount = $5, status = $6, notes = $7
             WHERE id = $1
             RETURNING {RETURNING_COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .bind(input.student_id)
            .bind(first_of_month(input.month))
            .bind(input.due_date)
            .bind(input.amount)
            .bind(status)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Update only the supplied fields of an invoice, returning the updated
    /// row.
    pub async fn update_partial(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInvoice,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!(
            "UPDATE invoices SET
                student_id = COALESCE($2, student_id),
                month = COALESCE($3, month),
                due_date = COALESCE($4, due_date),
                amount = COALESCE($5, amount),
                status = COALESCE($6, status),
                notes = COALESCE($7, notes)
             WHERE id = $1
             RETURNING {RETURNING_COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .bind(input.student_id)
            .bind(input.month.map(first_of_month))
            .bind(input.due_date)
            .bind(input.amount)
            .bind(&input.status)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an invoice by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
