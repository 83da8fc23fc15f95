//! Handlers for the `/invoices` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use tutoria_core::calendar;
use tutoria_core::error::CoreError;
use tutoria_core::invoice::{validate_amount, InvoiceStatus};
use tutoria_core::types::DbId;
use tutoria_db::models::invoice::{CreateInvoice, Invoice, UpdateInvoice};
use tutoria_db::repositories::InvoiceRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for listing invoices.
///
/// A malformed `month` is dropped, not rejected: the list behaves exactly as
/// if the parameter were absent.
#[derive(Debug, serde::Deserialize)]
pub struct InvoiceListParams {
    /// Calendar-month filter, `YYYY-MM`.
    pub month: Option<String>,
}

/// POST /api/v1/invoices
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInvoice>,
) -> AppResult<(StatusCode, Json<Invoice>)> {
    validate_amount(input.amount)?;
    if let Some(ref status) = input.status {
        InvoiceStatus::from_str(status)?;
    }

    let invoice = InvoiceRepo::create(&state.pool, &input).await?;

    tracing::info!(
        invoice_id = invoice.id,
        student_id = invoice.student_id,
        month = %invoice.month,
        "Invoice created"
    );

    Ok((StatusCode::CREATED, Json(invoice)))
}

/// GET /api/v1/invoices?month=YYYY-MM
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<InvoiceListParams>,
) -> AppResult<Json<Vec<Invoice>>> {
    let month = params.month.as_deref().and_then(calendar::parse_month_param);
    let invoices = InvoiceRepo::list(&state.pool, month).await?;
    Ok(Json(invoices))
}

/// GET /api/v1/invoices/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Invoice>> {
    let invoice = InvoiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;
    Ok(Json(invoice))
}

/// PUT /api/v1/invoices/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateInvoice>,
) -> AppResult<Json<Invoice>> {
    validate_amount(input.amount)?;
    if let Some(ref status) = input.status {
        InvoiceStatus::from_str(status)?;
    }

    let invoice = InvoiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;
    Ok(Json(invoice))
}

/// PATCH /api/v1/invoices/{id}
pub async fn update_partial(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInvoice>,
) -> AppResult<Json<Invoice>> {
    if let Some(amount) = input.amount {
        validate_amount(amount)?;
    }
    if let Some(ref status) = input.status {
        InvoiceStatus::from_str(status)?;
    }

    let invoice = InvoiceRepo::update_partial(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;
    Ok(Json(invoice))
}

/// DELETE /api/v1/invoices/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = InvoiceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))
    }
}
