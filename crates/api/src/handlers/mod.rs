//! Request handlers, one submodule per resource.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, update_partial, delete) for a single resource. Handlers validate
//! input via `tutoria_core`, delegate to the corresponding repository in
//! `tutoria_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod invoices;
pub mod lessons;
pub mod students;
pub mod tasks;
