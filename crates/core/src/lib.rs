//! Domain types and validation for the tutoring practice backend.
//!
//! Everything here is storage- and transport-agnostic: status vocabularies,
//! field validation, calendar helpers for the date/month query filters, and
//! the shared error taxonomy. The `db` and `api` crates build on top.

pub mod calendar;
pub mod error;
pub mod invoice;
pub mod lesson;
pub mod student;
pub mod task;
pub mod types;
pub mod validate;
