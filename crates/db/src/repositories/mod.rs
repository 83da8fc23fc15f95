//! One repository per table. All functions take a `&PgPool` and return
//! `sqlx::Error` untranslated; the API layer classifies constraint
//! violations into domain errors.

mod invoice_repo;
mod lesson_repo;
mod student_repo;
mod task_repo;

pub use invoice_repo::InvoiceRepo;
pub use lesson_repo::LessonRepo;
pub use student_repo::StudentRepo;
pub use task_repo::TaskRepo;
