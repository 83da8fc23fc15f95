pub mod health;
pub mod invoices;
pub mod lessons;
pub mod students;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /students                 list, create
/// /students/{id}            get, replace, partial update, delete
///
/// /lessons                  list (date/month filters), create
/// /lessons/stats            per-status counts over the same filters
/// /lessons/{id}             get, replace, partial update, delete
///
/// /tasks                    list, create
/// /tasks/{id}               get, replace, partial update, delete
///
/// /invoices                 list (month filter), create
/// /invoices/{id}            get, replace, partial update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/students", students::router())
        .nest("/lessons", lessons::router())
        .nest("/tasks", tasks::router())
        .nest("/invoices", invoices::router())
}
