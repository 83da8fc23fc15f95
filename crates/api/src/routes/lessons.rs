//! Route definitions for the `/lessons` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::lessons;
use crate::state::AppState;

/// ```text
/// GET    /        -> list (optional ?date= and ?month= filters)
/// POST   /        -> create
/// GET    /stats   -> per-status counts over the same filters as list
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// PATCH  /{id}    -> update_partial
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lessons::list).post(lessons::create))
        .route("/stats", get(lessons::stats))
        .route(
            "/{id}",
            get(lessons::get_by_id)
                .put(lessons::update)
                .patch(lessons::update_partial)
                .delete(lessons::delete),
        )
}
