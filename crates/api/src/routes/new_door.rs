//! Route definitions for the new-door queue.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::new_door;
use crate::state::AppState;

/// Routes mounted at `/new_doors`.
///
/// ```text
/// GET    /new_doors       -> list_new_doors
/// POST   /new_doors       -> create_new_door (201 / 400)
/// DELETE /new_doors/{id}  -> delete_new_door (200 / 404)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/new_doors",
            get(new_door::list_new_doors).post(new_door::create_new_door),
        )
        .route("/new_doors/{id}", delete(new_door::delete_new_door))
}
