//! Route definitions for the door store and the report export.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{door, report};
use crate::state::AppState;

/// Routes mounted at the `/api` root.
///
/// ```text
/// GET/POST /door/{id}/details  -> get_door_details / save_door_details
/// GET      /status_counts      -> status_counts
/// POST     /reset_all          -> reset_all
/// POST     /clear_all_data     -> clear_all_data
/// GET      /export_pdf         -> export_pdf
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/door/{id}/details",
            get(door::get_door_details).post(door::save_door_details),
        )
        .route("/status_counts", get(door::status_counts))
        .route("/reset_all", post(door::reset_all))
        .route("/clear_all_data", post(door::clear_all_data))
        .route("/export_pdf", get(report::export_pdf))
}
