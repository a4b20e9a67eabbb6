pub mod door;
pub mod health;
pub mod new_door;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                      WebSocket upgrade
///
/// /door/{id}/details       get, save (full replace)
/// /status_counts           counts per status string
/// /reset_all               reset every status to Empty (POST)
/// /clear_all_data          delete details + reset statuses (POST)
/// /export_pdf              daily load report (GET)
///
/// /new_doors               list, create
/// /new_doors/{id}          delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .merge(door::router())
        .merge(new_door::router())
}
