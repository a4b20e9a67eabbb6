//! Handlers for the new-door announcement queue.
//!
//! Unlike the door store, this queue reports an unknown id as a 404:
//! queue entries are client-created, so a missing id means the client
//! acted on an entry someone else already removed.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use dockboard_core::error::CoreError;
use dockboard_core::types::DbId;
use dockboard_db::models::new_door::NewDoorEntry;
use dockboard_db::repositories::NewDoorRepo;
use dockboard_events::{DashboardEvent, NewDoorAdded, NewDoorRemoved};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for creating a queue entry.
#[derive(Debug, Deserialize)]
pub struct CreateNewDoor {
    pub door_number: Option<String>,
    pub trailer_number: Option<String>,
}

/// GET /api/new_doors
///
/// All queue entries, creation-time ascending.
pub async fn list_new_doors(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<NewDoorEntry>>> {
    let entries = NewDoorRepo::list(&state.pool).await?;
    Ok(Json(entries))
}

/// POST /api/new_doors
///
/// Create a queue entry. Both fields are trimmed and must be non-empty;
/// a miss on either is a 400. Broadcasts `new_door_added` with the full
/// entry and returns 201.
pub async fn create_new_door(
    State(state): State<AppState>,
    Json(input): Json<CreateNewDoor>,
) -> AppResult<(StatusCode, Json<NewDoorEntry>)> {
    let door_number = input.door_number.as_deref().unwrap_or("").trim();
    let trailer_number = input.trailer_number.as_deref().unwrap_or("").trim();

    if door_number.is_empty() || trailer_number.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "door_number and trailer_number are required".to_string(),
        )));
    }

    let entry = NewDoorRepo::create(&state.pool, door_number, trailer_number).await?;

    state
        .event_bus
        .publish(DashboardEvent::NewDoorAdded(NewDoorAdded {
            id: entry.id,
            door_number: entry.door_number.clone(),
            trailer_number: entry.trailer_number.clone(),
        }));

    Ok((StatusCode::CREATED, Json(entry)))
}

/// DELETE /api/new_doors/{id}
///
/// Remove a queue entry. Unknown ids are a 404, not a no-op. Broadcasts
/// `new_door_removed` carrying only the id.
pub async fn delete_new_door(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = NewDoorRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "NewDoorEntry",
            id,
        }));
    }

    state
        .event_bus
        .publish(DashboardEvent::NewDoorRemoved(NewDoorRemoved { id }));

    Ok(Json(json!({ "deleted": true, "id": id })))
}
