//! Handlers for the door store: run details, status counts, and the
//! administrative reset/clear operations.
//!
//! Unknown door ids on these paths are silent no-ops, never errors --
//! the dashboard's door set is fixed, so a miss can only come from a
//! stale client, and stale clients resynchronize via the read APIs.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;

use dockboard_core::types::DbId;
use dockboard_db::models::door_detail::{DoorDetail, UpsertDoorDetail};
use dockboard_db::repositories::{DoorDetailRepo, DoorRepo};
use dockboard_events::{DashboardEvent, DetailFields, DoorDetailsSaved};

use crate::error::AppResult;
use crate::state::AppState;

/// Denormalize a detail row into broadcast fields. `None` yields all
/// nulls, which clients rely on to clear their display.
fn detail_fields(detail: Option<&DoorDetail>) -> DetailFields {
    detail.map_or_else(DetailFields::default, |d| DetailFields {
        run_number: d.run_number.clone(),
        loader: d.loader.clone(),
        trailer: d.trailer.clone(),
        trailer_temp1: d.trailer_temp1.clone(),
        trailer_temp2: d.trailer_temp2.clone(),
        stores: d.stores.clone(),
        notes: d.notes.clone(),
    })
}

/// GET /api/door/{id}/details
///
/// Returns the detail fields for a door, or just `{"door_id": id}` when
/// no detail row exists yet. Absence is a normal state, not a 404.
pub async fn get_door_details(
    State(state): State<AppState>,
    Path(door_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let detail = DoorDetailRepo::find_by_door(&state.pool, door_id).await?;

    match detail {
        Some(detail) => {
            let payload = DoorDetailsSaved {
                door_id,
                fields: detail_fields(Some(&detail)),
            };
            Ok(Json(serde_json::to_value(&payload)?))
        }
        None => Ok(Json(json!({ "door_id": door_id }))),
    }
}

/// POST /api/door/{id}/details
///
/// Create or fully replace a door's details. FULL REPLACE: omitted
/// fields are cleared to null, not preserved. Echoes the saved payload
/// and broadcasts the same payload as `door_details_saved`.
///
/// An unknown door id echoes the payload without persisting or
/// broadcasting anything (silent no-op).
pub async fn save_door_details(
    State(state): State<AppState>,
    Path(door_id): Path<DbId>,
    Json(input): Json<UpsertDoorDetail>,
) -> AppResult<Json<serde_json::Value>> {
    if DoorRepo::find_by_id(&state.pool, door_id).await?.is_none() {
        tracing::debug!(door_id, "Ignoring details for unknown door");
        let payload = DoorDetailsSaved {
            door_id,
            fields: upsert_fields(&input),
        };
        return Ok(Json(serde_json::to_value(&payload)?));
    }

    let detail = DoorDetailRepo::upsert(&state.pool, door_id, &input).await?;

    let payload = DoorDetailsSaved {
        door_id,
        fields: detail_fields(Some(&detail)),
    };
    state
        .event_bus
        .publish(DashboardEvent::DoorDetailsSaved(payload.clone()));

    Ok(Json(serde_json::to_value(&payload)?))
}

fn upsert_fields(input: &UpsertDoorDetail) -> DetailFields {
    DetailFields {
        run_number: input.run_number.clone(),
        loader: input.loader.clone(),
        trailer: input.trailer.clone(),
        trailer_temp1: input.trailer_temp1.clone(),
        trailer_temp2: input.trailer_temp2.clone(),
        stores: input.stores.clone(),
        notes: input.notes.clone(),
    }
}

/// GET /api/status_counts
///
/// Counts doors per status string. Keys are whatever statuses are
/// stored right now, not the canonical four.
pub async fn status_counts(
    State(state): State<AppState>,
) -> AppResult<Json<HashMap<String, i64>>> {
    let counts = DoorRepo::status_counts(&state.pool).await?;
    Ok(Json(counts))
}

/// POST /api/reset_all
///
/// Reset every door's status to Empty. Broadcasts one `status_updated`
/// per door, without detail fields (details are untouched by a reset).
pub async fn reset_all(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let doors = DoorRepo::reset_all(&state.pool).await?;

    for door in &doors {
        state
            .event_bus
            .publish(DashboardEvent::status_only(door.id, door.status.clone()));
    }

    Ok(Json(json!({ "reset": true, "count": doors.len() })))
}

/// POST /api/clear_all_data
///
/// Delete every detail row and reset every status to Empty, atomically.
/// Broadcasts one `status_updated` per door with detail fields
/// explicitly nulled so clients wipe their display.
pub async fn clear_all_data(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let doors = DoorRepo::clear_all_data(&state.pool).await?;

    for door in &doors {
        state.event_bus.publish(DashboardEvent::status_with_detail(
            door.id,
            door.status.clone(),
            DetailFields::default(),
        ));
    }

    Ok(Json(json!({ "cleared": true, "count": doors.len() })))
}

/// Apply a status change and broadcast the result.
///
/// Shared by the WebSocket `update_status` path. The status string is
/// stored as-is (no validation against the conventional set). Unknown
/// door ids are silent no-ops: nothing is written, nothing broadcast.
/// The broadcast carries a denormalized snapshot of the door's current
/// detail fields, nulls included, so clients render in one pass.
pub async fn apply_status(state: &AppState, door_id: DbId, status: &str) -> AppResult<()> {
    let Some(door) = DoorRepo::set_status(&state.pool, door_id, status).await? else {
        tracing::debug!(door_id, "Ignoring status update for unknown door");
        return Ok(());
    };

    let detail = DoorDetailRepo::find_by_door(&state.pool, door.id).await?;
    state.event_bus.publish(DashboardEvent::status_with_detail(
        door.id,
        door.status,
        detail_fields(detail.as_ref()),
    ));

    Ok(())
}
