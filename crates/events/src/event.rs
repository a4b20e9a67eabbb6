//! The dashboard event catalog.
//!
//! Every state change on the door store or the new-door queue is
//! mirrored to connected clients as one of these events. The wire
//! format is a JSON object `{"event": <name>, "data": <payload>}`;
//! serialization of this enum produces exactly that envelope.
//!
//! Payload shapes are load-bearing and asymmetric on purpose:
//!
//! - `status_updated` from a reset carries only `door_id` and `status`
//!   (detail keys are omitted entirely);
//! - `status_updated` from a single status change or from
//!   `clear_all_data` carries the detail fields, with explicit `null`s
//!   when no detail exists;
//! - `new_door_removed` carries only the id.

use serde::{Deserialize, Serialize};

use dockboard_core::types::DbId;

/// A state-change event, fanned out to all connected clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum DashboardEvent {
    StatusUpdated(StatusUpdated),
    DoorDetailsSaved(DoorDetailsSaved),
    NewDoorAdded(NewDoorAdded),
    NewDoorRemoved(NewDoorRemoved),
}

/// The optional run-detail fields, denormalized into status events and
/// carried whole by `door_details_saved`.
///
/// Fields serialize as explicit `null` when absent -- clients rely on
/// nulls to clear their display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailFields {
    pub run_number: Option<String>,
    pub loader: Option<String>,
    pub trailer: Option<String>,
    pub trailer_temp1: Option<String>,
    pub trailer_temp2: Option<String>,
    pub stores: Option<String>,
    pub notes: Option<String>,
}

/// Payload for `status_updated`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdated {
    pub door_id: DbId,
    pub status: String,
    /// `None` omits the detail keys entirely (reset path);
    /// `Some` flattens them into the payload, nulls included.
    #[serde(flatten)]
    pub detail: Option<DetailFields>,
}

/// Payload for `door_details_saved`: the full replacement the client
/// just submitted, echoed to everyone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorDetailsSaved {
    pub door_id: DbId,
    #[serde(flatten)]
    pub fields: DetailFields,
}

/// Payload for `new_door_added`: the complete queue entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDoorAdded {
    pub id: DbId,
    pub door_number: String,
    pub trailer_number: String,
}

/// Payload for `new_door_removed`: only the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDoorRemoved {
    pub id: DbId,
}

impl DashboardEvent {
    /// `status_updated` without detail fields (reset_all path).
    pub fn status_only(door_id: DbId, status: impl Into<String>) -> Self {
        Self::StatusUpdated(StatusUpdated {
            door_id,
            status: status.into(),
            detail: None,
        })
    }

    /// `status_updated` with a denormalized detail snapshot. Pass
    /// `DetailFields::default()` to emit explicit nulls.
    pub fn status_with_detail(
        door_id: DbId,
        status: impl Into<String>,
        detail: DetailFields,
    ) -> Self {
        Self::StatusUpdated(StatusUpdated {
            door_id,
            status: status.into(),
            detail: Some(detail),
        })
    }
}
