//! Door detail model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dockboard_core::types::DbId;

/// A row from the `door_details` table. At most one row exists per door.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DoorDetail {
    pub id: DbId,
    pub door_id: DbId,
    pub run_number: Option<String>,
    pub loader: Option<String>,
    pub trailer: Option<String>,
    pub trailer_temp1: Option<String>,
    pub trailer_temp2: Option<String>,
    pub stores: Option<String>,
    pub notes: Option<String>,
}

/// DTO for saving a door's details.
///
/// Upsert semantics are FULL REPLACE: every column is overwritten from
/// this input, and a field the client omits is written as NULL. This is
/// deliberate last-write-wins behavior, not a partial patch -- do not
/// "fix" it into a merge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertDoorDetail {
    pub run_number: Option<String>,
    pub loader: Option<String>,
    pub trailer: Option<String>,
    pub trailer_temp1: Option<String>,
    pub trailer_temp2: Option<String>,
    pub stores: Option<String>,
    pub notes: Option<String>,
}

/// A door joined with its optional detail row, as consumed by the
/// report generator. Fetched in one query so the report sees a single
/// consistent snapshot.
#[derive(Debug, Clone, FromRow)]
pub struct DoorWithDetail {
    pub id: DbId,
    pub name: String,
    pub status: String,
    pub run_number: Option<String>,
    pub loader: Option<String>,
    pub trailer: Option<String>,
    pub stores: Option<String>,
    pub notes: Option<String>,
}
