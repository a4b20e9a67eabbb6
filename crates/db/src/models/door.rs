//! Door model.

use serde::Serialize;
use sqlx::FromRow;

use dockboard_core::types::DbId;

/// A row from the `doors` table.
///
/// Doors are seeded once at startup and never created or deleted via
/// the API; only `status` is mutable. `status` is free text -- the four
/// conventional values are Empty, Loading, Loaded, and Backhaul, but
/// nothing enforces that set at the storage layer.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Door {
    pub id: DbId,
    pub name: String,
    pub status: String,
}
