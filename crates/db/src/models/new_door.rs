//! New-door queue model.

use serde::Serialize;
use sqlx::FromRow;

use dockboard_core::types::{DbId, Timestamp};

/// A row from the `new_doors` table: an ad-hoc announcement of an
/// incoming door/trailer pairing.
///
/// `door_number` is a free-text label with no referential link to the
/// `doors` table. Entries are created and removed, never updated.
///
/// `created_at` drives queue ordering but is not part of the API
/// payload, so it is excluded from serialization.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct NewDoorEntry {
    pub id: DbId,
    pub door_number: String,
    pub trailer_number: String,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
}
