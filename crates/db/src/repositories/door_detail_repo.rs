//! Repository for the `door_details` table.

use sqlx::PgPool;

use dockboard_core::types::DbId;

use crate::models::door_detail::{DoorDetail, UpsertDoorDetail};

/// Column list for door_details queries.
const COLUMNS: &str =
    "id, door_id, run_number, loader, trailer, trailer_temp1, trailer_temp2, stores, notes";

/// Provides lookup and upsert operations for door details.
pub struct DoorDetailRepo;

impl DoorDetailRepo {
    /// Find the detail row for a door. Absence is a normal state, not
    /// an error: every door starts without details.
    pub async fn find_by_door(
        pool: &PgPool,
        door_id: DbId,
    ) -> Result<Option<DoorDetail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM door_details WHERE door_id = $1");
        sqlx::query_as::<_, DoorDetail>(&query)
            .bind(door_id)
            .fetch_optional(pool)
            .await
    }

    /// Create or fully replace a door's detail row.
    ///
    /// Every column is set from the input on conflict -- fields the
    /// client omitted arrive as `None` and are written as NULL. The
    /// unique constraint on `door_id` guarantees at most one row per
    /// door.
    pub async fn upsert(
        pool: &PgPool,
        door_id: DbId,
        input: &UpsertDoorDetail,
    ) -> Result<DoorDetail, sqlx::Error> {
        let query = format!(
            "INSERT INTO door_details
                (door_id, run_number, loader, trailer, trailer_temp1, trailer_temp2, stores, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (door_id) DO UPDATE SET
                run_number = EXCLUDED.run_number,
                loader = EXCLUDED.loader,
                trailer = EXCLUDED.trailer,
                trailer_temp1 = EXCLUDED.trailer_temp1,
                trailer_temp2 = EXCLUDED.trailer_temp2,
                stores = EXCLUDED.stores,
                notes = EXCLUDED.notes
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DoorDetail>(&query)
            .bind(door_id)
            .bind(&input.run_number)
            .bind(&input.loader)
            .bind(&input.trailer)
            .bind(&input.trailer_temp1)
            .bind(&input.trailer_temp2)
            .bind(&input.stores)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }
}
