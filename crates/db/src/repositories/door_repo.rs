//! Repository for the `doors` table.

use std::collections::HashMap;

use sqlx::PgPool;

use dockboard_core::status::DoorStatus;
use dockboard_core::types::DbId;

use crate::models::door::Door;
use crate::models::door_detail::DoorWithDetail;

/// Column list for doors queries.
const COLUMNS: &str = "id, name, status";

/// Provides read and status-mutation operations for doors.
///
/// Doors have a fixed identity: they are bulk-seeded once and never
/// created or deleted through any repository call except
/// [`DoorRepo::seed_if_empty`].
pub struct DoorRepo;

impl DoorRepo {
    /// List all doors, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Door>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM doors ORDER BY id ASC");
        sqlx::query_as::<_, Door>(&query).fetch_all(pool).await
    }

    /// Find a door by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Door>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM doors WHERE id = $1");
        sqlx::query_as::<_, Door>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all doors with their detail fields (LEFT JOIN), id ascending.
    ///
    /// Used by the report generator; a single query guarantees a
    /// consistent snapshot for the duration of report rendering.
    pub async fn list_with_details(pool: &PgPool) -> Result<Vec<DoorWithDetail>, sqlx::Error> {
        sqlx::query_as::<_, DoorWithDetail>(
            "SELECT d.id, d.name, d.status,
                    dd.run_number, dd.loader, dd.trailer, dd.stores, dd.notes
             FROM doors d
             LEFT JOIN door_details dd ON dd.door_id = d.id
             ORDER BY d.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Seed the doors table on first run.
    ///
    /// If the table already contains rows this is a no-op. Otherwise
    /// inserts `count` doors named `"Run {n}"` for `n` in
    /// `start..start + count`, all with the seed status. Returns the
    /// number of doors inserted.
    pub async fn seed_if_empty(
        pool: &PgPool,
        start: i64,
        count: i64,
    ) -> Result<u64, sqlx::Error> {
        let existing: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM doors")
            .fetch_one(pool)
            .await?;
        if existing.0 > 0 {
            return Ok(0);
        }

        let mut tx = pool.begin().await?;
        for n in start..start + count {
            sqlx::query("INSERT INTO doors (name, status) VALUES ($1, $2)")
                .bind(format!("Run {n}"))
                .bind(DoorStatus::SEED)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        tracing::info!(count, start, "Seeded doors table");
        Ok(count as u64)
    }

    /// Overwrite a door's status unconditionally.
    ///
    /// The status is NOT validated against the conventional set; callers
    /// may store any string. Returns `None` when no door with that id
    /// exists -- the caller treats that as a silent no-op, never as an
    /// error, and no door row is created.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Door>, sqlx::Error> {
        let query = format!("UPDATE doors SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Door>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Reset every door's status to the reset value ("Empty").
    ///
    /// Returns the updated doors, id ascending, so the caller can emit
    /// one status event per door.
    pub async fn reset_all(pool: &PgPool) -> Result<Vec<Door>, sqlx::Error> {
        let query =
            format!("UPDATE doors SET status = $1 RETURNING {COLUMNS}");
        let mut doors = sqlx::query_as::<_, Door>(&query)
            .bind(DoorStatus::RESET)
            .fetch_all(pool)
            .await?;
        doors.sort_by_key(|d| d.id);
        Ok(doors)
    }

    /// Delete every door detail row and reset every status to "Empty",
    /// atomically.
    ///
    /// Runs in a single transaction so readers never observe the
    /// half-done state (details gone but statuses unchanged, or vice
    /// versa). Returns the updated doors, id ascending.
    pub async fn clear_all_data(pool: &PgPool) -> Result<Vec<Door>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM door_details")
            .execute(&mut *tx)
            .await?;

        let query = format!("UPDATE doors SET status = $1 RETURNING {COLUMNS}");
        let mut doors = sqlx::query_as::<_, Door>(&query)
            .bind(DoorStatus::RESET)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        doors.sort_by_key(|d| d.id);
        Ok(doors)
    }

    /// Count doors grouped by status string.
    ///
    /// Keys are whatever statuses are currently stored, not the
    /// canonical four -- ad-hoc values show up as their own buckets.
    pub async fn status_counts(pool: &PgPool) -> Result<HashMap<String, i64>, sqlx::Error> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM doors GROUP BY status")
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().collect())
    }
}
