//! Repository for the `new_doors` table.

use sqlx::PgPool;

use dockboard_core::types::DbId;

use crate::models::new_door::NewDoorEntry;

/// Column list for new_doors queries.
const COLUMNS: &str = "id, door_number, trailer_number, created_at";

/// Provides append/remove operations for the new-door queue.
///
/// Entries are never updated in place; the queue only grows at the end
/// and shrinks by explicit removal.
pub struct NewDoorRepo;

impl NewDoorRepo {
    /// List all entries, creation-time ascending (id breaks ties so
    /// ordering stays stable for entries created in the same instant).
    pub async fn list(pool: &PgPool) -> Result<Vec<NewDoorEntry>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM new_doors ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, NewDoorEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert a new entry, returning the created row.
    ///
    /// Callers are responsible for trimming and validating the fields
    /// before insertion.
    pub async fn create(
        pool: &PgPool,
        door_number: &str,
        trailer_number: &str,
    ) -> Result<NewDoorEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO new_doors (door_number, trailer_number)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewDoorEntry>(&query)
            .bind(door_number)
            .bind(trailer_number)
            .fetch_one(pool)
            .await
    }

    /// Delete an entry by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM new_doors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
