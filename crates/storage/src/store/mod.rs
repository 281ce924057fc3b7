#![forbid(unsafe_code)]

mod days;
mod entries;
mod error;
mod lookup;
mod maintenance;
mod requests;
mod support;
mod trips;
mod types;

pub use error::StoreError;
pub use requests::*;
pub use types::*;

use rusqlite::{Connection, OptionalExtension, Transaction, params};
use std::path::{Path, PathBuf};
use std::time::Duration;
use support::*;

pub const DB_FILE_NAME: &str = "tripplanner.db";

#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    storage_dir: Option<PathBuf>,
}

impl SqliteStore {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&storage_dir)?;

        let db_path = storage_dir.join(DB_FILE_NAME);
        let conn = Connection::open(db_path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        migrate_sqlite_schema(&conn)?;
        tracing::debug!(dir = %storage_dir.display(), "trip store opened");

        Ok(Self {
            conn,
            storage_dir: Some(storage_dir),
        })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        migrate_sqlite_schema(&conn)?;
        Ok(Self {
            conn,
            storage_dir: None,
        })
    }

    pub fn storage_dir(&self) -> Option<&Path> {
        self.storage_dir.as_deref()
    }

    pub fn schema_version(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .conn
            .query_row(
                "SELECT value FROM meta WHERE key = ?1",
                params!["schema_version"],
                |row| row.get(0),
            )
            .optional()?)
    }
}

fn trip_exists_tx(tx: &Transaction<'_>, trip_id: &str) -> Result<bool, StoreError> {
    Ok(tx
        .query_row("SELECT 1 FROM trips WHERE id = ?1", params![trip_id], |_| Ok(()))
        .optional()?
        .is_some())
}

fn day_exists_tx(tx: &Transaction<'_>, day_id: &str) -> Result<bool, StoreError> {
    Ok(tx
        .query_row("SELECT 1 FROM days WHERE id = ?1", params![day_id], |_| Ok(()))
        .optional()?
        .is_some())
}

fn day_ids_for_trip_tx(tx: &Transaction<'_>, trip_id: &str) -> Result<Vec<String>, StoreError> {
    let mut stmt = tx.prepare("SELECT id FROM days WHERE trip_id = ?1 ORDER BY day_number ASC, seq ASC")?;
    let rows = stmt.query_map(params![trip_id], |row| row.get::<_, String>(0))?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

fn delete_entries_for_day_tx(tx: &Transaction<'_>, day_id: &str) -> Result<usize, StoreError> {
    Ok(tx.execute("DELETE FROM entries WHERE day_id = ?1", params![day_id])?)
}

/// Removes a day and its entries, entries first.
fn delete_day_cascade_tx(tx: &Transaction<'_>, day_id: &str) -> Result<usize, StoreError> {
    let entries = delete_entries_for_day_tx(tx, day_id)?;
    tx.execute("DELETE FROM days WHERE id = ?1", params![day_id])?;
    Ok(entries)
}
