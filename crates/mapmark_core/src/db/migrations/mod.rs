//! Marker table schema and version policy.
//!
//! # Responsibility
//! - Create the `Mapa` table on a fresh database.
//! - Recreate the table when the stored version is older than the binary's.
//!
//! # Invariants
//! - Upgrades are destructive: every existing marker row is dropped.
//! - A stored version newer than the binary's is rejected, never rewritten.
//! - The applied version is mirrored to `PRAGMA user_version` in the same
//!   transaction as the table change.

use crate::db::{DbError, DbResult};
use log::{info, warn};
use rusqlite::Connection;

/// Name of the single marker table.
pub const MARKER_TABLE: &str = "Mapa";

const SCHEMA_VERSION: u32 = 1;
const CREATE_MARKERS_SQL: &str = include_str!("0001_markers.sql");
const DROP_MARKERS_SQL: &str = "DROP TABLE IF EXISTS Mapa;";

/// Returns the schema version known by this binary.
pub fn latest_version() -> u32 {
    SCHEMA_VERSION
}

/// Brings the connection's schema to [`latest_version`].
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    apply_schema_version(conn, latest_version())
}

/// Brings the connection's schema to `target_version`.
///
/// A fresh database (`user_version = 0`) gets the table created. An older
/// version is migrated destructively. Equal versions are a no-op.
///
/// # Errors
/// - `DbError::UnsupportedSchemaVersion` when the stored version is newer.
/// - `DbError::Sqlite` on any storage failure; the transaction is rolled back.
pub fn apply_schema_version(conn: &mut Connection, target_version: u32) -> DbResult<()> {
    let current_version = current_user_version(conn)?;

    if current_version > target_version {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: target_version,
        });
    }

    if current_version == target_version {
        return Ok(());
    }

    let tx = conn.transaction()?;
    if current_version == 0 {
        initialize_schema(&tx)?;
    } else {
        migrate_schema(&tx, current_version, target_version)?;
    }
    tx.execute_batch(&format!("PRAGMA user_version = {target_version};"))?;
    tx.commit()?;

    info!(
        "event=schema_apply module=db status=ok from_version={} to_version={}",
        current_version, target_version
    );
    Ok(())
}

/// Creates the marker table when it does not exist yet.
pub fn initialize_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_MARKERS_SQL)?;
    Ok(())
}

/// Drops and recreates the marker table.
///
/// All rows stored under `old_version` are lost. Callers are expected to run
/// this inside a transaction together with the `user_version` update.
pub fn migrate_schema(conn: &Connection, old_version: u32, new_version: u32) -> DbResult<()> {
    warn!(
        "event=schema_migrate module=db status=start policy=drop_recreate from_version={} to_version={}",
        old_version, new_version
    );
    conn.execute_batch(DROP_MARKERS_SQL)?;
    initialize_schema(conn)
}

/// Reads `PRAGMA user_version` from the connection.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
