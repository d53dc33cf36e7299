//! Marker repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert/list/find APIs over the `Mapa` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every write runs inside one transaction and is all-or-nothing.
//! - Caller-supplied ids are ignored; SQLite assigns them (AUTOINCREMENT, so
//!   ids are never reused).
//! - Read paths reject invalid persisted state instead of masking it.
//! - NaN coordinates are rejected before binding; infinities are stored as given.

use crate::db::migrations::{current_user_version, latest_version, MARKER_TABLE};
use crate::db::DbError;
use crate::model::marker::{Marker, MarkerId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MARKER_SELECT_SQL: &str = "SELECT
    Id,
    Ubicacion,
    Latitud,
    Longitud,
    Descripcion
FROM Mapa";

const MARKER_INSERT_SQL: &str = "INSERT INTO Mapa (
    Ubicacion,
    Latitud,
    Longitud,
    Descripcion
) VALUES (?1, ?2, ?3, ?4);";

const REQUIRED_MARKER_COLUMNS: &[&str] = &["Id", "Ubicacion", "Latitud", "Longitud", "Descripcion"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for marker persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted marker data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema is not initialized (user_version {actual_version}, expected {expected_version})"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_)
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for marker storage.
pub trait MarkerRepository {
    /// Persists one marker and returns its newly assigned id.
    fn insert_marker(&self, marker: &Marker) -> RepoResult<MarkerId>;
    /// Persists all markers in one transaction; ids are returned in input order.
    fn insert_markers(&self, markers: &[Marker]) -> RepoResult<Vec<MarkerId>>;
    /// Returns every stored marker ordered by id.
    fn list_markers(&self) -> RepoResult<Vec<Marker>>;
    /// Returns the first marker whose title matches exactly.
    fn find_by_title(&self, title: &str) -> RepoResult<Option<Marker>>;
    fn count_markers(&self) -> RepoResult<u64>;
}

impl<R: MarkerRepository + ?Sized> MarkerRepository for &R {
    fn insert_marker(&self, marker: &Marker) -> RepoResult<MarkerId> {
        (**self).insert_marker(marker)
    }

    fn insert_markers(&self, markers: &[Marker]) -> RepoResult<Vec<MarkerId>> {
        (**self).insert_markers(markers)
    }

    fn list_markers(&self) -> RepoResult<Vec<Marker>> {
        (**self).list_markers()
    }

    fn find_by_title(&self, title: &str) -> RepoResult<Option<Marker>> {
        (**self).find_by_title(title)
    }

    fn count_markers(&self) -> RepoResult<u64> {
        (**self).count_markers()
    }
}

/// SQLite-backed marker repository.
#[derive(Debug)]
pub struct SqliteMarkerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMarkerRepository<'conn> {
    /// Constructs a repository from a connection with the marker schema applied.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `user_version` is still 0.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the table shape
    ///   does not match.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl MarkerRepository for SqliteMarkerRepository<'_> {
    fn insert_marker(&self, marker: &Marker) -> RepoResult<MarkerId> {
        let tx = self.conn.unchecked_transaction()?;
        let id = insert_row(&tx, marker)?;
        tx.commit()?;
        Ok(id)
    }

    fn insert_markers(&self, markers: &[Marker]) -> RepoResult<Vec<MarkerId>> {
        let tx = self.conn.unchecked_transaction()?;
        let mut ids = Vec::with_capacity(markers.len());
        for marker in markers {
            ids.push(insert_row(&tx, marker)?);
        }
        tx.commit()?;
        Ok(ids)
    }

    fn list_markers(&self) -> RepoResult<Vec<Marker>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MARKER_SELECT_SQL} ORDER BY Id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut markers = Vec::new();

        while let Some(row) = rows.next()? {
            markers.push(parse_marker_row(row)?);
        }

        Ok(markers)
    }

    fn find_by_title(&self, title: &str) -> RepoResult<Option<Marker>> {
        let mut stmt = self.conn.prepare(&format!(
            "{MARKER_SELECT_SQL}
             WHERE Ubicacion = ?1
             ORDER BY Id ASC
             LIMIT 1;"
        ))?;

        let mut rows = stmt.query([title])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_marker_row(row)?));
        }

        Ok(None)
    }

    fn count_markers(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Mapa;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative marker count `{count}`")))
    }
}

fn insert_row(conn: &Connection, marker: &Marker) -> RepoResult<MarkerId> {
    ensure_storable_coordinates(marker)?;
    conn.execute(
        MARKER_INSERT_SQL,
        params![
            marker.title.as_str(),
            marker.latitude,
            marker.longitude,
            marker.description.as_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// SQLite stores NaN as NULL, so it could never be read back as a coordinate.
fn ensure_storable_coordinates(marker: &Marker) -> RepoResult<()> {
    for (column, value) in [("Latitud", marker.latitude), ("Longitud", marker.longitude)] {
        if value.is_nan() {
            return Err(RepoError::InvalidData(format!(
                "NaN is not a storable value for Mapa.{column}"
            )));
        }
    }
    Ok(())
}

fn parse_marker_row(row: &Row<'_>) -> RepoResult<Marker> {
    let id: MarkerId = row.get("Id")?;
    if id <= 0 {
        return Err(RepoError::InvalidData(format!(
            "invalid marker id `{id}` in Mapa.Id"
        )));
    }

    Ok(Marker {
        id,
        title: row.get("Ubicacion")?,
        latitude: row.get("Latitud")?,
        longitude: row.get("Longitud")?,
        description: row.get("Descripcion")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let actual_version = current_user_version(conn)?;
    if actual_version == 0 {
        return Err(RepoError::UninitializedConnection {
            expected_version: latest_version(),
            actual_version,
        });
    }

    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [MARKER_TABLE],
        |row| row.get(0),
    )?;
    if !table_exists {
        return Err(RepoError::MissingRequiredTable(MARKER_TABLE));
    }

    let mut stmt = conn.prepare("PRAGMA table_info(Mapa);")?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>("name"))?
        .collect::<Result<Vec<_>, _>>()?;
    for &required in REQUIRED_MARKER_COLUMNS {
        if !columns.iter().any(|column| column.as_str() == required) {
            return Err(RepoError::MissingRequiredColumn {
                table: MARKER_TABLE,
                column: required,
            });
        }
    }

    Ok(())
}
