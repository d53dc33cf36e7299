use mapmark_core::db::migrations::{apply_schema_version, latest_version};
use mapmark_core::db::{open_db, open_db_in_memory, DbError};
use mapmark_core::{Marker, MarkerRepository, SqliteMarkerRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_marker_table() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "Mapa");
    assert_eq!(
        column_names(&conn),
        vec!["Id", "Ubicacion", "Latitud", "Longitud", "Descripcion"]
    );
}

#[test]
fn reopening_same_file_keeps_markers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mapa.db");

    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteMarkerRepository::try_new(&conn).unwrap();
        repo.insert_marker(&Marker::new("vitoria", 42.849998, -2.683333, "Capital del País Vasco"))
            .unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let repo = SqliteMarkerRepository::try_new(&conn).unwrap();
    let markers = repo.list_markers().unwrap();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].title, "vitoria");
}

#[test]
fn schema_upgrade_drops_all_markers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mapa.db");

    let mut conn = open_db(&path).unwrap();
    {
        let repo = SqliteMarkerRepository::try_new(&conn).unwrap();
        mapmark_core::seed_defaults(&repo).unwrap();
        assert_eq!(repo.list_markers().unwrap().len(), 10);
    }

    apply_schema_version(&mut conn, latest_version() + 1).unwrap();

    let repo = SqliteMarkerRepository::try_new(&conn).unwrap();
    assert!(repo.list_markers().unwrap().is_empty());
    assert_eq!(schema_version(&conn), latest_version() + 1);
}

#[test]
fn ids_restart_after_destructive_upgrade() {
    let mut conn = open_db_in_memory().unwrap();
    {
        let repo = SqliteMarkerRepository::try_new(&conn).unwrap();
        repo.insert_marker(&Marker::new("a", 0.0, 0.0, "x")).unwrap();
        repo.insert_marker(&Marker::new("b", 0.0, 0.0, "y")).unwrap();
    }

    apply_schema_version(&mut conn, latest_version() + 1).unwrap();

    let repo = SqliteMarkerRepository::try_new(&conn).unwrap();
    let id = repo.insert_marker(&Marker::new("c", 0.0, 0.0, "z")).unwrap();
    assert_eq!(id, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn opening_unreadable_path_returns_sqlite_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-parent").join("mapa.db");

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::Sqlite(_)));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn column_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn.prepare("PRAGMA table_info(Mapa);").unwrap();
    stmt.query_map([], |row| row.get::<_, String>("name"))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
