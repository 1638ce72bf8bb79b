// SQLite database setup and migrations for the favourites store
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

const DB_FILE: &str = "flathunt.db";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("favourites store is unavailable")]
    ConnectionUnavailable,
    #[error("home {id} is already a favourite")]
    AlreadyFavourite { id: i64 },
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to locate the app data directory")]
    NoAppDataDir,
}

pub type StoreResult<T> = Result<T, StoreError>;

// Thread-safe database connection wrapper
pub struct DbConnection {
    conn: Arc<Mutex<Connection>>,
}

impl DbConnection {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap()
    }
}

impl Clone for DbConnection {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}

/// Process-wide handle to the favourites database.
///
/// Constructed once during app setup and shared for the lifetime of the
/// process. When the database fails to open the handle degrades instead of
/// crashing: reads see an empty store, writes fail with
/// [`StoreError::ConnectionUnavailable`].
pub struct FavouritesDb {
    conn: Option<DbConnection>,
}

impl FavouritesDb {
    pub fn new(conn: DbConnection) -> Self {
        Self { conn: Some(conn) }
    }

    /// Degraded handle for when the store could not be opened.
    pub fn unavailable() -> Self {
        Self { conn: None }
    }

    pub fn is_ready(&self) -> bool {
        self.conn.is_some()
    }

    pub(crate) fn connection(&self) -> StoreResult<&DbConnection> {
        self.conn.as_ref().ok_or(StoreError::ConnectionUnavailable)
    }
}

/// Get the app data directory for Flathunt
pub fn app_data_dir() -> StoreResult<PathBuf> {
    let data_dir = dirs::data_dir().ok_or(StoreError::NoAppDataDir)?;
    let flathunt_dir = data_dir.join("com.flathunt.app");
    fs::create_dir_all(&flathunt_dir)?;
    Ok(flathunt_dir)
}

/// Initialize the database at the app data directory
pub fn init_db() -> StoreResult<FavouritesDb> {
    let db_path = app_data_dir()?.join(DB_FILE);
    open_at(&db_path)
}

/// Open (or create) the favourites database at an explicit path
pub fn open_at(path: &Path) -> StoreResult<FavouritesDb> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(path)?;
    run_migrations(&conn)?;

    Ok(FavouritesDb::new(DbConnection::new(conn)))
}

pub(crate) fn run_migrations(conn: &Connection) -> StoreResult<()> {
    // Create migrations table if it doesn't exist
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    // Get current version
    let current_version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    // Apply migrations
    if current_version < 1 {
        migration_v1(conn)?;
        conn.execute("INSERT INTO schema_migrations (version) VALUES (?1)", [1])?;
    }

    Ok(())
}

// The only place schema is defined. The record payload is stored as opaque
// JSON; the store knows nothing about it beyond the id.
fn migration_v1(conn: &Connection) -> StoreResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS favourite_homes (
            id INTEGER PRIMARY KEY,
            data TEXT NOT NULL,
            saved_at TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_favourite_homes_id ON favourite_homes(id)",
        [],
    )?;

    Ok(())
}
