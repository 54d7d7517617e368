//! SQLite schema creation and versioning.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Store is newer than this build: expected version {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Current schema version. Increment when adding migrations.
pub const CURRENT_VERSION: i32 = 1;

/// Create all tables if they don't exist.
///
/// This is idempotent — safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    set_schema_version(conn, CURRENT_VERSION)?;
    Ok(())
}

/// Open or create a store database at the given path.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

    let version = get_schema_version(&conn)?;
    if version == 0 {
        create_schema(&conn)?;
    } else if version != CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: version,
        });
    }

    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Get the current schema version, or 0 if no schema exists.
fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

/// Record a schema version.
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SchemaError> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS games (
    id INTEGER PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    date INTEGER NOT NULL -- release epoch, seconds
);

-- Genres are stored lowercase
CREATE TABLE IF NOT EXISTS game_genres (
    game_id INTEGER NOT NULL,
    genre TEXT NOT NULL,
    PRIMARY KEY (game_id, genre),
    FOREIGN KEY (game_id) REFERENCES games(id)
);

-- Company id is the lowercase canonical slug
CREATE TABLE IF NOT EXISTS companies (
    cid TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL
);

-- dev(develop) or pub(publish) or both; computed by the relation merge
CREATE TABLE IF NOT EXISTS develop_publish (
    company_id TEXT NOT NULL,
    game_id INTEGER NOT NULL,
    dev_or_pub TEXT NOT NULL DEFAULT 'UNKNOWN',
    PRIMARY KEY (company_id, game_id),
    FOREIGN KEY (company_id) REFERENCES companies(cid),
    FOREIGN KEY (game_id) REFERENCES games(id)
);

CREATE TABLE IF NOT EXISTS users (
    uid INTEGER PRIMARY KEY NOT NULL,
    username TEXT NOT NULL UNIQUE,
    profile_name TEXT NOT NULL,
    privacy INTEGER NOT NULL DEFAULT 0, -- profile is not private by default
    password TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS likes (
    user_id INTEGER NOT NULL,
    game_id INTEGER NOT NULL,
    PRIMARY KEY (user_id, game_id),
    FOREIGN KEY (user_id) REFERENCES users(uid),
    FOREIGN KEY (game_id) REFERENCES games(id)
);

CREATE TABLE IF NOT EXISTS reviews (
    user_id INTEGER NOT NULL,
    game_id INTEGER NOT NULL,
    review_id INTEGER NOT NULL,
    timestamp INTEGER NOT NULL,
    UNIQUE (user_id, game_id), -- a user can have only one review on a game
    PRIMARY KEY (game_id, review_id),
    FOREIGN KEY (user_id) REFERENCES users(uid),
    FOREIGN KEY (game_id) REFERENCES games(id)
);
"#;
