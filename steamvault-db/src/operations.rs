//! Row-level insert and lookup operations for the store tables.
//!
//! Every insert is key-checked by the schema; callers decide whether a
//! constraint violation is fatal (see [`is_constraint_violation`]).

use rusqlite::{params, Connection};
use steamvault_model::types::CompanyRole;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
}

/// True when the error is a uniqueness or foreign-key constraint violation.
pub fn is_constraint_violation(err: &OperationError) -> bool {
    matches!(
        err,
        OperationError::Sqlite(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

// ── Games ───────────────────────────────────────────────────────────────────

pub fn insert_game(
    conn: &Connection,
    game_id: i64,
    title: &str,
    date: i64,
) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO games (id, title, date) VALUES (?1, ?2, ?3)",
        params![game_id, title, date],
    )?;
    Ok(())
}

pub fn insert_game_genre(
    conn: &Connection,
    game_id: i64,
    genre: &str,
) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO game_genres (game_id, genre) VALUES (?1, ?2)",
        params![game_id, genre],
    )?;
    Ok(())
}

// ── Companies ───────────────────────────────────────────────────────────────

/// `company_id` must already be the lowercase canonical slug.
pub fn insert_company(
    conn: &Connection,
    company_id: &str,
    name: &str,
) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO companies (cid, name) VALUES (?1, ?2)",
        params![company_id, name],
    )?;
    Ok(())
}

// ── Develop/publish relations ───────────────────────────────────────────────

pub fn insert_relation(
    conn: &Connection,
    company_id: &str,
    game_id: i64,
    role: CompanyRole,
) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO develop_publish (company_id, game_id, dev_or_pub) VALUES (?1, ?2, ?3)",
        params![company_id, game_id, role.as_str()],
    )?;
    Ok(())
}

/// Look up the recorded role for a (company, game) pair.
pub fn relation_role(
    conn: &Connection,
    company_id: &str,
    game_id: i64,
) -> Result<Option<CompanyRole>, OperationError> {
    let result = conn.query_row(
        "SELECT dev_or_pub FROM develop_publish WHERE company_id = ?1 AND game_id = ?2",
        params![company_id, game_id],
        |row| row.get::<_, String>(0),
    );
    match result {
        Ok(s) => Ok(Some(CompanyRole::from_str_loose(&s))),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn set_relation_role(
    conn: &Connection,
    company_id: &str,
    game_id: i64,
    role: CompanyRole,
) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE develop_publish SET dev_or_pub = ?3 WHERE company_id = ?1 AND game_id = ?2",
        params![company_id, game_id, role.as_str()],
    )?;
    if changed == 0 {
        return Err(OperationError::NotFound {
            entity_type: "relation".to_string(),
            id: format!("{company_id}/{game_id}"),
        });
    }
    Ok(())
}

// ── Users ───────────────────────────────────────────────────────────────────

/// `uid` must already be in storage form (prefix stripped).
pub fn insert_user(
    conn: &Connection,
    uid: i64,
    username: &str,
    profile_name: &str,
    password: &str,
) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO users (uid, username, profile_name, password) VALUES (?1, ?2, ?3, ?4)",
        params![uid, username, profile_name, password],
    )?;
    Ok(())
}

// ── Likes ───────────────────────────────────────────────────────────────────

pub fn insert_like(conn: &Connection, user_id: i64, game_id: i64) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO likes (user_id, game_id) VALUES (?1, ?2)",
        params![user_id, game_id],
    )?;
    Ok(())
}

// ── Reviews ─────────────────────────────────────────────────────────────────

pub fn insert_review(
    conn: &Connection,
    user_id: i64,
    game_id: i64,
    review_id: i64,
    timestamp: i64,
) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO reviews (user_id, game_id, review_id, timestamp) VALUES (?1, ?2, ?3, ?4)",
        params![user_id, game_id, review_id, timestamp],
    )?;
    Ok(())
}
