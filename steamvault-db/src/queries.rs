//! Read queries for the store database.

use rusqlite::{params, Connection};
use steamvault_model::types::CompanyRole;

use crate::operations::OperationError;

/// Per-table row counts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StoreStats {
    pub games: u64,
    pub genres: u64,
    pub companies: u64,
    pub relations: u64,
    pub users: u64,
    pub likes: u64,
    pub reviews: u64,
}

pub fn store_stats(conn: &Connection) -> Result<StoreStats, OperationError> {
    Ok(StoreStats {
        games: count(conn, "games")?,
        genres: count(conn, "game_genres")?,
        companies: count(conn, "companies")?,
        relations: count(conn, "develop_publish")?,
        users: count(conn, "users")?,
        likes: count(conn, "likes")?,
        reviews: count(conn, "reviews")?,
    })
}

fn count(conn: &Connection, table: &str) -> Result<u64, OperationError> {
    // Table names come from the fixed list above, never from input.
    let n: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })?;
    Ok(n as u64)
}

// ── Games ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRow {
    pub id: i64,
    pub title: String,
    pub date: i64,
}

pub fn find_game(conn: &Connection, game_id: i64) -> Result<Option<GameRow>, OperationError> {
    let result = conn.query_row(
        "SELECT id, title, date FROM games WHERE id = ?1",
        params![game_id],
        |row| {
            Ok(GameRow {
                id: row.get(0)?,
                title: row.get(1)?,
                date: row.get(2)?,
            })
        },
    );
    match result {
        Ok(g) => Ok(Some(g)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn genres_for_game(conn: &Connection, game_id: i64) -> Result<Vec<String>, OperationError> {
    let mut stmt =
        conn.prepare("SELECT genre FROM game_genres WHERE game_id = ?1 ORDER BY genre")?;
    let rows = stmt.query_map(params![game_id], |row| row.get(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Company ids and their computed roles for a game.
pub fn relations_for_game(
    conn: &Connection,
    game_id: i64,
) -> Result<Vec<(String, CompanyRole)>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT company_id, dev_or_pub FROM develop_publish
         WHERE game_id = ?1 ORDER BY company_id",
    )?;
    let rows = stmt.query_map(params![game_id], |row| {
        let company: String = row.get(0)?;
        let role: String = row.get(1)?;
        Ok((company, CompanyRole::from_str_loose(&role)))
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Users ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub uid: i64,
    pub username: String,
    pub profile_name: String,
    pub privacy: i64,
    pub password: String,
}

pub fn find_user(conn: &Connection, uid: i64) -> Result<Option<UserRow>, OperationError> {
    let result = conn.query_row(
        "SELECT uid, username, profile_name, privacy, password FROM users WHERE uid = ?1",
        params![uid],
        |row| {
            Ok(UserRow {
                uid: row.get(0)?,
                username: row.get(1)?,
                profile_name: row.get(2)?,
                privacy: row.get(3)?,
                password: row.get(4)?,
            })
        },
    );
    match result {
        Ok(u) => Ok(Some(u)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
