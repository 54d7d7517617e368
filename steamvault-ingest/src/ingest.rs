//! Per-table batch ingestion.
//!
//! Each `ingest_*` function validates rows, attempts key-checked inserts,
//! and runs inside one transaction committed at the end of the batch. A
//! constraint violation on a single row is logged and skipped — re-runs
//! against a populated store are expected — while any other database error
//! aborts the run.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use rusqlite::Connection;
use steamvault_db::operations::{self, OperationError};
use steamvault_model::identity::{storage_user_id, CredentialScheme};
use steamvault_model::json::{self, JsonError};
use steamvault_model::types::{CompanyMap, Game, Like, Review, User, EPOCH_UNKNOWN};
use thiserror::Error;

use crate::merge;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Input error: {0}")]
    Input(#[from] JsonError),
    #[error("Unknown table '{0}' (supported: games, game_genres, companies, develop_publish, users, likes, reviews)")]
    UnknownTable(String),
}

/// Counters for a single ingestion batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestStats {
    /// Rows examined.
    pub total: u64,
    /// Rows inserted.
    pub inserted: u64,
    /// Dev relations upgraded to `both` by the publisher pass.
    pub merged_roles: u64,
    /// Rows skipped on a uniqueness or foreign-key conflict.
    pub skipped_conflict: u64,
    /// Rows that failed validation before touching the database.
    pub skipped_invalid: u64,
}

// ── Table dispatch ──────────────────────────────────────────────────────────

/// The tables a serialized collection can be projected into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Games,
    GameGenres,
    Companies,
    DevelopPublish,
    Users,
    Likes,
    Reviews,
}

impl Table {
    pub const ALL: [Table; 7] = [
        Table::Games,
        Table::GameGenres,
        Table::Companies,
        Table::DevelopPublish,
        Table::Users,
        Table::Likes,
        Table::Reviews,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Games => "games",
            Self::GameGenres => "game_genres",
            Self::Companies => "companies",
            Self::DevelopPublish => "develop_publish",
            Self::Users => "users",
            Self::Likes => "likes",
            Self::Reviews => "reviews",
        }
    }
}

impl FromStr for Table {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| IngestError::UnknownTable(s.to_string()))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load the collection file backing `table` and ingest it.
///
/// The games collection backs three tables (games, game_genres,
/// develop_publish), matching the one-table-per-invocation contract of the
/// extraction pipeline.
pub fn ingest_table(
    conn: &Connection,
    table: Table,
    input: &Path,
    scheme: &dyn CredentialScheme,
) -> Result<IngestStats, IngestError> {
    match table {
        Table::Games => ingest_games(conn, &json::load_games(input)?),
        Table::GameGenres => ingest_game_genres(conn, &json::load_games(input)?),
        Table::Companies => ingest_companies(conn, &json::load_companies(input)?),
        Table::DevelopPublish => ingest_relations(conn, &json::load_games(input)?),
        Table::Users => ingest_users(conn, &json::load_users(input)?, scheme),
        Table::Likes => ingest_likes(conn, &json::load_likes(input)?),
        Table::Reviews => ingest_reviews(conn, &json::load_reviews(input)?),
    }
}

// ── Per-table ingestion ─────────────────────────────────────────────────────

pub fn ingest_games(conn: &Connection, games: &[Game]) -> Result<IngestStats, IngestError> {
    let tx = conn.unchecked_transaction()?;
    let mut stats = IngestStats::default();

    for game in games {
        stats.total += 1;
        if game.game_id <= 0 || game.title.is_empty() || game.date == EPOCH_UNKNOWN {
            stats.skipped_invalid += 1;
            continue;
        }
        try_row(
            operations::insert_game(&tx, game.game_id, &game.title, game.date),
            &mut stats,
            || format!("game {}", game.game_id),
        )?;
    }

    tx.commit()?;
    Ok(stats)
}

pub fn ingest_game_genres(conn: &Connection, games: &[Game]) -> Result<IngestStats, IngestError> {
    let tx = conn.unchecked_transaction()?;
    let mut stats = IngestStats::default();

    for game in games {
        if game.game_id <= 0 || game.genres.is_empty() {
            stats.skipped_invalid += 1;
            continue;
        }
        for genre in &game.genres {
            stats.total += 1;
            try_row(
                operations::insert_game_genre(&tx, game.game_id, genre),
                &mut stats,
                || format!("genre '{}' of game {}", genre, game.game_id),
            )?;
        }
    }

    tx.commit()?;
    Ok(stats)
}

pub fn ingest_companies(
    conn: &Connection,
    companies: &CompanyMap,
) -> Result<IngestStats, IngestError> {
    let tx = conn.unchecked_transaction()?;
    let mut stats = IngestStats::default();

    for (company_id, name) in companies.iter() {
        stats.total += 1;
        // Collections from foreign tools may carry mixed-case ids; the
        // canonical slug is lowercase.
        let cid = company_id.to_lowercase();
        try_row(
            operations::insert_company(&tx, &cid, name),
            &mut stats,
            || format!("company '{cid}'"),
        )?;
    }

    tx.commit()?;
    Ok(stats)
}

/// Project each game's developer/publisher sets into `develop_publish`.
///
/// See [`merge::merge_game_relations`] for the tri-state role resolution.
pub fn ingest_relations(conn: &Connection, games: &[Game]) -> Result<IngestStats, IngestError> {
    let tx = conn.unchecked_transaction()?;
    let mut stats = IngestStats::default();

    for game in games {
        if game.game_id <= 0 {
            stats.skipped_invalid += 1;
            continue;
        }
        merge::merge_game_relations(&tx, game, &mut stats)?;
    }

    tx.commit()?;
    Ok(stats)
}

pub fn ingest_users(
    conn: &Connection,
    users: &[User],
    scheme: &dyn CredentialScheme,
) -> Result<IngestStats, IngestError> {
    let tx = conn.unchecked_transaction()?;
    let mut stats = IngestStats::default();

    for user in users {
        stats.total += 1;
        let uid = match storage_user_id(user.user_id) {
            Ok(id) if id > 0 => id,
            _ => {
                stats.skipped_invalid += 1;
                continue;
            }
        };
        if user.username.is_empty() || user.profile_name.is_empty() {
            stats.skipped_invalid += 1;
            continue;
        }

        let password = scheme.initial_credential(&user.username);
        try_row(
            operations::insert_user(&tx, uid, &user.username, &user.profile_name, &password),
            &mut stats,
            || format!("user {uid}"),
        )?;
    }

    tx.commit()?;
    Ok(stats)
}

pub fn ingest_likes(conn: &Connection, likes: &[Like]) -> Result<IngestStats, IngestError> {
    let tx = conn.unchecked_transaction()?;
    let mut stats = IngestStats::default();

    for like in likes {
        stats.total += 1;
        let uid = match storage_user_id(like.user_id) {
            Ok(id) if id > 0 => id,
            _ => {
                stats.skipped_invalid += 1;
                continue;
            }
        };
        if like.game_id <= 0 {
            stats.skipped_invalid += 1;
            continue;
        }
        try_row(
            operations::insert_like(&tx, uid, like.game_id),
            &mut stats,
            || format!("like ({}, {})", uid, like.game_id),
        )?;
    }

    tx.commit()?;
    Ok(stats)
}

pub fn ingest_reviews(conn: &Connection, reviews: &[Review]) -> Result<IngestStats, IngestError> {
    let tx = conn.unchecked_transaction()?;
    let mut stats = IngestStats::default();

    for review in reviews {
        stats.total += 1;
        let uid = match storage_user_id(review.user_id) {
            Ok(id) if id > 0 => id,
            _ => {
                stats.skipped_invalid += 1;
                continue;
            }
        };
        if review.game_id <= 0 || review.review_id <= 0 || review.time == 0 {
            stats.skipped_invalid += 1;
            continue;
        }
        try_row(
            operations::insert_review(&tx, uid, review.game_id, review.review_id, review.time),
            &mut stats,
            || format!("review {} of game {}", review.review_id, review.game_id),
        )?;
    }

    tx.commit()?;
    Ok(stats)
}

// ── Row-level conflict handling ─────────────────────────────────────────────

/// Count an insert outcome: conflicts are logged and skipped, anything else
/// propagates and aborts the batch.
pub(crate) fn try_row(
    result: Result<(), OperationError>,
    stats: &mut IngestStats,
    describe: impl FnOnce() -> String,
) -> Result<(), IngestError> {
    match result {
        Ok(()) => {
            stats.inserted += 1;
            Ok(())
        }
        Err(e) if operations::is_constraint_violation(&e) => {
            log::warn!("Skipping {}: {}", describe(), e);
            stats.skipped_conflict += 1;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
