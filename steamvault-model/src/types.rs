//! Entity records for the normalized store.
//!
//! These types are the interchange format between extraction and ingestion:
//! built incrementally from raw page fields, serialized as JSON collections,
//! then projected into the relational schema by `steamvault-ingest`.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identity::RotateCipher;

/// Title placeholder for games whose page never yielded one.
pub const UNKNOWN_TITLE: &str = "UNKNOWN";

/// Release-epoch placeholder for games whose date never parsed.
///
/// Only the serialized Game record uses 0 as "unknown"; the date parser
/// itself reports failures as errors, so a genuine 1970-01-01 epoch is
/// never confused with a missing date at parse time.
pub const EPOCH_UNKNOWN: i64 = 0;

// ── Game ────────────────────────────────────────────────────────────────────

/// A scraped game, accumulated field by field as a source page is walked.
///
/// A partially populated record is still a valid record: construction never
/// drops information, and validity filtering (positive id, non-empty title,
/// known date) happens at ingestion time instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "gameID")]
    pub game_id: i64,
    pub title: String,
    pub date: i64,
    pub genres: BTreeSet<String>,
    #[serde(rename = "devCompanyIDs")]
    pub dev_company_ids: BTreeSet<String>,
    #[serde(rename = "pubCompanyIDs")]
    pub pub_company_ids: BTreeSet<String>,
}

impl Game {
    /// Start a record with the documented defaults.
    pub fn new(game_id: i64) -> Self {
        Self {
            game_id,
            title: UNKNOWN_TITLE.to_string(),
            date: EPOCH_UNKNOWN,
            genres: BTreeSet::new(),
            dev_company_ids: BTreeSet::new(),
            pub_company_ids: BTreeSet::new(),
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_release_epoch(&mut self, epoch: i64) {
        self.date = epoch;
    }

    /// Idempotent, case-insensitive: "RPG" then "rpg" stores one `"rpg"`.
    pub fn add_genre(&mut self, genre: &str) {
        self.genres.insert(genre.to_lowercase());
    }

    pub fn add_dev_company(&mut self, company_id: &str) {
        self.dev_company_ids.insert(company_id.to_lowercase());
    }

    pub fn add_pub_company(&mut self, company_id: &str) {
        self.pub_company_ids.insert(company_id.to_lowercase());
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.game_id, self.title)?;
        writeln!(f, "Release date: {}", self.date)?;
        writeln!(f, "Genres: {:?}", self.genres)?;
        writeln!(f, "DevCompanies: {:?}", self.dev_company_ids)?;
        writeln!(f, "PubCompanies: {:?}", self.pub_company_ids)
    }
}

// ── Company ─────────────────────────────────────────────────────────────────

/// Collection of companies keyed by lowercase canonical id.
///
/// The id is the natural key; on duplicate ids the first-seen display name
/// wins, since later sightings of the same slug are the same company linked
/// from another page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyMap {
    entries: BTreeMap<String, String>,
}

impl CompanyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a company under its lowercase id. Returns `false` when the id
    /// was already present (the existing name is kept).
    pub fn record(&mut self, company_id: &str, name: &str) -> bool {
        let key = company_id.to_lowercase();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, name.to_string());
        true
    }

    pub fn get(&self, company_id: &str) -> Option<&str> {
        self.entries.get(company_id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── User ────────────────────────────────────────────────────────────────────

/// A user profile. `user_id` is the raw source identifier; the 7-digit
/// prefix narrowing is applied by the ingestor at every persistence site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userID")]
    pub user_id: i64,
    /// Login name, stored obfuscated (doubles as the initial credential).
    pub username: String,
    #[serde(rename = "profileName")]
    pub profile_name: String,
}

impl User {
    /// Build a user record, obfuscating the login name with the shared
    /// default offset.
    pub fn new(user_id: i64, username: &str, profile_name: &str) -> Self {
        Self {
            user_id,
            username: RotateCipher::default().encode(username),
            profile_name: profile_name.to_string(),
        }
    }
}

// ── Review ──────────────────────────────────────────────────────────────────

/// A review index entry. `review_id` is a candidate key within a game, not
/// globally unique across games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "gameID")]
    pub game_id: i64,
    #[serde(rename = "userID")]
    pub user_id: i64,
    #[serde(rename = "reviewID")]
    pub review_id: i64,
    /// Last-updated timestamp, Unix epoch seconds.
    pub time: i64,
}

impl Review {
    pub fn new(user_id: i64, game_id: i64, review_id: i64, time: i64) -> Self {
        Self {
            game_id,
            user_id,
            review_id,
            time,
        }
    }
}

// ── Like ────────────────────────────────────────────────────────────────────

/// A user's upvote of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    #[serde(rename = "userID")]
    pub user_id: i64,
    #[serde(rename = "gameID")]
    pub game_id: i64,
}

impl Like {
    pub fn new(user_id: i64, game_id: i64) -> Self {
        Self { user_id, game_id }
    }
}

// ── Company role ────────────────────────────────────────────────────────────

/// Tri-state relationship between a company and a game.
///
/// The role is computed by the relation merge, never set independently:
/// a company seen only among a game's developers is `Dev`, only among its
/// publishers `Pub`, and among both `Both`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyRole {
    Dev,
    Pub,
    Both,
    /// Schema default for rows that predate role computation.
    Unknown,
}

impl Default for CompanyRole {
    fn default() -> Self {
        Self::Unknown
    }
}

impl CompanyRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Pub => "pub",
            Self::Both => "both",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn from_str_loose(s: &str) -> Self {
        match s {
            "dev" => Self::Dev,
            "pub" => Self::Pub,
            "both" => Self::Both,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for CompanyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
