//! JSON I/O for the serialized entity collections.
//!
//! Extraction writes one file per collection; ingestion reads them back.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::types::{CompanyMap, Game, Like, Review, User};

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Serde {
        path: String,
        source: serde_json::Error,
    },
}

pub fn load_games(path: &Path) -> Result<Vec<Game>, JsonError> {
    load(path)
}

pub fn load_companies(path: &Path) -> Result<CompanyMap, JsonError> {
    load(path)
}

pub fn load_users(path: &Path) -> Result<Vec<User>, JsonError> {
    load(path)
}

pub fn load_reviews(path: &Path) -> Result<Vec<Review>, JsonError> {
    load(path)
}

pub fn load_likes(path: &Path) -> Result<Vec<Like>, JsonError> {
    load(path)
}

pub fn save_games(path: &Path, games: &[Game]) -> Result<(), JsonError> {
    save(path, &games)
}

pub fn save_companies(path: &Path, companies: &CompanyMap) -> Result<(), JsonError> {
    save(path, companies)
}

pub fn save_users(path: &Path, users: &[User]) -> Result<(), JsonError> {
    save(path, &users)
}

pub fn save_reviews(path: &Path, reviews: &[Review]) -> Result<(), JsonError> {
    save(path, &reviews)
}

pub fn save_likes(path: &Path, likes: &[Like]) -> Result<(), JsonError> {
    save(path, &likes)
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T, JsonError> {
    let contents = std::fs::read_to_string(path).map_err(|e| JsonError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&contents).map_err(|e| JsonError::Serde {
        path: path.display().to_string(),
        source: e,
    })
}

fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), JsonError> {
    let contents = serde_json::to_string(value).map_err(|e| JsonError::Serde {
        path: path.display().to_string(),
        source: e,
    })?;
    std::fs::write(path, contents).map_err(|e| JsonError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
