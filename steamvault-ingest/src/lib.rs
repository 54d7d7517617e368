//! Projects serialized entity collections into the relational store.
//!
//! This crate owns the ingestion ETL: row validation, per-row
//! constraint-conflict handling, user-id narrowing at every persistence
//! site, and the developer/publisher relation merge.

pub mod ingest;
pub mod merge;

pub use ingest::{
    ingest_companies, ingest_game_genres, ingest_games, ingest_likes, ingest_relations,
    ingest_reviews, ingest_table, ingest_users, IngestError, IngestStats, Table,
};
pub use merge::merge_game_relations;
