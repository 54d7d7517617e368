//! SQLite persistence layer for the normalized store.
//!
//! Provides schema creation, row-level insert/lookup operations, and read
//! queries backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    insert_company, insert_game, insert_game_genre, insert_like, insert_relation, insert_review,
    insert_user, is_constraint_violation, relation_role, set_relation_role, OperationError,
};
pub use queries::{
    find_game, find_user, genres_for_game, relations_for_game, store_stats, GameRow, StoreStats,
    UserRow,
};
pub use schema::{create_schema, open_database, open_memory, SchemaError};
