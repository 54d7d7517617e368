//! Canonical entity model for scraped game-store data.
//!
//! This crate defines the Game/Company/User/Review/Like records, the field
//! parsers that normalize raw scraped values (company links, release dates,
//! identities), and JSON I/O for the serialized collections handed to the
//! relational ingestor. It has no database dependencies.

pub mod extract;
pub mod identity;
pub mod json;
pub mod link;
pub mod release_date;
pub mod types;

pub use extract::{
    apply_company_row, apply_info_line, extract_review_page, user_from_summary, ReviewPage,
};
pub use identity::{
    derive_username, storage_user_id, CredentialScheme, IdentityError, RotateCipher,
    UsernameCredential, DEFAULT_OFFSET, USER_ID_PREFIX_DIGITS,
};
pub use json::{
    load_companies, load_games, load_likes, load_reviews, load_users, save_companies, save_games,
    save_likes, save_reviews, save_users, JsonError,
};
pub use link::{parse_company_link, CompanyCategory, LinkError};
pub use release_date::{parse_release_date, DateError};
pub use types::{
    CompanyMap, CompanyRole, Game, Like, Review, User, EPOCH_UNKNOWN, UNKNOWN_TITLE,
};
