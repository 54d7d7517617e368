//! Application of raw scraped fields to entity records.
//!
//! The fetch layer hands over raw field values — labeled page lines, company
//! row triples, nested JSON payloads — and these functions fold them into
//! the canonical records. Malformed sub-records are skipped individually;
//! nothing here aborts a page.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::identity::derive_username;
use crate::link::{parse_company_link, CompanyCategory};
use crate::release_date::parse_release_date;
use crate::types::{CompanyMap, Game, Like, Review, User};

const TITLE_LABEL: &str = "Title:";
const GENRE_LABEL: &str = "Genre:";
const RELEASE_DATE_LABEL: &str = "Release Date:";

/// Fold one labeled info line into a game record.
///
/// Unlabeled lines are ignored. An unparsable release date leaves the 0
/// default in place; ingestion filters such rows later.
pub fn apply_info_line(game: &mut Game, line: &str) {
    if let Some(rest) = line.strip_prefix(TITLE_LABEL) {
        game.set_title(rest.trim());
    } else if let Some(rest) = line.strip_prefix(GENRE_LABEL) {
        for genre in rest.split(',') {
            let genre = genre.trim();
            if !genre.is_empty() {
                game.add_genre(genre);
            }
        }
    } else if let Some(rest) = line.strip_prefix(RELEASE_DATE_LABEL) {
        if let Ok(epoch) = parse_release_date(rest.trim()) {
            game.set_release_epoch(epoch);
        }
    }
}

/// Fold one company row (label, display name, link) into a game record and
/// the company collection.
///
/// Returns `true` when a company was recorded. Rows with an unknown label or
/// an unparsable link are skipped.
pub fn apply_company_row(
    game: &mut Game,
    companies: &mut CompanyMap,
    label: &str,
    name: &str,
    link: &str,
) -> bool {
    let Some(category) = CompanyCategory::from_label(label) else {
        return false;
    };
    let Ok(company_id) = parse_company_link(link, category) else {
        return false;
    };

    match category {
        CompanyCategory::Developer => game.add_dev_company(&company_id),
        CompanyCategory::Publisher => game.add_pub_company(&company_id),
    }
    companies.record(&company_id, name.trim());
    true
}

// ── Review payloads ─────────────────────────────────────────────────────────

/// Entities extracted from one reviews API payload.
#[derive(Debug, Default)]
pub struct ReviewPage {
    pub reviews: Vec<Review>,
    /// One like per voted-up review.
    pub likes: Vec<Like>,
    /// Raw ids of every review author, for the user-extraction pass.
    pub user_ids: BTreeSet<i64>,
}

/// Walk a reviews API payload for one game.
///
/// Returns `None` when the payload reports failure. Entries with missing or
/// malformed fields are dropped one by one.
pub fn extract_review_page(game_id: i64, payload: &Value) -> Option<ReviewPage> {
    if payload.get("success").and_then(Value::as_i64) != Some(1) {
        return None;
    }
    let entries = payload.get("reviews")?.as_array()?;

    let mut page = ReviewPage::default();
    for entry in entries {
        let Some(review_id) = int_field(entry.get("recommendationid")) else {
            continue;
        };
        let Some(user_id) = int_field(entry.get("author").and_then(|a| a.get("steamid"))) else {
            continue;
        };
        let Some(time) = entry.get("timestamp_updated").and_then(Value::as_i64) else {
            continue;
        };

        page.reviews.push(Review::new(user_id, game_id, review_id, time));
        page.user_ids.insert(user_id);

        if entry.get("voted_up").and_then(Value::as_bool).unwrap_or(false) {
            page.likes.push(Like::new(user_id, game_id));
        }
    }
    Some(page)
}

/// Build a user record from a player-summary payload.
///
/// Returns `None` when the payload carries no player.
pub fn user_from_summary(raw_user_id: i64, payload: &Value) -> Option<User> {
    let player = payload.get("response")?.get("players")?.get(0)?;
    let profile_name = player.get("personaname")?.as_str()?;
    let profile_url = player.get("profileurl")?.as_str()?;

    let username = derive_username(profile_name, profile_url);
    Some(User::new(raw_user_id, &username, profile_name))
}

/// The API serializes some numeric ids as strings; accept both.
fn int_field(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
