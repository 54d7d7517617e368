use serde_json::json;
use steamvault_model::extract::{
    apply_company_row, apply_info_line, extract_review_page, user_from_summary,
};
use steamvault_model::types::{CompanyMap, Game};

#[test]
fn info_lines_populate_the_builder() {
    let mut game = Game::new(10);
    apply_info_line(&mut game, "Title: Cities in Motion 2");
    apply_info_line(&mut game, "Genre: Simulation, Strategy");
    apply_info_line(&mut game, "Release Date: 2 Apr, 2013");
    apply_info_line(&mut game, "Languages: English");

    assert_eq!(game.title, "Cities in Motion 2");
    assert!(game.genres.contains("simulation"));
    assert!(game.genres.contains("strategy"));
    // 2013-04-02T00:00:00Z
    assert_eq!(game.date, 1_364_860_800);
}

#[test]
fn unparsable_date_leaves_unknown_sentinel() {
    let mut game = Game::new(10);
    apply_info_line(&mut game, "Release Date: Coming soon");
    assert_eq!(game.date, 0);
}

#[test]
fn company_rows_feed_sets_and_company_map() {
    let mut game = Game::new(10);
    let mut companies = CompanyMap::new();

    assert!(apply_company_row(
        &mut game,
        &mut companies,
        "Developer:",
        "Giants Software",
        "https://store.steampowered.com/developer/GiantsSoftware?snr=1_5_9__408",
    ));
    assert!(apply_company_row(
        &mut game,
        &mut companies,
        "Publisher:",
        "Focus Home",
        "https://store.steampowered.com/search/?publisher=Focus%20Home&snr=1",
    ));

    assert!(game.dev_company_ids.contains("giantssoftware"));
    assert!(game.pub_company_ids.contains("focus%20home"));
    assert_eq!(companies.get("giantssoftware"), Some("Giants Software"));
    assert_eq!(companies.get("focus%20home"), Some("Focus Home"));
}

#[test]
fn unknown_label_or_bad_link_is_skipped() {
    let mut game = Game::new(10);
    let mut companies = CompanyMap::new();

    assert!(!apply_company_row(
        &mut game,
        &mut companies,
        "Franchise:",
        "Some Series",
        "https://x.com/franchise/series",
    ));
    assert!(!apply_company_row(
        &mut game,
        &mut companies,
        "Developer:",
        "Nameless",
        "no link here",
    ));
    assert!(game.dev_company_ids.is_empty());
    assert!(companies.is_empty());
}

#[test]
fn review_page_extracts_reviews_likes_and_user_ids() {
    let payload = json!({
        "success": 1,
        "reviews": [
            {
                "recommendationid": "900111",
                "author": { "steamid": "76561198000000011" },
                "timestamp_updated": 1_500_000_000,
                "voted_up": true,
                "review": "great"
            },
            {
                "recommendationid": "900222",
                "author": { "steamid": "76561198000000022" },
                "timestamp_updated": 1_500_000_100,
                "voted_up": false,
                "review": "meh"
            },
            {
                // No author id — dropped individually.
                "recommendationid": "900333",
                "timestamp_updated": 1_500_000_200,
                "voted_up": true
            }
        ]
    });

    let page = extract_review_page(42, &payload).unwrap();
    assert_eq!(page.reviews.len(), 2);
    assert_eq!(page.reviews[0].review_id, 900111);
    assert_eq!(page.reviews[0].game_id, 42);
    assert_eq!(page.likes.len(), 1);
    assert_eq!(page.likes[0].user_id, 76561198000000011);
    assert_eq!(page.user_ids.len(), 2);
}

#[test]
fn unsuccessful_review_payload_yields_nothing() {
    let payload = json!({ "success": 2, "reviews": [] });
    assert!(extract_review_page(42, &payload).is_none());
}

#[test]
fn user_summary_builds_an_obfuscated_user() {
    let payload = json!({
        "response": {
            "players": [
                {
                    "personaname": "Some Name",
                    "profileurl": "https://steamcommunity.com/id/abc/"
                }
            ]
        }
    });

    let user = user_from_summary(76561198000000011, &payload).unwrap();
    assert_eq!(user.user_id, 76561198000000011);
    // Vanity slug "abc" rotated by the default offset.
    assert_eq!(user.username, "fgh");
    assert_eq!(user.profile_name, "Some Name");
}

#[test]
fn empty_player_list_yields_no_user() {
    let payload = json!({ "response": { "players": [] } });
    assert!(user_from_summary(1, &payload).is_none());
}
