use steamvault_model::types::{CompanyMap, CompanyRole, Game, Like, Review, User, UNKNOWN_TITLE};

#[test]
fn new_game_has_documented_defaults() {
    let game = Game::new(42);
    assert_eq!(game.game_id, 42);
    assert_eq!(game.title, UNKNOWN_TITLE);
    assert_eq!(game.date, 0);
    assert!(game.genres.is_empty());
}

#[test]
fn genre_insertion_is_idempotent_and_case_insensitive() {
    let mut game = Game::new(1);
    game.add_genre("RPG");
    game.add_genre("rpg");
    assert_eq!(game.genres.len(), 1);
    assert!(game.genres.contains("rpg"));
}

#[test]
fn company_ids_are_lowercased_on_insertion() {
    let mut game = Game::new(1);
    game.add_dev_company("ValveSoftware");
    game.add_pub_company("VALVE");
    assert!(game.dev_company_ids.contains("valvesoftware"));
    assert!(game.pub_company_ids.contains("valve"));
}

#[test]
fn company_map_first_seen_name_wins() {
    let mut companies = CompanyMap::new();
    assert!(companies.record("Valve", "Valve Corporation"));
    assert!(!companies.record("valve", "Valve Software"));
    assert_eq!(companies.get("valve"), Some("Valve Corporation"));
    assert_eq!(companies.len(), 1);
}

#[test]
fn game_serializes_with_wire_field_names() {
    let mut game = Game::new(7);
    game.set_title("Half-Life");
    game.set_release_epoch(911520000);
    game.add_genre("Shooter");
    game.add_dev_company("valve");

    let json = serde_json::to_string(&game).unwrap();
    assert!(json.contains("\"gameID\":7"));
    assert!(json.contains("\"devCompanyIDs\":[\"valve\"]"));
    assert!(json.contains("\"pubCompanyIDs\":[]"));

    let back: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(back, game);
}

#[test]
fn review_and_like_wire_names() {
    let review = Review::new(100, 7, 555, 1_426_896_000);
    let json = serde_json::to_string(&review).unwrap();
    assert!(json.contains("\"reviewID\":555"));
    assert!(json.contains("\"time\":1426896000"));

    let like = Like::new(100, 7);
    let json = serde_json::to_string(&like).unwrap();
    assert!(json.contains("\"userID\":100"));
    assert!(json.contains("\"gameID\":7"));
}

#[test]
fn user_constructor_obfuscates_login_name() {
    let user = User::new(76561198012345678, "abc", "Some Name");
    assert_eq!(user.username, "fgh");
    assert_eq!(user.profile_name, "Some Name");

    let json = serde_json::to_string(&user).unwrap();
    assert!(json.contains("\"profileName\":\"Some Name\""));
    assert!(json.contains("\"username\":\"fgh\""));
}

#[test]
fn company_role_round_trips_through_strings() {
    for role in [CompanyRole::Dev, CompanyRole::Pub, CompanyRole::Both] {
        assert_eq!(CompanyRole::from_str_loose(role.as_str()), role);
    }
    assert_eq!(CompanyRole::from_str_loose("UNKNOWN"), CompanyRole::Unknown);
    assert_eq!(CompanyRole::from_str_loose("garbage"), CompanyRole::Unknown);
}
