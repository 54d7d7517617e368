use steamvault_model::json::{
    load_companies, load_games, load_users, save_companies, save_games, save_users, JsonError,
};
use steamvault_model::types::{CompanyMap, Game, User};
use tempfile::TempDir;

#[test]
fn games_round_trip_through_a_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("gamesData.json");

    let mut game = Game::new(42);
    game.set_title("Portal");
    game.set_release_epoch(1_191_974_400);
    game.add_genre("Puzzle");
    game.add_dev_company("valve");
    game.add_pub_company("valve");

    save_games(&path, &[game.clone()]).unwrap();
    let loaded = load_games(&path).unwrap();
    assert_eq!(loaded, vec![game]);
}

#[test]
fn companies_round_trip_through_a_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("companiesData.json");

    let mut companies = CompanyMap::new();
    companies.record("valve", "Valve Corporation");
    companies.record("giantssoftware", "Giants Software");

    save_companies(&path, &companies).unwrap();
    let loaded = load_companies(&path).unwrap();
    assert_eq!(loaded, companies);
}

#[test]
fn users_round_trip_through_a_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("usersData.json");

    let users = vec![User::new(76561198000000011, "abc", "Some Name")];
    save_users(&path, &users).unwrap();
    assert_eq!(load_users(&path).unwrap(), users);
}

#[test]
fn missing_file_reports_the_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nope.json");

    let err = load_games(&path).unwrap_err();
    match err {
        JsonError::Io { path: p, .. } => assert!(p.ends_with("nope.json")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.json");
    std::fs::write(&path, "[{not json").unwrap();

    assert!(matches!(
        load_games(&path).unwrap_err(),
        JsonError::Serde { .. }
    ));
}
