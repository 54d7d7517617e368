use steamvault_db::{open_database, open_memory};
use tempfile::TempDir;

const TABLES: [&str; 7] = [
    "games",
    "game_genres",
    "companies",
    "develop_publish",
    "users",
    "likes",
    "reviews",
];

#[test]
fn memory_database_has_all_tables() {
    let conn = open_memory().unwrap();
    for table in TABLES {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "missing table {table}");
    }
}

#[test]
fn open_database_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("store.db");

    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO games (id, title, date) VALUES (1, 'Portal', 1191974400)",
            [],
        )
        .unwrap();
    }

    // Reopening must not recreate or wipe anything.
    let conn = open_database(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM games", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);

    let version: i64 = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(version, 1);
}

#[test]
fn foreign_keys_are_enforced() {
    let conn = open_memory().unwrap();
    // No users or games exist yet, so a like cannot reference them.
    let result = conn.execute("INSERT INTO likes (user_id, game_id) VALUES (1, 2)", []);
    assert!(result.is_err());
}
