mod common;
use common::setup_test_db;
use rusqlite::Connection;
use rworklog::db::initialize::init_db;
use rworklog::db::migrate::schema_is_current;

#[test]
fn test_fresh_store_is_current_and_init_is_idempotent() {
    let db_path = setup_test_db("migrate_fresh");
    let conn = Connection::open(&db_path).expect("open db");

    assert!(!schema_is_current(&conn).expect("check"));

    init_db(&conn).expect("first init");
    init_db(&conn).expect("second init");

    assert!(schema_is_current(&conn).expect("check"));

    let applied: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |r| r.get(0),
        )
        .expect("count migrations");
    assert_eq!(applied, 1);
}

#[test]
fn test_legacy_duplicates_are_collapsed_before_unique_index() {
    let db_path = setup_test_db("migrate_legacy_daily");
    let conn = Connection::open(&db_path).expect("open db");

    // store written before the (employee, date) index existed
    conn.execute_batch(
        r#"
        CREATE TABLE daily_updates (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            employee   TEXT NOT NULL,
            date       TEXT NOT NULL,
            yesterday  TEXT NOT NULL DEFAULT '',
            today      TEXT NOT NULL DEFAULT '',
            blockers   TEXT NOT NULL DEFAULT ''
        );
        INSERT INTO daily_updates (employee, date, yesterday) VALUES ('Ana', '2025-10-20', 'first');
        INSERT INTO daily_updates (employee, date, yesterday) VALUES ('Ana', '2025-10-20', 'second');
        INSERT INTO daily_updates (employee, date, yesterday) VALUES ('Bruno', '2025-10-20', 'only');
        "#,
    )
    .expect("legacy schema");

    init_db(&conn).expect("migrate");

    let kept: Vec<String> = {
        let mut stmt = conn
            .prepare("SELECT yesterday FROM daily_updates ORDER BY id")
            .expect("prepare");
        stmt.query_map([], |r| r.get(0))
            .expect("query")
            .collect::<Result<_, _>>()
            .expect("rows")
    };
    assert_eq!(kept, vec!["first".to_string(), "only".to_string()]);

    let dup = conn.execute(
        "INSERT INTO daily_updates (employee, date) VALUES ('Ana', '2025-10-20')",
        [],
    );
    assert!(dup.is_err());
}
