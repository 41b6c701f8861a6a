use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{admin, admin_hash, init_db_with_team, log_activity, rwl, setup_test_db, temp_out};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    rwl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    rwl()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success();
}

#[test]
fn test_team_lists_active_roster() {
    let db_path = setup_test_db("cli_team");
    let hash = admin_hash();
    init_db_with_team(&db_path, &hash, &["Bruno", "Ana"]);

    admin(&db_path, &hash, &["revoke", "Bruno"])
        .assert()
        .success()
        .stdout(contains("revoked"));

    rwl()
        .args(["--db", &db_path, "team"])
        .assert()
        .success()
        .stdout(contains("Ana").and(contains("Bruno").not()));
}

#[test]
fn test_hire_duplicate_is_reported_not_fatal() {
    let db_path = setup_test_db("cli_hire_duplicate");
    let hash = admin_hash();
    init_db_with_team(&db_path, &hash, &["Ana"]);

    admin(&db_path, &hash, &["hire", "Ana"])
        .assert()
        .success()
        .stderr(contains("already exists"));
}

#[test]
fn test_start_stop_and_records() {
    let db_path = setup_test_db("cli_start_stop");
    let hash = admin_hash();
    init_db_with_team(&db_path, &hash, &["Ana", "Bruno"]);

    log_activity(&db_path, "start", "Ana", "ACME", "scraping");
    log_activity(&db_path, "stop", "Ana", "ACME", "scraping");
    log_activity(&db_path, "start", "Bruno", "Globex", "Bug Fix");

    admin(&db_path, &hash, &["records"])
        .assert()
        .success()
        .stdout(contains("Showing 3 of 3 records"));

    admin(&db_path, &hash, &["records", "--employee", "Ana"])
        .assert()
        .success()
        .stdout(contains("Showing 2 of 3 records"));

    admin(&db_path, &hash, &["records", "--employee", "All", "--project", "Globex"])
        .assert()
        .success()
        .stdout(contains("Showing 1 of 3 records"));
}

#[test]
fn test_start_rejects_unknown_name_and_category() {
    let db_path = setup_test_db("cli_start_invalid");
    let hash = admin_hash();
    init_db_with_team(&db_path, &hash, &["Ana"]);

    rwl()
        .args([
            "--db", &db_path, "start", "--name", "Ghost", "--project", "ACME", "--category",
            "meeting",
        ])
        .assert()
        .failure()
        .stderr(contains("Unknown or inactive employee"));

    rwl()
        .args([
            "--db", &db_path, "start", "--name", "Ana", "--project", "ACME", "--category",
            "gardening",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid task category"));

    rwl()
        .args([
            "--db",
            &db_path,
            "start",
            "--name",
            "Select your name",
            "--category",
            "meeting",
        ])
        .assert()
        .failure()
        .stderr(contains("select a valid employee"));
}

#[test]
fn test_daily_once_per_day() {
    let db_path = setup_test_db("cli_daily_once");
    let hash = admin_hash();
    init_db_with_team(&db_path, &hash, &["Ana"]);

    let daily = |blockers: &str| {
        let mut cmd = rwl();
        cmd.args([
            "--db",
            &db_path,
            "daily",
            "--name",
            "Ana",
            "--yesterday",
            "Parser",
            "--today",
            "Crawler",
            "--blockers",
            blockers,
        ]);
        cmd
    };

    daily("Waiting on VPN access")
        .assert()
        .success()
        .stdout(contains("sent"));

    daily("")
        .assert()
        .success()
        .stderr(contains("already sent a daily update today"));

    admin(&db_path, &hash, &["today"])
        .assert()
        .success()
        .stdout(contains("Ana").and(contains("Waiting on VPN access")));
}

#[test]
fn test_admin_requires_correct_secret() {
    let db_path = setup_test_db("cli_admin_secret");
    let hash = admin_hash();
    init_db_with_team(&db_path, &hash, &["Ana"]);

    rwl()
        .env("RWORKLOG_ADMIN_SECRET_HASH", &hash)
        .args(["--db", &db_path, "admin", "--secret", "wrong", "records"])
        .assert()
        .failure()
        .stderr(contains("Admin access denied"));

    rwl()
        .env("RWORKLOG_ADMIN_SECRET_HASH", &hash)
        .env_remove("RWORKLOG_ADMIN_SECRET")
        .args(["--db", &db_path, "admin", "records"])
        .assert()
        .failure()
        .stderr(contains("not provided"));

    // secret taken from the environment
    rwl()
        .env("RWORKLOG_ADMIN_SECRET_HASH", &hash)
        .env("RWORKLOG_ADMIN_SECRET", common::ADMIN_SECRET)
        .args(["--db", &db_path, "admin", "records"])
        .assert()
        .success();
}

#[test]
fn test_admin_edit_and_delete() {
    let db_path = setup_test_db("cli_admin_edit_delete");
    let hash = admin_hash();
    init_db_with_team(&db_path, &hash, &["Ana"]);

    log_activity(&db_path, "start", "Ana", "ACME", "meeting");

    admin(&db_path, &hash, &["edit", "1", "--project", "Globex", "--note", "kickoff"])
        .assert()
        .success()
        .stdout(contains("updated"));

    admin(&db_path, &hash, &["records", "--project", "Globex"])
        .assert()
        .success()
        .stdout(contains("kickoff").and(contains("Showing 1 of 1 records")));

    // declined confirmation keeps the record
    admin(&db_path, &hash, &["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));

    admin(&db_path, &hash, &["delete", "1", "--force"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    admin(&db_path, &hash, &["delete", "1", "--force"])
        .assert()
        .success()
        .stdout(contains("did not exist"));

    admin(&db_path, &hash, &["edit", "1", "--note", "late"])
        .assert()
        .success()
        .stdout(contains("not found"));
}

#[test]
fn test_log_print_shows_audit_rows() {
    let db_path = setup_test_db("cli_log_print");
    let hash = admin_hash();
    init_db_with_team(&db_path, &hash, &["Ana"]);

    rwl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("hire").and(contains("migration_applied")));
}

#[test]
fn test_backup_copy_and_compress() {
    let db_path = setup_test_db("cli_backup");
    let hash = admin_hash();
    init_db_with_team(&db_path, &hash, &["Ana"]);

    let copy = temp_out("cli_backup_copy", "sqlite");
    rwl()
        .args(["--db", &db_path, "backup", "--file", &copy])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(std::path::Path::new(&copy).exists());

    let zipped = temp_out("cli_backup_zip", "sqlite");
    let zip_path = temp_out("cli_backup_zip", "zip");
    rwl()
        .args(["--db", &db_path, "backup", "--file", &zipped, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));
    assert!(std::path::Path::new(&zip_path).exists());
    assert!(!std::path::Path::new(&zipped).exists());
}

#[test]
fn test_start_confirmation_matches_stored_time() {
    let db_path = setup_test_db("cli_start_confirmation_time");
    let hash = admin_hash();
    init_db_with_team(&db_path, &hash, &["Ana"]);

    let out = rwl()
        .args([
            "--db", &db_path, "start", "--name", "Ana", "--project", "ACME", "--category",
            "meeting",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(out).expect("utf8 stdout");

    let when = stdout
        .split("recorded at ")
        .nth(1)
        .and_then(|rest| rest.split(" (#").next())
        .expect("confirmation line")
        .to_string();

    admin(&db_path, &hash, &["records"])
        .assert()
        .success()
        .stdout(contains(when));
}
