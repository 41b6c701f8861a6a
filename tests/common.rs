#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use rworklog::db::initialize::init_db;
use rworklog::db::pool::DbPool;
use rworklog::utils::time::CivilClock;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

pub const ADMIN_SECRET: &str = "s3cret-admin";

pub fn rwl() -> Command {
    cargo_bin_cmd!("rworklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, migrated store opened through the library API.
pub fn open_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    let pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("init db");
    pool
}

pub fn sao_paulo() -> Tz {
    chrono_tz::America::Sao_Paulo
}

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("valid instant")
}

pub fn clock_at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> CivilClock {
    CivilClock::fixed(sao_paulo(), utc(y, mo, d, h, mi))
}

/// bcrypt hash of [`ADMIN_SECRET`], passed to the binary through the environment
/// so that no configuration file is needed. Computed once per test binary.
pub fn admin_hash() -> String {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| rworklog::core::auth::hash_secret(ADMIN_SECRET).expect("hash secret"))
        .clone()
}

/// `rworklog --db <db> admin --secret <ADMIN_SECRET> ...`
pub fn admin(db_path: &str, hash: &str, args: &[&str]) -> Command {
    let mut cmd = rwl();
    cmd.env("RWORKLOG_ADMIN_SECRET_HASH", hash)
        .env_remove("RWORKLOG_ADMIN_SECRET")
        .args(["--db", db_path, "admin", "--secret", ADMIN_SECRET])
        .args(args);
    cmd
}

/// Initialize the DB and hire the given employees
pub fn init_db_with_team(db_path: &str, hash: &str, names: &[&str]) {
    rwl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for name in names {
        admin(db_path, hash, &["hire", name]).assert().success();
    }
}

pub fn log_activity(db_path: &str, verb: &str, name: &str, project: &str, category: &str) {
    rwl()
        .args([
            "--db", db_path, verb, "--name", name, "--project", project, "--category", category,
        ])
        .assert()
        .success();
}
