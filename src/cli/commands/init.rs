use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::auth::hash_secret;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode), keeping existing values
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Init { admin_secret } = &cli.command else {
        return Ok(());
    };

    let secret_hash = admin_secret.as_deref().map(hash_secret).transpose()?;

    let written = Config::init_all(cli.db.as_deref(), secret_hash, cli.test)?;

    // an explicit --db is what gets persisted; otherwise the effective
    // database (file value or RWORKLOG_DB) is the one initialized
    let db_path = if cli.db.is_some() {
        written.database.clone()
    } else {
        cfg.database.clone()
    };

    println!("⚙️  Initializing rWorklog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    if let Some(parent) = Path::new(&db_path).parent() {
        fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    if written.admin_secret_hash.is_none() && cfg.admin_secret_hash.is_none() {
        println!("🔑 No admin secret configured yet: run `rworklog config --set-admin-secret <SECRET>`");
    }

    log::ttlog_soft(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 rWorklog initialization completed!");
    Ok(())
}
