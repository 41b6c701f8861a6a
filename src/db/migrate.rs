use crate::errors::AppResult;
use crate::models::action::ActionType;
use crate::models::category::TaskCategory;
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

const DAILY_UNIQUE_VERSION: &str = "20251019_0001_daily_updates_unique_employee_date";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// `'a','b','c'` list for a CHECK constraint.
fn sql_in_list<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .map(|v| format!("'{}'", v.replace('\'', "''")))
        .collect::<Vec<_>>()
        .join(",")
}

fn create_employees_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            name    TEXT PRIMARY KEY NOT NULL,
            active  INTEGER NOT NULL DEFAULT 1 CHECK(active IN (0,1))
        );

        CREATE INDEX IF NOT EXISTS idx_employees_active ON employees(active, name);
        "#,
    )?;
    Ok(())
}

fn create_activity_table(conn: &Connection) -> Result<()> {
    let categories = sql_in_list(TaskCategory::ALL.iter().map(|c| c.label()));
    let actions = sql_in_list(ActionType::ALL.iter().map(|a| a.to_db_str()));

    let sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS activity_log (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee     TEXT NOT NULL,
            project      TEXT NOT NULL DEFAULT '',
            category     TEXT NOT NULL CHECK(category IN ({categories})),
            action_type  TEXT NOT NULL CHECK(action_type IN ({actions})),
            timestamp    TEXT NOT NULL,
            note         TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_activity_employee ON activity_log(employee);
        CREATE INDEX IF NOT EXISTS idx_activity_project ON activity_log(project);
        "#
    );

    conn.execute_batch(&sql)?;
    Ok(())
}

fn create_daily_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS daily_updates (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            employee   TEXT NOT NULL,
            date       TEXT NOT NULL,
            yesterday  TEXT NOT NULL DEFAULT '',
            today      TEXT NOT NULL DEFAULT '',
            blockers   TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_daily_date ON daily_updates(date);
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Close the duplicate-submission window: stores written without the
/// (employee, date) index may hold duplicates, so keep the earliest row of
/// each pair before creating the index.
fn migrate_daily_unique_index(conn: &Connection) -> Result<()> {
    if is_applied(conn, DAILY_UNIQUE_VERSION)? {
        return Ok(());
    }

    let tx = conn.unchecked_transaction()?;

    let removed = tx.execute(
        "DELETE FROM daily_updates
         WHERE id NOT IN (
             SELECT MIN(id) FROM daily_updates GROUP BY employee, date
         )",
        [],
    )?;

    if removed > 0 {
        warning(format!(
            "Removed {} duplicate daily update(s) before adding the unique index.",
            removed
        ));
    }

    tx.execute_batch(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_daily_employee_date
         ON daily_updates(employee, date);",
    )?;

    mark_applied(
        &tx,
        DAILY_UNIQUE_VERSION,
        "Added unique (employee, date) index to daily_updates",
    )?;

    tx.commit()?;

    success(format!(
        "Migration applied: {} → unique daily update per employee per day",
        DAILY_UNIQUE_VERSION
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called from db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for (table, create) in [
        ("employees", create_employees_table as fn(&Connection) -> Result<()>),
        ("activity_log", create_activity_table),
        ("daily_updates", create_daily_table),
    ] {
        if !table_exists(conn, table)? {
            create(conn)?;
            success(format!("Created {} table.", table));
        }
    }

    migrate_daily_unique_index(conn)?;

    Ok(())
}

/// Report whether every table and the daily unique index are in place.
pub fn schema_is_current(conn: &Connection) -> AppResult<bool> {
    for table in ["log", "employees", "activity_log", "daily_updates"] {
        if !table_exists(conn, table)? {
            return Ok(false);
        }
    }
    Ok(is_applied(conn, DAILY_UNIQUE_VERSION)?)
}
