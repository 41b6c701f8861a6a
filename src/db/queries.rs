use crate::errors::AppError;
use crate::models::action::ActionType;
use crate::models::activity::{ActivityRecord, NewActivity, RecordId};
use crate::models::category::TaskCategory;
use crate::models::daily_update::DailyUpdate;
use crate::utils::date::format_date;
use crate::utils::time::{format_instant, parse_instant};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, ErrorCode, OptionalExtension, Result, Row, params};

/// True when `err` is a UNIQUE / PRIMARY KEY violation.
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
            && (e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY)
    )
}

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(err))
}

// ---------------------------
// employees
// ---------------------------

pub fn insert_employee(conn: &Connection, name: &str) -> Result<()> {
    conn.execute("INSERT INTO employees (name) VALUES (?1)", [name])?;
    Ok(())
}

/// Flip the active flag off. Returns the number of rows changed (0 or 1).
pub fn deactivate_employee(conn: &Connection, name: &str) -> Result<usize> {
    conn.execute(
        "UPDATE employees SET active = 0 WHERE name = ?1 AND active = 1",
        [name],
    )
}

pub fn load_active_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM employees WHERE active = 1 ORDER BY name ASC")?;

    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn is_active_employee(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM employees WHERE name = ?1 AND active = 1")?;
    stmt.exists([name])
}

// ---------------------------
// activity_log
// ---------------------------

pub fn map_activity_row(row: &Row) -> Result<ActivityRecord> {
    let category_str: String = row.get("category")?;
    let category = TaskCategory::from_db_str(&category_str)
        .ok_or_else(|| conversion_error(3, AppError::InvalidCategory(category_str.clone())))?;

    let action_str: String = row.get("action_type")?;
    let action = ActionType::from_db_str(&action_str)
        .ok_or_else(|| conversion_error(4, AppError::InvalidAction(action_str.clone())))?;

    let ts_str: String = row.get("timestamp")?;
    let timestamp = parse_instant(&ts_str).map_err(|e| conversion_error(5, e))?;

    Ok(ActivityRecord {
        id: row.get("id")?,
        employee: row.get("employee")?,
        project: row.get("project")?,
        category,
        action,
        timestamp,
        note: row.get("note")?,
    })
}

pub fn insert_activity(
    conn: &Connection,
    new: &NewActivity,
    timestamp: &DateTime<Utc>,
) -> Result<RecordId> {
    conn.execute(
        "INSERT INTO activity_log (employee, project, category, action_type, timestamp, note)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            new.employee,
            new.project,
            new.category.label(),
            new.action.to_db_str(),
            format_instant(timestamp),
            new.note,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All activity rows, most recent id first.
pub fn load_activities(conn: &Connection) -> Result<Vec<ActivityRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, employee, project, category, action_type, timestamp, note
         FROM activity_log
         ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], map_activity_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_activity(conn: &Connection, id: RecordId) -> Result<Option<ActivityRecord>> {
    conn.query_row(
        "SELECT id, employee, project, category, action_type, timestamp, note
         FROM activity_log
         WHERE id = ?1",
        [id],
        map_activity_row,
    )
    .optional()
}

/// Only project and note are mutable after creation.
pub fn update_activity(conn: &Connection, id: RecordId, project: &str, note: &str) -> Result<usize> {
    conn.execute(
        "UPDATE activity_log SET project = ?1, note = ?2 WHERE id = ?3",
        params![project, note, id],
    )
}

pub fn delete_activity(conn: &Connection, id: RecordId) -> Result<usize> {
    conn.execute("DELETE FROM activity_log WHERE id = ?1", [id])
}

// ---------------------------
// daily_updates
// ---------------------------

pub fn map_daily_row(row: &Row) -> Result<DailyUpdate> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(2, AppError::InvalidDate(date_str.clone())))?;

    Ok(DailyUpdate {
        id: row.get("id")?,
        employee: row.get("employee")?,
        date,
        yesterday: row.get("yesterday")?,
        today: row.get("today")?,
        blockers: row.get("blockers")?,
    })
}

pub fn daily_exists(conn: &Connection, employee: &str, date: &NaiveDate) -> Result<bool> {
    let mut stmt =
        conn.prepare_cached("SELECT id FROM daily_updates WHERE employee = ?1 AND date = ?2")?;
    stmt.exists(params![employee, format_date(date)])
}

pub fn insert_daily(
    conn: &Connection,
    employee: &str,
    date: &NaiveDate,
    yesterday: &str,
    today: &str,
    blockers: &str,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO daily_updates (employee, date, yesterday, today, blockers)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![employee, format_date(date), yesterday, today, blockers],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Daily updates for one civil date, in submission order.
pub fn load_daily_by_date(conn: &Connection, date: &NaiveDate) -> Result<Vec<DailyUpdate>> {
    let mut stmt = conn.prepare(
        "SELECT id, employee, date, yesterday, today, blockers
         FROM daily_updates
         WHERE date = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([format_date(date)], map_daily_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_daily_for(conn: &Connection, employee: &str, date: &NaiveDate) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM daily_updates WHERE employee = ?1 AND date = ?2",
        params![employee, format_date(date)],
        |row| row.get(0),
    )
}
