use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, sql: &str) -> rusqlite::Result<i64> {
    pool.conn.query_row(sql, [], |row| row.get(0))
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let active = count(pool, "SELECT COUNT(*) FROM employees WHERE active = 1")?;
    let inactive = count(pool, "SELECT COUNT(*) FROM employees WHERE active = 0")?;
    let activities = count(pool, "SELECT COUNT(*) FROM activity_log")?;
    let dailies = count(pool, "SELECT COUNT(*) FROM daily_updates")?;

    println!(
        "{}• Employees:{} {}{}{} active, {}{}{} inactive",
        CYAN, RESET, GREEN, active, RESET, GREY, inactive, RESET
    );
    println!(
        "{}• Activity records:{} {}{}{}",
        CYAN, RESET, GREEN, activities, RESET
    );
    println!(
        "{}• Daily updates:{} {}{}{}",
        CYAN, RESET, GREEN, dailies, RESET
    );

    //
    // 3) DAILY DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row(
            "SELECT MIN(date), MAX(date) FROM daily_updates",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Daily updates range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
