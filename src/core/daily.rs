use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{daily_exists, insert_daily, is_active_employee, is_unique_violation};
use crate::errors::{AppError, AppResult};
use crate::models::employee::normalize_name;
use crate::utils::time::CivilClock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    AlreadySubmittedToday,
}

pub struct DailyLogic;

impl DailyLogic {
    /// Store today's standup for `employee`, at most once per civil day.
    ///
    /// The existence check and the insert share one IMMEDIATE transaction;
    /// the unique (employee, date) index backs it up, and a violation of that
    /// index is reported the same way as a found row.
    pub fn submit(
        pool: &mut DbPool,
        clock: &CivilClock,
        employee: &str,
        yesterday: &str,
        today: &str,
        blockers: &str,
    ) -> AppResult<SubmitOutcome> {
        let employee = normalize_name(employee)?;

        if !is_active_employee(&pool.conn, employee)? {
            return Err(AppError::UnknownEmployee(employee.to_string()));
        }

        let date = clock.today();

        let outcome = pool.with_tx(|tx| -> AppResult<SubmitOutcome> {
            if daily_exists(tx, employee, &date)? {
                return Ok(SubmitOutcome::AlreadySubmittedToday);
            }

            match insert_daily(tx, employee, &date, yesterday, today, blockers) {
                Ok(_) => Ok(SubmitOutcome::Submitted),
                Err(e) if is_unique_violation(&e) => Ok(SubmitOutcome::AlreadySubmittedToday),
                Err(e) => Err(e.into()),
            }
        })?;

        if outcome == SubmitOutcome::Submitted {
            ttlog_soft(&pool.conn, "daily", employee, &format!("Daily update for {}", date));
        }

        Ok(outcome)
    }
}
