use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::daily::{DailyLogic, SubmitOutcome};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{error, success};
use crate::utils::time::CivilClock;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Daily {
        name,
        yesterday,
        today,
        blockers,
    } = cmd
    {
        let clock = CivilClock::frozen(cfg.civil_tz()?);
        let mut pool = DbPool::new(&cfg.database)?;

        match DailyLogic::submit(&mut pool, &clock, name, yesterday, today, blockers)? {
            SubmitOutcome::Submitted => {
                success(format!("Daily update for {} sent!", clock.today()))
            }
            SubmitOutcome::AlreadySubmittedToday => {
                error(format!("{} already sent a daily update today.", name.trim()))
            }
        }
    }

    Ok(())
}
