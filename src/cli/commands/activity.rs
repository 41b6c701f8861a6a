use crate::cli::parser::ActivityArgs;
use crate::config::Config;
use crate::core::activity::ActivityLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::action::ActionType;
use crate::models::activity::NewActivity;
use crate::models::category::TaskCategory;
use crate::ui::messages::{success, warning};
use crate::utils::time::CivilClock;

/// `start` / `stop`
pub fn handle(args: &ActivityArgs, action: ActionType, cfg: &Config) -> AppResult<()> {
    // validate at the boundary before touching the store
    let category: TaskCategory = args.category.parse()?;
    let clock = CivilClock::frozen(cfg.civil_tz()?);

    let mut pool = DbPool::new(&cfg.database)?;

    let id = ActivityLogic::append(
        &mut pool,
        &clock,
        NewActivity {
            employee: args.name.clone(),
            project: args.project.clone(),
            category,
            action,
            note: args.note.clone(),
        },
    )?;

    let when = clock
        .now()
        .with_timezone(&clock.tz())
        .format(&cfg.display_format)
        .to_string();

    match action {
        ActionType::Start => success(format!("Start of {} recorded at {} (#{})", category, when, id)),
        ActionType::End => warning(format!("End of {} recorded at {} (#{})", category, when, id)),
    }

    Ok(())
}
