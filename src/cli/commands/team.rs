use crate::config::Config;
use crate::core::directory::DirectoryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::bold;

/// `team`: the selection list an operator picks their name from.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let list = DirectoryLogic::selection_list(&mut pool)?;

    if list.len() == 1 {
        info("The roster is empty. Ask an admin to run `admin hire <NAME>`.");
        return Ok(());
    }

    println!("{}", bold("Team roster"));
    for name in list.iter().skip(1) {
        println!("  • {}", name);
    }

    Ok(())
}
