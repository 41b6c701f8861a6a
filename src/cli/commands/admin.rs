use crate::cli::parser::{AdminCommands, Commands};
use crate::config::Config;
use crate::core::admin::{AdminLogic, RecordChange, RecordFilter, Selector};
use crate::core::auth::authorize;
use crate::core::directory::{AddOutcome, DirectoryLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest};
use crate::models::activity::ActivityRecord;
use crate::models::daily_update::DailyEntry;
use crate::ui::messages::{confirm, error, header, info, success, warning};
use crate::utils::colors::{BOLD, GREEN, GREY, RED, RESET, colorize_optional};
use crate::utils::table::{Column, Table};
use crate::utils::time::CivilClock;
use chrono_tz::Tz;

const WRAP_WIDTH: usize = 76;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Admin { secret, command } = cmd else {
        return Ok(());
    };

    authorize(cfg, secret.as_deref())?;

    let tz = cfg.civil_tz()?;
    let mut pool = DbPool::new(&cfg.database)?;

    match command {
        AdminCommands::Records { employee, project } => {
            let filter = RecordFilter::new(
                Selector::from_option(employee.as_deref()),
                Selector::from_option(project.as_deref()),
            );
            print_records(&mut pool, tz, &cfg.display_format, &filter)?;
        }

        AdminCommands::Edit { id, project, note } => {
            let Some(current) = AdminLogic::find_record(&mut pool, *id)? else {
                warning(format!("Record #{} not found; nothing changed.", id));
                return Ok(());
            };

            if project.is_none() && note.is_none() {
                info("Nothing to change: pass --project and/or --note.");
                return Ok(());
            }

            let new_project = project.as_deref().unwrap_or(&current.project);
            let new_note = note.as_deref().unwrap_or(&current.note);

            match AdminLogic::edit_record(&mut pool, *id, new_project, new_note)? {
                RecordChange::Applied => success(format!("Record #{} updated.", id)),
                RecordChange::Missing => {
                    warning(format!("Record #{} not found; nothing changed.", id))
                }
            }
        }

        AdminCommands::Delete { id, force } => {
            let prompt = match AdminLogic::find_record(&mut pool, *id)? {
                Some(r) => format!(
                    "Delete record #{} of {} ({} {})? This action is irreversible.",
                    r.id,
                    r.employee,
                    r.action,
                    r.display_timestamp(tz, &cfg.display_format)
                ),
                None => format!("Delete record #{}? This action is irreversible.", id),
            };

            if !*force && !confirm(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            match AdminLogic::delete_record(&mut pool, *id)? {
                RecordChange::Applied => success(format!("Record #{} deleted.", id)),
                RecordChange::Missing => warning(format!("Record #{} did not exist.", id)),
            }
        }

        AdminCommands::Today => {
            let clock = CivilClock::frozen(tz);
            let entries = AdminLogic::today_updates(&mut pool, &clock)?;
            print_today(&clock, &entries);
        }

        AdminCommands::Hire { name } => match DirectoryLogic::add(&mut pool, name)? {
            AddOutcome::Added => success(format!("{} added to the team.", name.trim())),
            AddOutcome::AlreadyExists => error(format!("Name already exists: {}", name.trim())),
        },

        AdminCommands::Revoke { name } => {
            DirectoryLogic::deactivate(&mut pool, name)?;
            warning(format!("Access of {} revoked.", name.trim()));
        }

        AdminCommands::Export {
            format,
            file,
            range,
            employee,
            project,
            force,
        } => {
            let req = ExportRequest {
                format: *format,
                file: file.clone(),
                range: range.clone(),
                filter: RecordFilter::new(
                    Selector::from_option(employee.as_deref()),
                    Selector::from_option(project.as_deref()),
                ),
                force: *force,
            };
            ExportLogic::export(&mut pool, tz, &cfg.display_format, &req)?;
        }
    }

    Ok(())
}

fn print_records(
    pool: &mut DbPool,
    tz: Tz,
    display_format: &str,
    filter: &RecordFilter,
) -> AppResult<()> {
    let all = AdminLogic::list_all(pool)?;

    if all.is_empty() {
        info("No activity records found.");
        return Ok(());
    }

    let shown: Vec<ActivityRecord> = AdminLogic::filter(&all, filter);

    let mut table = Table::new(vec![
        Column::new("ID", 8),
        Column::new("Employee", 20),
        Column::new("Project", 24),
        Column::new("Category", 16),
        Column::new("Action", 6),
        Column::new("When", 16),
        Column::new("Note", 40),
    ]);

    for r in &shown {
        table.add_row(vec![
            r.id.to_string(),
            r.employee.clone(),
            r.project.clone(),
            r.category.to_string(),
            r.action.to_string(),
            r.display_timestamp(tz, display_format),
            r.note.clone(),
        ]);
    }

    print!("{}", table.render());
    println!();
    info(format!(
        "Showing {} of {} records.",
        shown.len(),
        all.len()
    ));

    let (employees, projects) = AdminLogic::filter_options(&all);
    println!(
        "{GREY}Employees: {} | Projects: {}{RESET}",
        employees.join(", "),
        projects.join(", ")
    );

    Ok(())
}

fn print_today(clock: &CivilClock, entries: &[DailyEntry]) {
    header(format!("Daily updates for {}", clock.today()));

    if entries.is_empty() {
        info("No updates today.");
        return;
    }

    for entry in entries {
        let u = &entry.update;
        let (dot, color) = if entry.has_blocker {
            ("🔴", RED)
        } else {
            ("🟢", GREEN)
        };

        println!("{} {BOLD}{}{RESET}", dot, u.employee);
        print_wrapped("Yesterday", &colorize_optional(&u.yesterday));
        print_wrapped("Today", &colorize_optional(&u.today));

        if entry.has_blocker {
            print_wrapped(&format!("{color}Blocker{RESET}"), &u.blockers);
        } else {
            println!("   {color}No blockers{RESET}");
        }
        println!();
    }
}

fn print_wrapped(label: &str, text: &str) {
    let prefix = format!("   {}: ", label);
    let indent = " ".repeat(5);
    let opts = textwrap::Options::new(WRAP_WIDTH)
        .initial_indent(&prefix)
        .subsequent_indent(&indent);
    println!("{}", textwrap::fill(text, opts));
}
