mod common;
use common::{clock_at, open_pool};
use rworklog::core::activity::ActivityLogic;
use rworklog::core::admin::{AdminLogic, RecordChange, RecordFilter, Selector};
use rworklog::core::daily::{DailyLogic, SubmitOutcome};
use rworklog::core::directory::{AddOutcome, DirectoryLogic};
use rworklog::models::action::ActionType;
use rworklog::models::activity::NewActivity;
use rworklog::models::category::TaskCategory;

/// A regular working day for a two person team, seen from both sides.
#[test]
fn test_team_day_end_to_end() {
    let mut pool = open_pool("scenario_team_day");

    assert_eq!(DirectoryLogic::add(&mut pool, "Ana").unwrap(), AddOutcome::Added);
    assert_eq!(DirectoryLogic::add(&mut pool, "Bruno").unwrap(), AddOutcome::Added);

    let nine = clock_at(2025, 10, 20, 12, 0);
    let noon = clock_at(2025, 10, 20, 15, 0);

    let ana_start = ActivityLogic::append(
        &mut pool,
        &nine,
        NewActivity {
            employee: "Ana".into(),
            project: "Site".into(),
            category: TaskCategory::Scraping,
            action: ActionType::Start,
            note: "catalog crawl".into(),
        },
    )
    .unwrap();

    ActivityLogic::append(
        &mut pool,
        &noon,
        NewActivity {
            employee: "Ana".into(),
            project: "Site".into(),
            category: TaskCategory::Scraping,
            action: ActionType::End,
            note: String::new(),
        },
    )
    .unwrap();

    ActivityLogic::append(
        &mut pool,
        &nine,
        NewActivity {
            employee: "Bruno".into(),
            project: "Globex".into(),
            category: TaskCategory::BugFix,
            action: ActionType::Start,
            note: String::new(),
        },
    )
    .unwrap();

    assert_eq!(
        DailyLogic::submit(&mut pool, &nine, "Ana", "Parser", "Crawl ACME", "").unwrap(),
        SubmitOutcome::Submitted
    );
    assert_eq!(
        DailyLogic::submit(&mut pool, &nine, "Bruno", "Tests", "Fix login", "Waiting for staging access")
            .unwrap(),
        SubmitOutcome::Submitted
    );
    assert_eq!(
        DailyLogic::submit(&mut pool, &noon, "Ana", "again", "again", "").unwrap(),
        SubmitOutcome::AlreadySubmittedToday
    );

    // admin view
    let all = AdminLogic::list_all(&mut pool).unwrap();
    assert_eq!(all.len(), 3);

    let ana_only = AdminLogic::filter(
        &all,
        &RecordFilter::new(Selector::from_option(Some("Ana")), Selector::from_option(Some("All"))),
    );
    assert_eq!(ana_only.len(), 2);
    assert_eq!(ana_only[0].action, ActionType::End);
    assert_eq!(ana_only[1].action, ActionType::Start);
    assert!(ana_only.iter().all(|r| r.project == "Site"));

    let today = AdminLogic::today_updates(&mut pool, &noon).unwrap();
    assert_eq!(today.len(), 2);
    assert!(!today[0].has_blocker);
    assert!(today[1].has_blocker);

    assert_eq!(
        AdminLogic::edit_record(&mut pool, ana_start, "ACME Corp", "catalog crawl v2").unwrap(),
        RecordChange::Applied
    );
    assert_eq!(
        AdminLogic::delete_record(&mut pool, ana_start).unwrap(),
        RecordChange::Applied
    );
    assert_eq!(AdminLogic::list_all(&mut pool).unwrap().len(), 2);
}
