use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_activity, find_activity, load_activities, load_daily_by_date, update_activity};
use crate::errors::AppResult;
use crate::models::activity::{ActivityRecord, RecordId};
use crate::models::daily_update::DailyEntry;
use crate::utils::time::CivilClock;
use std::collections::BTreeSet;

/// Filter value for one field of the activity listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// Sentinel "All": do not filter on this field.
    #[default]
    All,
    Only(String),
}

impl Selector {
    pub const ALL_LABEL: &'static str = "All";

    /// `None`, empty text and the "All" label all mean no filtering.
    pub fn from_option(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Selector::All,
            Some(v) if v.eq_ignore_ascii_case(Self::ALL_LABEL) => Selector::All,
            Some(v) => Selector::Only(v.to_string()),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub employee: Selector,
    pub project: Selector,
}

impl RecordFilter {
    pub fn new(employee: Selector, project: Selector) -> Self {
        Self { employee, project }
    }

    pub fn matches(&self, record: &ActivityRecord) -> bool {
        self.employee.matches(&record.employee) && self.project.matches(&record.project)
    }
}

/// Result of an edit or delete addressed by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordChange {
    Applied,
    Missing,
}

impl RecordChange {
    fn from_rows(n: usize) -> Self {
        if n > 0 {
            RecordChange::Applied
        } else {
            RecordChange::Missing
        }
    }
}

/// Oversight: activity listing and corrections, today's standups.
pub struct AdminLogic;

impl AdminLogic {
    /// Every activity record, most recent id first.
    pub fn list_all(pool: &mut DbPool) -> AppResult<Vec<ActivityRecord>> {
        Ok(load_activities(&pool.conn)?)
    }

    /// Pure in-memory filter; keeps the input order.
    pub fn filter(records: &[ActivityRecord], filter: &RecordFilter) -> Vec<ActivityRecord> {
        records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }

    /// Sorted distinct employees and projects present in `records`.
    pub fn filter_options(records: &[ActivityRecord]) -> (Vec<String>, Vec<String>) {
        let employees: BTreeSet<&str> = records.iter().map(|r| r.employee.as_str()).collect();
        let projects: BTreeSet<&str> = records.iter().map(|r| r.project.as_str()).collect();

        (
            employees.into_iter().map(String::from).collect(),
            projects.into_iter().map(String::from).collect(),
        )
    }

    pub fn find_record(pool: &mut DbPool, id: RecordId) -> AppResult<Option<ActivityRecord>> {
        Ok(find_activity(&pool.conn, id)?)
    }

    /// Change project and note; every other column is immutable.
    pub fn edit_record(
        pool: &mut DbPool,
        id: RecordId,
        project: &str,
        note: &str,
    ) -> AppResult<RecordChange> {
        let change = RecordChange::from_rows(update_activity(
            &pool.conn,
            id,
            project.trim(),
            note.trim(),
        )?);

        if change == RecordChange::Applied {
            ttlog_soft(
                &pool.conn,
                "edit",
                &format!("#{id}"),
                &format!("project={} note={}", project.trim(), note.trim()),
            );
        }

        Ok(change)
    }

    pub fn delete_record(pool: &mut DbPool, id: RecordId) -> AppResult<RecordChange> {
        let change = RecordChange::from_rows(delete_activity(&pool.conn, id)?);

        if change == RecordChange::Applied {
            ttlog_soft(&pool.conn, "del", &format!("#{id}"), "Activity record deleted");
        }

        Ok(change)
    }

    /// Today's standups (civil date), in submission order, with blocker flag.
    pub fn today_updates(pool: &mut DbPool, clock: &CivilClock) -> AppResult<Vec<DailyEntry>> {
        let updates = load_daily_by_date(&pool.conn, &clock.today())?;
        Ok(updates.into_iter().map(DailyEntry::from).collect())
    }
}
