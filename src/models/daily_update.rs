use chrono::NaiveDate;
use serde::Serialize;

/// Blocker text longer than this (after trimming) flags the update.
pub const BLOCKER_MIN_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyUpdate {
    pub id: i64,
    pub employee: String,
    pub date: NaiveDate, // ⇔ daily_updates.date (TEXT "YYYY-MM-DD")
    pub yesterday: String,
    pub today: String,
    pub blockers: String,
}

impl DailyUpdate {
    pub fn has_blocker(&self) -> bool {
        is_blocker(&self.blockers)
    }
}

/// Short answers such as "no", "-" or "n/a" do not count as a blocker.
pub fn is_blocker(text: &str) -> bool {
    text.trim().chars().count() > BLOCKER_MIN_CHARS
}

/// A daily update as shown in the admin view.
#[derive(Debug, Clone, Serialize)]
pub struct DailyEntry {
    pub update: DailyUpdate,
    pub has_blocker: bool,
}

impl From<DailyUpdate> for DailyEntry {
    fn from(update: DailyUpdate) -> Self {
        let has_blocker = update.has_blocker();
        Self {
            update,
            has_blocker,
        }
    }
}
