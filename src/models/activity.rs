use super::{action::ActionType, category::TaskCategory};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

pub type RecordId = i64;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRecord {
    pub id: RecordId,             // ⇔ activity_log.id (AUTOINCREMENT)
    pub employee: String,         // ⇔ activity_log.employee (free text)
    pub project: String,          // ⇔ activity_log.project
    pub category: TaskCategory,   // ⇔ activity_log.category (label)
    pub action: ActionType,       // ⇔ activity_log.action_type ('START' | 'END')
    pub timestamp: DateTime<Utc>, // ⇔ activity_log.timestamp (RFC 3339, UTC)
    pub note: String,             // ⇔ activity_log.note (TEXT, default '')
}

impl ActivityRecord {
    /// Stored instant rendered in the civil timezone.
    pub fn display_timestamp(&self, tz: Tz, format: &str) -> String {
        self.timestamp.with_timezone(&tz).format(format).to_string()
    }

    /// Calendar date of the event in the civil timezone.
    pub fn civil_date(&self, tz: Tz) -> NaiveDate {
        self.timestamp.with_timezone(&tz).date_naive()
    }
}

/// Payload for a new activity row; the timestamp is never caller-supplied.
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub employee: String,
    pub project: String,
    pub category: TaskCategory,
    pub action: ActionType,
    pub note: String,
}
