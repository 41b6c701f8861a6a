use crate::models::activity::ActivityRecord;
use chrono_tz::Tz;
use serde::Serialize;

/// Flat row written by the CSV / JSON exporters.
#[derive(Serialize, Clone, Debug)]
pub struct ActivityExport {
    pub id: i64,
    pub employee: String,
    pub project: String,
    pub category: String,
    pub action_type: String,
    /// Stored instant, RFC 3339 UTC.
    pub timestamp: String,
    /// Same instant in the civil timezone, display format.
    pub local_time: String,
    pub note: String,
}

impl ActivityExport {
    pub fn from_record(r: &ActivityRecord, tz: Tz, display_format: &str) -> Self {
        Self {
            id: r.id,
            employee: r.employee.clone(),
            project: r.project.clone(),
            category: r.category.label().to_string(),
            action_type: r.action.to_db_str().to_string(),
            timestamp: r.timestamp.to_rfc3339(),
            local_time: r.display_timestamp(tz, display_format),
            note: r.note.clone(),
        }
    }
}
