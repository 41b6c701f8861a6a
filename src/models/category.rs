use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Closed set of task categories an activity can be logged under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TaskCategory {
    Scraping,
    DataProcessing,
    UploadDelivery,
    BugFix,
    Meeting,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 5] = [
        TaskCategory::Scraping,
        TaskCategory::DataProcessing,
        TaskCategory::UploadDelivery,
        TaskCategory::BugFix,
        TaskCategory::Meeting,
    ];

    /// Human label, also the value stored in `activity_log.category`.
    pub fn label(&self) -> &'static str {
        match self {
            TaskCategory::Scraping => "Scraping",
            TaskCategory::DataProcessing => "Data Processing",
            TaskCategory::UploadDelivery => "Upload/Delivery",
            TaskCategory::BugFix => "Bug Fix",
            TaskCategory::Meeting => "Meeting",
        }
    }

    /// Short kebab-case form accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            TaskCategory::Scraping => "scraping",
            TaskCategory::DataProcessing => "data-processing",
            TaskCategory::UploadDelivery => "upload-delivery",
            TaskCategory::BugFix => "bug-fix",
            TaskCategory::Meeting => "meeting",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == s)
    }
}

impl FromStr for TaskCategory {
    type Err = AppError;

    /// Accepts the label (case-insensitive) or the slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted) || c.slug() == wanted)
            .ok_or_else(|| AppError::InvalidCategory(s.to_string()))
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
