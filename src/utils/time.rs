//! Time utilities: the civil clock used for "now" / "today", and
//! conversions between stored instants and civil dates.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Source of the current instant, bound to the civil timezone.
///
/// Commands use [`CivilClock::frozen`]; tests pin the instant with
/// [`CivilClock::fixed`] to simulate a given calendar day.
#[derive(Debug, Clone, Copy)]
pub struct CivilClock {
    tz: Tz,
    instant: DateTime<Utc>,
}

impl CivilClock {
    /// System time read once: every later `now()` / `today()` returns the
    /// same instant, so stored values and printed confirmations agree.
    pub fn frozen(tz: Tz) -> Self {
        Self::fixed(tz, Utc::now())
    }

    pub fn fixed(tz: Tz, instant: DateTime<Utc>) -> Self {
        Self { tz, instant }
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Current calendar date in the civil timezone.
    pub fn today(&self) -> NaiveDate {
        self.now().with_timezone(&self.tz).date_naive()
    }
}

pub fn parse_instant(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn format_instant(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
