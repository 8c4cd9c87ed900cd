//! Dates shown on the site
//!
//! Pages never read the system clock directly. They receive a [`Clock`] so
//! the "as of" date in the SEO copy can be pinned in tests.

use chrono::{Datelike, Duration, NaiveDate, Utc};

/// Western Indonesia Time (WIB) offset from UTC.
const WIB_OFFSET_HOURS: i64 = 7;

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Source of the current date
pub trait Clock: Send + Sync {
    /// Today's date in the site's timezone
    fn today(&self) -> NaiveDate;
}

/// Wall clock in WIB
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        (Utc::now().naive_utc() + Duration::hours(WIB_OFFSET_HOURS)).date()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Format a date the way Indonesian readers expect, e.g. `17 Oktober 2026`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} {month} {}", date.day(), date.year())
}
