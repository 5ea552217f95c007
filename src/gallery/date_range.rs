//! Lookback window for the APOD query

use chrono::{Days, NaiveDate, Utc};

/// How far back the gallery reaches, in days
pub const LOOKBACK_DAYS: u64 = 20;

/// Inclusive range of ISO `YYYY-MM-DD` dates, oldest first as the API expects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl DateRange {
    /// Window ending today (UTC)
    pub fn current() -> Self {
        Self::ending(Utc::now().date_naive())
    }

    pub fn ending(today: NaiveDate) -> Self {
        let start = today.checked_sub_days(Days::new(LOOKBACK_DAYS)).unwrap_or(NaiveDate::MIN);
        Self {
            start_date: format_iso(start),
            end_date: format_iso(today),
        }
    }
}

fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
