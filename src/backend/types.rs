//! Shared types for APOD API communication

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily entry as returned by the APOD API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub copyright: Option<String>,
    /// Set by the API instead of content when an entry is unavailable
    #[serde(default)]
    pub msg: Option<String>,
}

impl Record {
    /// Calendar day of the entry, if the date string is well formed
    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}

/// A successful response: either one entry or a list of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    Single(Record),
    Many(Vec<Record>),
}

impl Fetched {
    pub fn into_records(self) -> Vec<Record> {
        match self {
            Fetched::Single(record) => vec![record],
            Fetched::Many(records) => records,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Fetched::Single(_) => 1,
            Fetched::Many(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Fetched::Single(_) => false,
            Fetched::Many(records) => records.is_empty(),
        }
    }
}
