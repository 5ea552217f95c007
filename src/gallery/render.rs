//! Turns records into cards on a display region

use chrono::{Local, NaiveDate};

use crate::backend::types::Record;
use crate::gallery::display::{Card, DisplayRegion, READ_MORE};
use crate::gallery::filter::filter_valid;

pub const NO_MATCHES: &str = "No articles are matching your search.";
pub const PREVIEW_CHARS: usize = 150;

/// Filtered result of the last full load; the search domain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidRecordSet(Vec<Record>);

impl ValidRecordSet {
    /// Replace the contents with the valid subset of `records`
    pub fn replace_from(&mut self, records: &[Record]) {
        self.0 = filter_valid(records);
    }

    pub fn records(&self) -> &[Record] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Where the records being rendered came from
pub enum Origin<'a> {
    /// Fresh fetch: filter first and store the result
    InitialLoad(&'a mut ValidRecordSet),
    /// Already narrowed by search: render as given
    SearchResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    today: NaiveDate,
}

impl Renderer {
    /// Renderer whose "latest" badge follows the local calendar
    pub fn for_today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn render(&self, records: &[Record], origin: Origin<'_>, display: &mut impl DisplayRegion) {
        display.clear();

        let shown = match origin {
            Origin::InitialLoad(valid) => {
                valid.replace_from(records);
                tracing::info!("{} of {} record(s) are displayable images", valid.len(), records.len());
                valid.records()
            }
            Origin::SearchResult => records,
        };

        if shown.is_empty() {
            display.show_message(NO_MATCHES);
            return;
        }

        for record in shown {
            display.push_card(self.card(record));
        }
    }

    pub fn card(&self, record: &Record) -> Card {
        let truncated_text = truncate(&record.explanation);
        Card {
            image_url: record.url.clone().unwrap_or_default(),
            title: record.title.clone(),
            is_latest: self.is_today(record),
            formatted_date: record.day().map(long_date).unwrap_or_else(|| record.date.clone()),
            credit: record
                .copyright
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(|c| format!("© {}", c)),
            full_text: record.explanation.clone(),
            displayed_text: truncated_text.clone(),
            truncated_text,
            toggle_label: READ_MORE,
        }
    }

    fn is_today(&self, record: &Record) -> bool {
        record
            .day()
            .map(|day| long_date(day) == long_date(self.today))
            .unwrap_or(false)
    }
}

/// en-US long form, e.g. "March 5, 2024"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn truncate(text: &str) -> String {
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}
