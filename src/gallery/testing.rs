//! Test doubles for the presentation capabilities and the record source

use crate::backend::api::RecordSource;
use crate::backend::types::{Fetched, Record};
use crate::error::FetchError;
use crate::gallery::display::{Board, Card, DisplayRegion, SearchInput};

pub fn record(date: &str, title: &str, url: &str) -> Record {
    Record {
        date: date.to_string(),
        title: title.to_string(),
        explanation: format!("{} explained at length.", title),
        url: Some(url.to_string()),
        media_type: "image".to_string(),
        copyright: None,
        msg: None,
    }
}

/// Display region that counts calls and keeps what it was last asked to show
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub shown: Board,
    pub clears: usize,
    pub loading_shown: usize,
}

impl RecordingDisplay {
    pub fn titles(&self) -> Vec<&str> {
        match &self.shown {
            Board::Cards(cards) => cards.iter().map(|c| c.title.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

impl DisplayRegion for RecordingDisplay {
    fn clear(&mut self) {
        self.clears += 1;
        self.shown.clear();
    }

    fn show_loading(&mut self) {
        self.loading_shown += 1;
        self.shown.show_loading();
    }

    fn show_message(&mut self, message: &str) {
        self.shown.show_message(message);
    }

    fn push_card(&mut self, card: Card) {
        self.shown.push_card(card);
    }
}

#[derive(Debug)]
pub struct ScriptedInput {
    pub available: bool,
    pub enabled: bool,
}

impl ScriptedInput {
    pub fn present() -> Self {
        Self {
            available: true,
            enabled: false,
        }
    }

    pub fn missing() -> Self {
        Self {
            available: false,
            enabled: false,
        }
    }
}

impl SearchInput for ScriptedInput {
    fn is_available(&self) -> bool {
        self.available
    }

    fn enable(&mut self) {
        self.enabled = true;
    }
}

/// Record source that replays a canned result
pub struct ScriptedSource(pub Result<Fetched, FetchError>);

impl RecordSource for ScriptedSource {
    async fn fetch_records(&self) -> Result<Fetched, FetchError> {
        self.0.clone()
    }
}
