//! Presentation capabilities the gallery pipeline renders into

use crate::error::PresentationError;

pub const READ_MORE: &str = "Read more";
pub const SHOW_LESS: &str = "Show less";

/// Region of the screen that holds the cards
pub trait DisplayRegion {
    /// Remove everything currently shown
    fn clear(&mut self);

    /// Replace the contents with the loading indicator
    fn show_loading(&mut self);

    /// Show a single line of text (empty results, errors)
    fn show_message(&mut self, message: &str);

    /// Append one card
    fn push_card(&mut self, card: Card);
}

/// Text entry that drives the search
pub trait SearchInput {
    /// Whether the control exists at all
    fn is_available(&self) -> bool;

    /// Start delivering input changes to the search controller
    fn enable(&mut self);
}

/// Checks the input exists, then turns it on.
pub fn attach(input: &mut impl SearchInput) -> Result<(), PresentationError> {
    if !input.is_available() {
        tracing::error!("Search input not found!");
        return Err(PresentationError::MissingElement("search input"));
    }
    input.enable();
    Ok(())
}

/// In-memory display region: whatever was last put on screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Board {
    #[default]
    Empty,
    Loading,
    Message(String),
    Cards(Vec<Card>),
}

impl DisplayRegion for Board {
    fn clear(&mut self) {
        *self = Board::Empty;
    }

    fn show_loading(&mut self) {
        *self = Board::Loading;
    }

    fn show_message(&mut self, message: &str) {
        *self = Board::Message(message.to_string());
    }

    fn push_card(&mut self, card: Card) {
        match self {
            Board::Cards(cards) => cards.push(card),
            _ => *self = Board::Cards(vec![card]),
        }
    }
}

/// Everything a card shows for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub image_url: String,
    pub title: String,
    pub is_latest: bool,
    pub formatted_date: String,
    pub credit: Option<String>,
    pub full_text: String,
    pub truncated_text: String,
    pub displayed_text: String,
    pub toggle_label: &'static str,
}

impl Card {
    /// Swap between the truncated and the full explanation
    pub fn toggle(&mut self) {
        if self.displayed_text == self.truncated_text {
            self.displayed_text = self.full_text.clone();
            self.toggle_label = SHOW_LESS;
        } else {
            self.displayed_text = self.truncated_text.clone();
            self.toggle_label = READ_MORE;
        }
    }
}
