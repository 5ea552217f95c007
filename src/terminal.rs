//! Plain-text rendering for the `list` command
//!
//! Output is held on a [`Board`] while the pipeline runs and printed once at
//! the end, so a search that re-renders replaces the initial cards instead of
//! appending to them.

use std::io::{self, Write};

use crate::gallery::display::{Board, Card, DisplayRegion, SearchInput};

const RULE: &str = "────────────────────────────────────────";

pub struct TerminalDisplay<W: Write> {
    out: W,
    expand: bool,
    board: Board,
}

impl<W: Write> TerminalDisplay<W> {
    /// `expand` prints the full explanation instead of the preview
    pub fn new(out: W, expand: bool) -> Self {
        Self {
            out,
            expand,
            board: Board::Empty,
        }
    }

    /// Print whatever is on the board and hand the writer back
    pub fn finish(mut self) -> io::Result<W> {
        match std::mem::take(&mut self.board) {
            Board::Empty | Board::Loading => {}
            Board::Message(message) => writeln!(self.out, "{}", message)?,
            Board::Cards(cards) => {
                for (i, card) in cards.into_iter().enumerate() {
                    if i > 0 {
                        writeln!(self.out, "{}", RULE)?;
                    }
                    self.write_card(card)?;
                }
            }
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_card(&mut self, mut card: Card) -> io::Result<()> {
        if self.expand {
            card.toggle();
        }
        if card.is_latest {
            writeln!(self.out, "{}  [Latest picture]", card.title)?;
        } else {
            writeln!(self.out, "{}", card.title)?;
        }
        match &card.credit {
            Some(credit) => writeln!(self.out, "{}  {}", card.formatted_date, credit)?,
            None => writeln!(self.out, "{}", card.formatted_date)?,
        }
        writeln!(self.out, "{}", card.image_url)?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", card.displayed_text)
    }
}

impl<W: Write> DisplayRegion for TerminalDisplay<W> {
    fn clear(&mut self) {
        self.board.clear();
    }

    fn show_loading(&mut self) {
        tracing::info!("Loading...");
        self.board.show_loading();
    }

    fn show_message(&mut self, message: &str) {
        self.board.show_message(message);
    }

    fn push_card(&mut self, card: Card) {
        self.board.push_card(card);
    }
}

/// The query given on the command line acts as the search box
pub struct ArgsQuery;

impl SearchInput for ArgsQuery {
    fn is_available(&self) -> bool {
        true
    }

    fn enable(&mut self) {}
}
