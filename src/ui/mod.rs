pub mod card;
pub mod search_bar;
pub mod theme;
