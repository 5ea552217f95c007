//! UI-independent gallery pipeline: date window, filtering, rendering, search

pub mod bootstrap;
pub mod date_range;
pub mod display;
pub mod filter;
pub mod render;
pub mod search;

#[cfg(test)]
pub mod testing;
