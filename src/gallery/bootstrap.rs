//! Startup sequence: loading indicator, fetch, render, enable search
//!
//! The await sits between [`begin`] and [`finish`] so an event loop can run
//! the fetch itself; [`bootstrap`] chains all three for direct callers.

use crate::backend::api::RecordSource;
use crate::backend::types::Fetched;
use crate::error::{FetchError, GalleryError};
use crate::gallery::display::{attach, DisplayRegion, SearchInput};
use crate::gallery::render::{Origin, Renderer, ValidRecordSet};
use crate::gallery::search::SearchController;

pub const LOAD_ERROR: &str = "Error loading planets. Please try again later.";

pub fn begin(display: &mut impl DisplayRegion) {
    display.show_loading();
}

/// Render the fetched batch and hand the search domain to a controller
pub fn finish(
    fetched: Result<Fetched, FetchError>,
    renderer: Renderer,
    display: &mut impl DisplayRegion,
    input: &mut impl SearchInput,
) -> Result<SearchController, GalleryError> {
    let result = fetched.map_err(GalleryError::from).and_then(|fetched| {
        let records = fetched.into_records();
        let mut valid = ValidRecordSet::default();
        renderer.render(&records, Origin::InitialLoad(&mut valid), display);
        attach(input)?;
        Ok(SearchController::new(valid, renderer))
    });

    if let Err(e) = &result {
        tracing::error!("Error fetching planets: {}", e);
        display.clear();
        display.show_message(LOAD_ERROR);
    }
    result
}

pub async fn bootstrap(
    source: &impl RecordSource,
    renderer: Renderer,
    display: &mut impl DisplayRegion,
    input: &mut impl SearchInput,
) -> Result<SearchController, GalleryError> {
    begin(display);
    let fetched = source.fetch_records().await;
    finish(fetched, renderer, display, input)
}
