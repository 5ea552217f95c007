//! Title search over the valid record set

use crate::backend::types::Record;
use crate::gallery::display::DisplayRegion;
use crate::gallery::render::{Origin, Renderer, ValidRecordSet};

/// Owns the search domain once the initial load has produced it
#[derive(Debug, Clone)]
pub struct SearchController {
    valid: ValidRecordSet,
    renderer: Renderer,
}

impl SearchController {
    pub fn new(valid: ValidRecordSet, renderer: Renderer) -> Self {
        Self { valid, renderer }
    }

    pub fn valid(&self) -> &ValidRecordSet {
        &self.valid
    }

    /// Re-render for the current contents of the search box
    pub fn on_input(&self, raw: &str, display: &mut impl DisplayRegion) {
        let query = normalize(raw);

        if query.is_empty() {
            self.renderer
                .render(self.valid.records(), Origin::SearchResult, display);
            return;
        }

        let matches = self.matching(&query);
        tracing::debug!("Search {:?} matched {} record(s)", query, matches.len());
        self.renderer.render(&matches, Origin::SearchResult, display);
    }

    fn matching(&self, query: &str) -> Vec<Record> {
        self.valid
            .records()
            .iter()
            .filter(|r| r.title.to_lowercase().contains(query))
            .cloned()
            .collect()
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
