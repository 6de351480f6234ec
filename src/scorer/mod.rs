pub mod costs;
pub mod engine;
pub mod resolver;
pub mod types;

pub use self::resolver::{ModifierPress, PressRecord};
pub use self::types::{PressTally, TypingStats};

use crate::core_types::{Finger, KeyCode};
use crate::corpus::CharFilter;
use crate::error::KlResult;
use crate::geometry::KeyboardGrid;
use crate::layouts::{KnownLayout, LayoutDefinition};
use tracing::debug;

/// Text analyzer bound to one layout. Holds no mutable state, so a single
/// instance may be shared, but the runner builds one per layout anyway.
#[derive(Debug, Clone)]
pub struct Analyzer {
    grid: &'static KeyboardGrid,
    layout: LayoutDefinition,
}

impl Analyzer {
    pub fn new(layout: KnownLayout) -> Self {
        Self {
            grid: KeyboardGrid::standard(),
            layout: LayoutDefinition::new(layout),
        }
    }

    /// Fails with a configuration error for identifiers outside the catalog.
    pub fn from_name(name: &str) -> KlResult<Self> {
        Ok(Self {
            grid: KeyboardGrid::standard(),
            layout: LayoutDefinition::from_name(name)?,
        })
    }

    pub fn layout(&self) -> &LayoutDefinition {
        &self.layout
    }

    pub fn path_cost(&self, code: KeyCode, finger: Finger) -> u32 {
        costs::path_cost(self.grid, &self.layout, code, finger)
    }

    pub fn resolve(&self, c: char) -> Option<PressRecord> {
        resolver::resolve(self.grid, &self.layout, c)
    }

    /// Analyzes the whole text as given. `None` for empty input.
    pub fn analyze(&self, text: &str, text_name: &str) -> Option<TypingStats> {
        self.analyze_with(text, text_name, None)
    }

    /// Like [`Analyzer::analyze`], but an optional filter narrows the text
    /// before any character is resolved.
    pub fn analyze_with(
        &self,
        text: &str,
        text_name: &str,
        filter: Option<&CharFilter>,
    ) -> Option<TypingStats> {
        if text.is_empty() {
            return None;
        }

        let tally = match filter {
            Some(f) => engine::tally_chars(self.grid, &self.layout, f.apply(text)),
            None => engine::tally_chars(self.grid, &self.layout, text.chars()),
        };

        debug!(
            "{} / {}: {} analyzed, {} skipped",
            self.layout.layout(),
            text_name,
            tally.characters_analyzed,
            tally.characters_skipped
        );

        Some(TypingStats::from_tally(text_name, self.layout.layout(), &tally))
    }
}
