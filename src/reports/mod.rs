pub mod export;
mod grid;
mod tables;

pub use self::grid::print_layout as print_layout_grid;
pub use self::tables::{catalog as print_catalog, finger_load as print_finger_report, summary as print_summary};

use keyload::layouts::KnownLayout;
use keyload::runner::LayoutResults;
use keyload::scorer::TypingStats;
use strum::IntoEnumIterator;

/// Records in catalog order, skipping layouts that were not run.
pub fn in_catalog_order(results: &LayoutResults) -> Vec<(KnownLayout, &[TypingStats])> {
    KnownLayout::iter()
        .filter_map(|layout| results.get(&layout).map(|r| (layout, r.as_slice())))
        .collect()
}
