use super::resolver::resolve;
use super::types::PressTally;
use crate::geometry::KeyboardGrid;
use crate::layouts::LayoutDefinition;

/// Single pass over `chars`, in order. Unresolvable characters only bump the
/// skip counter.
pub fn tally_chars<I>(grid: &KeyboardGrid, layout: &LayoutDefinition, chars: I) -> PressTally
where
    I: IntoIterator<Item = char>,
{
    let mut tally = PressTally::default();

    for c in chars {
        match resolve(grid, layout, c) {
            Some(press) => tally.record(&press),
            None => tally.skip(),
        }
    }

    tally
}
