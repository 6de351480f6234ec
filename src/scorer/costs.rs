use crate::core_types::{Finger, KeyCode};
use crate::geometry::KeyboardGrid;
use crate::layouts::LayoutDefinition;

/// Flat price of holding Shift or Alt with a thumb.
pub const MODIFIER_COST: u32 = 1;

/// Travel from `finger`'s home key to `code`, as a Manhattan grid distance.
///
/// Thumbs never travel. A key (or home key) missing from the grid costs 0 so
/// that an incomplete table never blocks analysis.
pub fn path_cost(grid: &KeyboardGrid, layout: &LayoutDefinition, code: KeyCode, finger: Finger) -> u32 {
    if finger.is_thumb() {
        return 0;
    }

    let home = grid.coordinate_of(layout.home_key(finger));
    let target = grid.coordinate_of(code);

    match (home, target) {
        (Some(h), Some(t)) => h.manhattan(t),
        _ => 0,
    }
}
