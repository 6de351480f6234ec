use crate::core_types::KeyCode;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const KEY_SHIFT: KeyCode = 42;
pub const KEY_BACKSLASH: KeyCode = 43;
pub const KEY_SPACE: KeyCode = 57;

/// Column used for keys without a natural horizontal position (Shift).
pub const NO_COLUMN: i8 = -1;

/// Upper bound (exclusive) on the scan codes the grid knows about.
const GRID_CODE_RANGE: usize = 64;

/// Row 0 is the number row; rows grow toward the bottom of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: i8,
    pub col: i8,
}

impl GridPos {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Manhattan distance: a diagonal move costs the sum of its components.
    pub fn manhattan(self, other: GridPos) -> u32 {
        (self.row as i32 - other.row as i32).unsigned_abs()
            + (self.col as i32 - other.col as i32).unsigned_abs()
    }
}

/// Fixed key code -> (row, col) map shared by every layout.
#[derive(Debug, Clone)]
pub struct KeyboardGrid {
    cells: Vec<Option<GridPos>>,
}

impl KeyboardGrid {
    /// The standard ANSI/ISO alphanumeric block, built once per process.
    pub fn standard() -> &'static KeyboardGrid {
        static GRID: OnceLock<KeyboardGrid> = OnceLock::new();
        GRID.get_or_init(build_standard_grid)
    }

    pub fn from_entries(entries: &[(KeyCode, GridPos)]) -> Self {
        let mut cells = vec![None; GRID_CODE_RANGE];
        for &(code, pos) in entries {
            let idx = code as usize;
            if idx >= cells.len() {
                cells.resize(idx + 1, None);
            }
            cells[idx] = Some(pos);
        }
        Self { cells }
    }

    /// `None` for codes that have no place on the grid.
    pub fn coordinate_of(&self, code: KeyCode) -> Option<GridPos> {
        self.cells.get(code as usize).copied().flatten()
    }

    pub fn key_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

fn build_standard_grid() -> KeyboardGrid {
    let mut entries = Vec::with_capacity(50);

    // Number row (codes 2..=14)
    for (col, code) in (2..=14).enumerate() {
        entries.push((code, GridPos::new(0, col as i8)));
    }
    // Top row: й .. ъ (16..=27)
    for (col, code) in (16..=27).enumerate() {
        entries.push((code, GridPos::new(1, col as i8)));
    }
    // Home row: ф .. э (30..=40)
    for (col, code) in (30..=40).enumerate() {
        entries.push((code, GridPos::new(2, col as i8)));
    }
    // Bottom row starts with the ё/` key (41), then 44..=53.
    entries.push((41, GridPos::new(3, 0)));
    for (col, code) in (44..=53).enumerate() {
        entries.push((code, GridPos::new(3, col as i8 + 1)));
    }

    entries.push((KEY_SHIFT, GridPos::new(3, NO_COLUMN)));
    entries.push((KEY_BACKSLASH, GridPos::new(1, 12)));
    entries.push((KEY_SPACE, GridPos::new(4, 5)));

    KeyboardGrid::from_entries(&entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_grid_places_landmarks() {
        let grid = KeyboardGrid::standard();
        assert_eq!(grid.coordinate_of(2), Some(GridPos::new(0, 0)));
        assert_eq!(grid.coordinate_of(14), Some(GridPos::new(0, 12)));
        assert_eq!(grid.coordinate_of(27), Some(GridPos::new(1, 11)));
        assert_eq!(grid.coordinate_of(33), Some(GridPos::new(2, 3)));
        assert_eq!(grid.coordinate_of(41), Some(GridPos::new(3, 0)));
        assert_eq!(grid.coordinate_of(53), Some(GridPos::new(3, 10)));
        assert_eq!(grid.coordinate_of(KEY_SHIFT), Some(GridPos::new(3, -1)));
        assert_eq!(grid.coordinate_of(KEY_SPACE), Some(GridPos::new(4, 5)));
        assert_eq!(grid.key_count(), 50);
    }

    #[test]
    fn unknown_codes_have_no_coordinate() {
        let grid = KeyboardGrid::standard();
        assert_eq!(grid.coordinate_of(1), None);
        assert_eq!(grid.coordinate_of(15), None);
        assert_eq!(grid.coordinate_of(500), None);
    }

    #[test]
    fn manhattan_sums_components() {
        let a = GridPos::new(2, 3);
        let b = GridPos::new(1, 5);
        assert_eq!(a.manhattan(b), 3);
        assert_eq!(b.manhattan(a), 3);
        assert_eq!(a.manhattan(a), 0);
    }
}
