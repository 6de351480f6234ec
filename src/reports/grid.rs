use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use keyload::geometry::KeyboardGrid;
use keyload::layouts::{LayoutDefinition, VariantKind};

const ROWS: usize = 4;
const COLS: usize = 13;

/// Draws the base layer of a layout on the alphanumeric block.
pub fn print_layout(def: &LayoutDefinition, grid: &KeyboardGrid) {
    println!("\nLayout: {} ({})", def.layout().display_name(), def.layout());

    let mut cells = [[' '; COLS]; ROWS];
    let mut entries: Vec<_> = def.table(VariantKind::Normal).iter().collect();
    entries.sort_by_key(|(c, _)| **c);

    for (&c, binding) in entries {
        let Some(pos) = grid.coordinate_of(binding.code) else {
            continue;
        };
        if pos.row < 0 || pos.col < 0 {
            continue;
        }
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row < ROWS && col < COLS && cells[row][col] == ' ' {
            cells[row][col] = c;
        }
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    for row in cells.iter() {
        let cells: Vec<Cell> = row
            .iter()
            .map(|c| Cell::new(c).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}
