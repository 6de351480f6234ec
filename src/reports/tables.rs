use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keyload::core_types::Finger;
use keyload::corpus::TextSource;
use keyload::layouts::{KnownLayout, LayoutDefinition, VariantKind};
use keyload::scorer::TypingStats;
use strum::IntoEnumIterator;

fn right_align(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// One row per (text, layout), texts in source order, layouts in catalog order.
pub fn summary(results: &[(KnownLayout, &[TypingStats])], sources: &[TextSource]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Text").add_attribute(Attribute::Bold),
        Cell::new("Layout").add_attribute(Attribute::Bold),
        Cell::new("Chars"),
        Cell::new("Presses"),
        Cell::new("Pr/Ch"),
        Cell::new("Path").fg(Color::Cyan),
        Cell::new("Avg"),
        Cell::new("Left %"),
        Cell::new("Right %"),
        Cell::new("2-Hand %"),
        Cell::new("Shift"),
        Cell::new("Alt"),
    ]);
    right_align(&mut table, 2..=11);

    for source in sources {
        for (layout, records) in results {
            let Some(s) = records.iter().find(|r| r.text_name == source.name) else {
                continue;
            };
            table.add_row(vec![
                Cell::new(&s.text_name),
                Cell::new(layout.display_name()).add_attribute(Attribute::Bold),
                Cell::new(s.characters_analyzed),
                Cell::new(s.total_presses),
                Cell::new(format!("{:.2}", s.average_presses_per_char)),
                Cell::new(s.total_path).fg(Color::Cyan),
                Cell::new(format!("{:.2}", s.average_path)),
                Cell::new(format!("{:.1}", s.left_hand_only_percentage)),
                Cell::new(format!("{:.1}", s.right_hand_only_percentage)),
                Cell::new(format!("{:.1}", s.two_handed_percentage)),
                Cell::new(s.shift_count),
                Cell::new(s.alt_count),
            ]);
        }
    }

    println!("\n{}", table);
}

/// Per-finger load of a single record. Idle fingers are left out.
pub fn finger_load(stats: &TypingStats) {
    println!(
        "\n{} / {}",
        stats.layout.display_name(),
        stats.text_name
    );

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Finger").add_attribute(Attribute::Bold),
        Cell::new("Presses"),
        Cell::new("Share %"),
        Cell::new("Path"),
    ]);
    right_align(&mut table, 1..=3);

    for finger in Finger::iter() {
        let count = stats.finger_count(finger);
        if count == 0 {
            continue;
        }
        table.add_row(vec![
            Cell::new(finger.label()),
            Cell::new(count),
            Cell::new(format!("{:.1}", stats.finger_share(finger))),
            Cell::new(stats.finger_path(finger)),
        ]);
    }
    println!("{}", table);

    println!(
        "Space (R Thumb): {:.1}% | Modifiers (L Thumb): {:.1}% | Hands: L {:.1}% / R {:.1}%",
        stats.finger_share(Finger::RightThumb),
        stats.finger_share(Finger::LeftThumb),
        stats.left_hand_percentage,
        stats.right_hand_percentage
    );
}

pub fn catalog(layouts: &[LayoutDefinition]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Name"),
        Cell::new("Base"),
        Cell::new("Caps"),
        Cell::new("Shift"),
        Cell::new("Alt"),
    ]);
    right_align(&mut table, 2..=5);

    for def in layouts {
        let mut row = vec![
            Cell::new(def.layout()).add_attribute(Attribute::Bold),
            Cell::new(def.layout().display_name()),
        ];
        row.extend(VariantKind::iter().map(|kind| Cell::new(def.table(kind).len())));
        table.add_row(row);
    }

    println!("\n{}", table);
}
