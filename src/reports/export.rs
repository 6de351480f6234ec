use keyload::core_types::Finger;
use keyload::layouts::KnownLayout;
use keyload::scorer::TypingStats;
use keyload::KlResult;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use strum::IntoEnumIterator;

fn open_output(path: &Path) -> KlResult<Box<dyn Write>> {
    if path.as_os_str() == "-" {
        Ok(Box::new(io::stdout().lock()))
    } else {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }
}

/// Layout -> records, keyed by layout identifier. `-` writes to stdout.
pub fn write_json(path: &Path, results: &[(KnownLayout, &[TypingStats])]) -> KlResult<()> {
    let map: BTreeMap<KnownLayout, &[TypingStats]> = results.iter().copied().collect();
    let mut out = open_output(path)?;
    serde_json::to_writer_pretty(&mut out, &map)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// One flat row per record; per-finger maps become `presses_*` / `path_*` columns.
pub fn write_csv(path: &Path, results: &[(KnownLayout, &[TypingStats])]) -> KlResult<()> {
    let mut wtr = csv::Writer::from_writer(open_output(path)?);

    let mut header: Vec<String> = [
        "layout",
        "text_name",
        "characters_analyzed",
        "characters_skipped",
        "total_presses",
        "total_path",
        "average_path",
        "average_presses_per_char",
        "shift_count",
        "alt_count",
        "left_hand_only",
        "right_hand_only",
        "two_handed",
        "left_hand_only_percentage",
        "right_hand_only_percentage",
        "two_handed_percentage",
        "left_hand_percentage",
        "right_hand_percentage",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    header.extend(Finger::iter().map(|f| format!("presses_{}", f)));
    header.extend(Finger::iter().map(|f| format!("path_{}", f)));
    wtr.write_record(&header)?;

    for (layout, records) in results {
        for s in records.iter() {
            let mut row = vec![
                layout.to_string(),
                s.text_name.clone(),
                s.characters_analyzed.to_string(),
                s.characters_skipped.to_string(),
                s.total_presses.to_string(),
                s.total_path.to_string(),
                format!("{:.4}", s.average_path),
                format!("{:.4}", s.average_presses_per_char),
                s.shift_count.to_string(),
                s.alt_count.to_string(),
                s.left_hand_only.to_string(),
                s.right_hand_only.to_string(),
                s.two_handed.to_string(),
                format!("{:.2}", s.left_hand_only_percentage),
                format!("{:.2}", s.right_hand_only_percentage),
                format!("{:.2}", s.two_handed_percentage),
                format!("{:.2}", s.left_hand_percentage),
                format!("{:.2}", s.right_hand_percentage),
            ];
            row.extend(Finger::iter().map(|f| s.finger_count(f).to_string()));
            row.extend(Finger::iter().map(|f| s.finger_path(f).to_string()));
            wtr.write_record(&row)?;
        }
    }

    wtr.flush()?;
    Ok(())
}
