mod common;

use keyload::core_types::Finger;
use keyload::corpus::CharFilter;
use keyload::layouts::KnownLayout;
use keyload::scorer::{Analyzer, TypingStats};
use rstest::rstest;
use strum::IntoEnumIterator;

fn ytsuken(text: &str) -> TypingStats {
    Analyzer::new(KnownLayout::Ytsuken)
        .analyze(text, "t")
        .expect("non-empty text")
}

fn assert_consistent(s: &TypingStats) {
    assert_eq!(s.total_path, s.finger_paths.values().sum::<u64>());
    assert_eq!(s.total_presses, s.finger_counts.values().sum::<u64>());
    assert_eq!(
        s.total_presses,
        s.characters_analyzed + s.shift_count + s.alt_count
    );
    assert_eq!(s.classified_presses, s.characters_analyzed);
    assert_eq!(
        s.classified_presses,
        s.left_hand_only + s.right_hand_only + s.two_handed
    );
    assert_eq!(s.two_handed, s.shift_count + s.alt_count);
    assert_eq!(s.left_hand_count + s.right_hand_count, s.total_presses);
    assert_eq!(s.finger_counts.len(), 10);
    assert_eq!(s.finger_paths.len(), 10);
}

// --- SINGLE CHARACTERS ---

#[test]
fn lowercase_home_letter() {
    let s = ytsuken("а");
    assert_eq!(s.total_presses, 1);
    assert_eq!(s.total_path, 0);
    assert_eq!(s.finger_count(Finger::LeftIndex), 1);
    assert_eq!(s.characters_analyzed, 1);
    assert_eq!(s.left_hand_only, 1);
    assert_eq!(s.left_hand_only_percentage, 100.0);
    assert_eq!(s.left_hand_percentage, 100.0);
    assert_eq!(s.right_hand_percentage, 0.0);
    assert_consistent(&s);
}

#[test]
fn capital_letter_adds_a_shift_press() {
    let s = ytsuken("А");
    assert_eq!(s.total_presses, 2);
    assert_eq!(s.shift_count, 1);
    assert_eq!(s.alt_count, 0);
    assert_eq!(s.total_path, 1);
    assert_eq!(s.finger_count(Finger::LeftIndex), 1);
    assert_eq!(s.finger_count(Finger::LeftThumb), 1);
    assert_eq!(s.finger_path(Finger::LeftThumb), 1);
    assert_eq!(s.two_handed, 1);
    assert_eq!(s.classified_presses, 1);
    assert_eq!(s.two_handed_percentage, 50.0);
    // No single-hand presses at all.
    assert_eq!(s.left_hand_percentage, 0.0);
    assert_consistent(&s);
}

#[test]
fn alt_letter_uses_right_thumb() {
    let s = Analyzer::new(KnownLayout::Vyzov)
        .analyze("ц", "t")
        .unwrap();
    assert_eq!(s.alt_count, 1);
    assert_eq!(s.shift_count, 0);
    assert_eq!(s.total_presses, 2);
    assert_eq!(s.total_path, 2);
    assert_eq!(s.finger_count(Finger::LeftRing), 1);
    assert_eq!(s.finger_count(Finger::RightThumb), 1);
    assert_eq!(s.two_handed, 1);
    assert_consistent(&s);
}

#[test]
fn space_is_right_hand_only() {
    let s = ytsuken(" ");
    assert_eq!(s.right_hand_only, 1);
    assert_eq!(s.total_path, 0);
    assert_eq!(s.finger_count(Finger::RightThumb), 1);
    assert_eq!(s.right_hand_percentage, 100.0);
}

// --- WHOLE TEXTS ---

#[test]
fn empty_text_has_no_record() {
    let analyzer = Analyzer::new(KnownLayout::Ytsuken);
    assert!(analyzer.analyze("", "empty").is_none());
    assert!(analyzer
        .analyze_with("", "empty", Some(&CharFilter::common()))
        .is_none());
}

#[test]
fn untypeable_text_yields_an_all_zero_record() {
    let s = ytsuken("QWE\n");
    assert_eq!(s.characters_analyzed, 0);
    assert_eq!(s.characters_skipped, 4);
    assert_eq!(s.total_presses, 0);
    assert_eq!(s.average_path, 0.0);
    assert_eq!(s.left_hand_percentage, 0.0);
    assert_consistent(&s);
}

#[test]
fn skipped_characters_are_counted_separately() {
    let s = ytsuken("аQб");
    assert_eq!(s.characters_analyzed, 2);
    assert_eq!(s.characters_skipped, 1);
    assert_eq!(s.total_presses, 2);
}

#[test]
fn averages_are_per_analyzed_character() {
    // й (1) + ц (1) + а (0) + А (0 + 1)
    let s = ytsuken("йцаА");
    assert_eq!(s.characters_analyzed, 4);
    assert_eq!(s.total_path, 3);
    assert_eq!(s.total_presses, 5);
    assert_eq!(s.average_path, 0.75);
    assert_eq!(s.average_presses_per_char, 1.25);
}

#[test]
fn record_carries_names() {
    let s = Analyzer::new(KnownLayout::Ant)
        .analyze(common::PROSE, "Война и мир")
        .unwrap();
    assert_eq!(s.text_name, "Война и мир");
    assert_eq!(s.layout, KnownLayout::Ant);
}

#[rstest]
fn prose_invariants_hold(
    #[values(
        KnownLayout::Ytsuken,
        KnownLayout::Vyzov,
        KnownLayout::Rusphone,
        KnownLayout::Zubachev,
        KnownLayout::Skoropis,
        KnownLayout::Diktor,
        KnownLayout::Ant
    )]
    layout: KnownLayout,
) {
    let s = Analyzer::new(layout).analyze(common::PROSE, "prose").unwrap();
    assert!(s.characters_analyzed > 0);
    assert_eq!(
        s.characters_analyzed + s.characters_skipped,
        common::PROSE.chars().count() as u64
    );
    assert_consistent(&s);

    let pct = s.left_hand_only_percentage + s.right_hand_only_percentage + s.two_handed_percentage;
    assert!(pct <= 100.0 + 1e-9);
    assert!((s.left_hand_percentage + s.right_hand_percentage - 100.0).abs() < 1e-9);
}

#[test]
fn analysis_is_deterministic() {
    for layout in KnownLayout::iter() {
        let analyzer = Analyzer::new(layout);
        let a = analyzer.analyze(common::PROSE, "p").unwrap();
        let b = analyzer.analyze(common::PROSE, "p").unwrap();
        let c = Analyzer::new(layout).analyze(common::PROSE, "p").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.average_path.to_bits(), c.average_path.to_bits());
    }
}

// --- COMMON FILTER ---

#[test]
fn common_filter_lowercases_and_drops_the_rest() {
    let analyzer = Analyzer::new(KnownLayout::Ytsuken);
    let filter = CharFilter::common();

    let filtered = analyzer
        .analyze_with("Привет, Мир! abc", "t", Some(&filter))
        .unwrap();
    let plain = analyzer.analyze("привет, мир! ", "t").unwrap();

    assert_eq!(filtered, plain);
    assert_eq!(filtered.shift_count, 2); // ',' and '!' on ЙЦУКЕН
    assert_eq!(filtered.characters_skipped, 0);
}

#[test]
fn filter_that_removes_everything_still_reports() {
    let analyzer = Analyzer::new(KnownLayout::Ytsuken);
    let s = analyzer
        .analyze_with("abc", "t", Some(&CharFilter::common()))
        .unwrap();
    assert_eq!(s.characters_analyzed, 0);
    assert_eq!(s.characters_skipped, 0);
}
