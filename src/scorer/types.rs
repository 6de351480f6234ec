use super::resolver::PressRecord;
use crate::core_types::{Finger, Hand, FINGER_COUNT};
use crate::layouts::{KnownLayout, VariantKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Raw counters accumulated over one pass of a text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PressTally {
    pub finger_counts: [u64; FINGER_COUNT],
    pub finger_paths: [u64; FINGER_COUNT],

    pub characters_analyzed: u64,
    pub characters_skipped: u64,

    // Modifier usage
    pub shift_count: u64,
    pub alt_count: u64,

    // Press classification (one entry per analyzed character)
    pub left_hand_only: u64,
    pub right_hand_only: u64,
    pub two_handed: u64,
}

impl PressTally {
    pub fn record(&mut self, press: &PressRecord) {
        let primary = press.finger.index();
        self.finger_counts[primary] += 1;
        self.finger_paths[primary] += press.key_cost as u64;
        self.characters_analyzed += 1;

        match press.modifier {
            Some(modifier) => {
                let idx = modifier.finger.index();
                self.finger_counts[idx] += 1;
                self.finger_paths[idx] += modifier.cost as u64;

                match press.kind {
                    VariantKind::Caps | VariantKind::Shift => self.shift_count += 1,
                    VariantKind::Alt => self.alt_count += 1,
                    VariantKind::Normal => {}
                }
                self.two_handed += 1;
            }
            None => match press.finger.hand() {
                Hand::Left => self.left_hand_only += 1,
                Hand::Right => self.right_hand_only += 1,
            },
        }
    }

    pub fn skip(&mut self) {
        self.characters_skipped += 1;
    }

    pub fn total_presses(&self) -> u64 {
        self.finger_counts.iter().sum()
    }

    pub fn total_path(&self) -> u64 {
        self.finger_paths.iter().sum()
    }

    pub fn hand_presses(&self, hand: Hand) -> u64 {
        Finger::iter()
            .filter(|f| f.hand() == hand)
            .map(|f| self.finger_counts[f.index()])
            .sum()
    }
}

/// Final per (text, layout) statistics. Built once from a finished tally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypingStats {
    pub text_name: String,
    pub layout: KnownLayout,

    pub total_path: u64,
    pub finger_paths: BTreeMap<Finger, u64>,
    pub finger_counts: BTreeMap<Finger, u64>,

    pub characters_analyzed: u64,
    pub characters_skipped: u64,
    pub shift_count: u64,
    pub alt_count: u64,
    pub total_presses: u64,
    /// `left_hand_only + right_hand_only + two_handed`: one classification
    /// per analyzed character. Smaller than `total_presses` whenever a
    /// modifier was pressed, since the modifier is not classified separately.
    pub classified_presses: u64,

    pub average_path: f64,
    pub average_presses_per_char: f64,

    // Press types (share of total presses)
    pub left_hand_only: u64,
    pub right_hand_only: u64,
    pub two_handed: u64,
    pub left_hand_only_percentage: f64,
    pub right_hand_only_percentage: f64,
    pub two_handed_percentage: f64,

    // Hand load
    pub left_hand_count: u64,
    pub right_hand_count: u64,
    /// Share of single-hand presses typed by the left hand.
    pub left_hand_percentage: f64,
    pub right_hand_percentage: f64,
}

impl TypingStats {
    /// Pure derivation: the same tally always yields the same record.
    pub fn from_tally(text_name: &str, layout: KnownLayout, tally: &PressTally) -> Self {
        let total_presses = tally.total_presses();
        let total_path = tally.total_path();
        let chars = tally.characters_analyzed;
        let single_hand = tally.left_hand_only + tally.right_hand_only;

        Self {
            text_name: text_name.to_string(),
            layout,
            total_path,
            finger_paths: per_finger(&tally.finger_paths),
            finger_counts: per_finger(&tally.finger_counts),
            characters_analyzed: chars,
            characters_skipped: tally.characters_skipped,
            shift_count: tally.shift_count,
            alt_count: tally.alt_count,
            total_presses,
            classified_presses: tally.left_hand_only + tally.right_hand_only + tally.two_handed,
            average_path: ratio(total_path, chars),
            average_presses_per_char: ratio(total_presses, chars),
            left_hand_only: tally.left_hand_only,
            right_hand_only: tally.right_hand_only,
            two_handed: tally.two_handed,
            left_hand_only_percentage: percent(tally.left_hand_only, total_presses),
            right_hand_only_percentage: percent(tally.right_hand_only, total_presses),
            two_handed_percentage: percent(tally.two_handed, total_presses),
            left_hand_count: tally.hand_presses(Hand::Left),
            right_hand_count: tally.hand_presses(Hand::Right),
            left_hand_percentage: percent(tally.left_hand_only, single_hand),
            right_hand_percentage: percent(tally.right_hand_only, single_hand),
        }
    }

    pub fn finger_count(&self, finger: Finger) -> u64 {
        self.finger_counts.get(&finger).copied().unwrap_or(0)
    }

    pub fn finger_path(&self, finger: Finger) -> u64 {
        self.finger_paths.get(&finger).copied().unwrap_or(0)
    }

    /// Share of all presses made by `finger`.
    pub fn finger_share(&self, finger: Finger) -> f64 {
        percent(self.finger_count(finger), self.total_presses)
    }
}

fn per_finger(values: &[u64; FINGER_COUNT]) -> BTreeMap<Finger, u64> {
    Finger::iter().map(|f| (f, values[f.index()])).collect()
}

/// Zero denominators yield 0 rather than NaN.
fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

fn percent(num: u64, den: u64) -> f64 {
    ratio(num, den) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tally_derives_zeroes() {
        let stats = TypingStats::from_tally("none", KnownLayout::Ytsuken, &PressTally::default());
        assert_eq!(stats.total_presses, 0);
        assert_eq!(stats.average_path, 0.0);
        assert_eq!(stats.left_hand_percentage, 0.0);
        assert_eq!(stats.two_handed_percentage, 0.0);
        assert_eq!(stats.finger_counts.len(), FINGER_COUNT);
    }

    #[test]
    fn derivation_is_idempotent() {
        let mut tally = PressTally::default();
        tally.finger_counts[Finger::LeftIndex.index()] = 3;
        tally.finger_counts[Finger::LeftThumb.index()] = 1;
        tally.finger_paths[Finger::LeftIndex.index()] = 2;
        tally.finger_paths[Finger::LeftThumb.index()] = 1;
        tally.characters_analyzed = 3;
        tally.left_hand_only = 2;
        tally.two_handed = 1;
        tally.shift_count = 1;

        let a = TypingStats::from_tally("t", KnownLayout::Ant, &tally);
        let b = TypingStats::from_tally("t", KnownLayout::Ant, &tally);
        assert_eq!(a, b);
        assert_eq!(a.average_path.to_bits(), b.average_path.to_bits());
        assert_eq!(a.total_path, 3);
        assert_eq!(a.left_hand_percentage, 100.0);
        assert_eq!(a.two_handed_percentage, 25.0);
    }

    #[test]
    fn modifier_presses_are_not_classified_separately() {
        let mut tally = PressTally::default();
        tally.finger_counts[Finger::LeftIndex.index()] = 1;
        tally.finger_counts[Finger::LeftThumb.index()] = 1;
        tally.finger_paths[Finger::LeftThumb.index()] = 1;
        tally.characters_analyzed = 1;
        tally.two_handed = 1;
        tally.shift_count = 1;

        let s = TypingStats::from_tally("А", KnownLayout::Ytsuken, &tally);
        assert_eq!(s.total_presses, 2);
        assert_eq!(s.classified_presses, 1);
        assert_eq!(
            s.left_hand_only + s.right_hand_only + s.two_handed,
            s.classified_presses
        );
    }
}
