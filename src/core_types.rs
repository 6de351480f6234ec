use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Physical key identifier (PC scan code).
/// Stable across layouts: a code always lands on the same grid cell.
pub type KeyCode = u16;

/// Number of fingers tracked per record.
pub const FINGER_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Hand {
    Left,
    Right,
}

/// The ten fingers, declared in reporting order (left hand outside-in,
/// right hand inside-out, then the two thumbs).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Finger {
    LeftPinky,
    LeftRing,
    LeftMiddle,
    LeftIndex,
    RightIndex,
    RightMiddle,
    RightRing,
    RightPinky,
    LeftThumb,
    RightThumb,
}

impl Finger {
    pub fn hand(self) -> Hand {
        match self {
            Self::LeftPinky | Self::LeftRing | Self::LeftMiddle | Self::LeftIndex | Self::LeftThumb => {
                Hand::Left
            }
            Self::RightIndex
            | Self::RightMiddle
            | Self::RightRing
            | Self::RightPinky
            | Self::RightThumb => Hand::Right,
        }
    }

    /// Thumbs only ever press Space and the modifiers.
    pub fn is_thumb(self) -> bool {
        matches!(self, Self::LeftThumb | Self::RightThumb)
    }

    /// Dense index matching the declaration order, for array-backed tables.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LeftPinky => "L Pinky",
            Self::LeftRing => "L Ring",
            Self::LeftMiddle => "L Middle",
            Self::LeftIndex => "L Index",
            Self::RightIndex => "R Index",
            Self::RightMiddle => "R Middle",
            Self::RightRing => "R Ring",
            Self::RightPinky => "R Pinky",
            Self::LeftThumb => "L Thumb",
            Self::RightThumb => "R Thumb",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn index_follows_declaration_order() {
        for (i, finger) in Finger::iter().enumerate() {
            assert_eq!(finger.index(), i);
        }
        assert_eq!(Finger::iter().count(), FINGER_COUNT);
    }

    #[test]
    fn five_fingers_per_hand() {
        let left = Finger::iter().filter(|f| f.hand() == Hand::Left).count();
        assert_eq!(left, 5);
        assert_eq!(Finger::iter().filter(|f| f.is_thumb()).count(), 2);
    }

    #[test]
    fn names_round_trip_through_strum() {
        assert_eq!(Finger::RightPinky.to_string(), "right_pinky");
        assert_eq!("left_thumb".parse::<Finger>().unwrap(), Finger::LeftThumb);
    }
}
