pub mod tables;

use crate::core_types::{Finger, KeyCode, FINGER_COUNT};
use crate::error::{KeyLoadError, KlResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use self::tables::{KeyEntry, LayoutSpec};

/// Closed catalog of supported layouts.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    AsRefStr,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum KnownLayout {
    Ytsuken,
    Vyzov,
    Rusphone,
    Zubachev,
    Skoropis,
    Diktor,
    Ant,
}

impl KnownLayout {
    /// Resolves a layout identifier, failing loudly on anything outside the catalog.
    pub fn parse(name: &str) -> KlResult<Self> {
        Self::from_str(name.trim()).map_err(|_| {
            let known: Vec<String> = Self::iter().map(|l| l.to_string()).collect();
            KeyLoadError::Config(format!(
                "Unknown layout '{}'. Known layouts: {}",
                name,
                known.join(", ")
            ))
        })
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ytsuken => "ЙЦУКЕН",
            Self::Vyzov => "Вызов",
            Self::Rusphone => "Русфон",
            Self::Zubachev => "Зубачев",
            Self::Skoropis => "Скоропись",
            Self::Diktor => "Диктор",
            Self::Ant => "Ант",
        }
    }

    pub fn spec(&self) -> &'static LayoutSpec {
        match self {
            Self::Ytsuken => &tables::YTSUKEN,
            Self::Vyzov => &tables::VYZOV,
            Self::Rusphone => &tables::RUSPHONE,
            Self::Zubachev => &tables::ZUBACHEV,
            Self::Skoropis => &tables::SKOROPIS,
            Self::Diktor => &tables::DIKTOR,
            Self::Ant => &tables::ANT,
        }
    }
}

/// The four ways a character can be produced, in lookup precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VariantKind {
    Normal,
    /// Capital letter: base key + Shift.
    Caps,
    /// Shifted symbol.
    Shift,
    /// Third layer reached through Alt.
    Alt,
}

impl VariantKind {
    /// The thumb that holds the modifier, if the variant needs one.
    pub fn modifier_finger(self) -> Option<Finger> {
        match self {
            Self::Normal => None,
            Self::Caps | Self::Shift => Some(Finger::LeftThumb),
            Self::Alt => Some(Finger::RightThumb),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub finger: Finger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub kind: VariantKind,
    pub code: KeyCode,
    pub finger: Finger,
}

/// Fully populated, immutable tables for one layout.
#[derive(Debug, Clone)]
pub struct LayoutDefinition {
    layout: KnownLayout,
    base: HashMap<char, KeyBinding>,
    caps: HashMap<char, KeyBinding>,
    shift: HashMap<char, KeyBinding>,
    alt: HashMap<char, KeyBinding>,
    home: [KeyCode; FINGER_COUNT],
}

impl LayoutDefinition {
    pub fn new(layout: KnownLayout) -> Self {
        let spec = layout.spec();
        let base = build_table(spec.base);
        let caps = derive_caps(&base);

        Self {
            layout,
            base,
            caps,
            shift: build_table(spec.shift),
            alt: build_table(spec.alt),
            home: spec.home,
        }
    }

    pub fn from_name(name: &str) -> KlResult<Self> {
        KnownLayout::parse(name).map(Self::new)
    }

    pub fn layout(&self) -> KnownLayout {
        self.layout
    }

    pub fn table(&self, kind: VariantKind) -> &HashMap<char, KeyBinding> {
        match kind {
            VariantKind::Normal => &self.base,
            VariantKind::Caps => &self.caps,
            VariantKind::Shift => &self.shift,
            VariantKind::Alt => &self.alt,
        }
    }

    /// Every way to type `c`, ordered base, caps, shift, alt.
    pub fn variants_for(&self, c: char) -> impl Iterator<Item = Variant> + '_ {
        VariantKind::iter().filter_map(move |kind| {
            self.table(kind).get(&c).map(|b| Variant {
                kind,
                code: b.code,
                finger: b.finger,
            })
        })
    }

    pub fn home_key(&self, finger: Finger) -> KeyCode {
        self.home[finger.index()]
    }

    pub fn can_type(&self, c: char) -> bool {
        self.variants_for(c).next().is_some()
    }
}

fn build_table(entries: &[KeyEntry]) -> HashMap<char, KeyBinding> {
    let mut table = HashMap::with_capacity(entries.len());
    for &(c, code, finger) in entries {
        table.insert(c, KeyBinding { code, finger });
    }
    table
}

/// Every alphabetic base character with a single-character uppercase form
/// becomes reachable through Shift on the same key.
fn derive_caps(base: &HashMap<char, KeyBinding>) -> HashMap<char, KeyBinding> {
    let mut caps = HashMap::new();
    for (&c, &binding) in base {
        if !c.is_alphabetic() {
            continue;
        }
        let mut upper = c.to_uppercase();
        if let (Some(u), None) = (upper.next(), upper.next()) {
            if u != c {
                caps.insert(u, binding);
            }
        }
    }
    caps
}
