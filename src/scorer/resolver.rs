use super::costs::{path_cost, MODIFIER_COST};
use crate::core_types::{Finger, KeyCode};
use crate::geometry::KeyboardGrid;
use crate::layouts::{LayoutDefinition, VariantKind};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModifierPress {
    pub finger: Finger,
    pub cost: u32,
}

/// The cheapest way the layout offers to type one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PressRecord {
    pub kind: VariantKind,
    pub code: KeyCode,
    pub finger: Finger,
    pub key_cost: u32,
    pub modifier: Option<ModifierPress>,
}

impl PressRecord {
    pub fn total_cost(&self) -> u32 {
        self.key_cost + self.modifier.map_or(0, |m| m.cost)
    }

    /// Any chord (key + modifier) counts as two-handed.
    pub fn is_two_handed(&self) -> bool {
        self.modifier.is_some()
    }
}

/// Picks the variant with the lowest key + modifier cost.
/// Ties keep the earliest variant (normal, caps, shift, alt); `None` means the
/// layout cannot type `c` at all.
pub fn resolve(grid: &KeyboardGrid, layout: &LayoutDefinition, c: char) -> Option<PressRecord> {
    let mut best: Option<PressRecord> = None;

    for variant in layout.variants_for(c) {
        let key_cost = path_cost(grid, layout, variant.code, variant.finger);
        let modifier = variant.kind.modifier_finger().map(|finger| ModifierPress {
            finger,
            cost: MODIFIER_COST,
        });
        let candidate = PressRecord {
            kind: variant.kind,
            code: variant.code,
            finger: variant.finger,
            key_cost,
            modifier,
        };

        match best {
            Some(ref current) if current.total_cost() <= candidate.total_cost() => {}
            _ => best = Some(candidate),
        }
    }

    best
}
