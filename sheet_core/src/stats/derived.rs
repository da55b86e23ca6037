//! Derived stat block: health, energy, mastery, armor class and save DC

use super::{mastery_rank, Attribute, AttributeSet};
use serde::{Deserialize, Serialize};

/// Armor class terms contributed by equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    /// Natural armor base
    #[serde(default = "default_natural")]
    pub natural: i32,
    #[serde(default)]
    pub uniform: i32,
    #[serde(default)]
    pub shield: i32,
    #[serde(default)]
    pub other: i32,
}

fn default_natural() -> i32 {
    10
}

impl Default for Equipment {
    fn default() -> Self {
        Equipment {
            natural: default_natural(),
            uniform: 0,
            shield: 0,
            other: 0,
        }
    }
}

impl Equipment {
    /// Sum of all equipment terms
    pub fn total(&self) -> i32 {
        self.natural + self.uniform + self.shield + self.other
    }
}

/// Stats computed from attributes, level and equipment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub max_health: i32,
    pub max_energy: i32,
    pub mastery_rank: i32,
    pub armor_class: i32,
    pub save_dc: i32,
    /// Passive awareness
    pub attention: i32,
}

/// Compute the derived stat block
///
/// - energy: `6 × level + Int + 1`
/// - armor class: equipment terms + Dex + Int
/// - save DC: `10 + mastery + Int + 1`
pub fn derive_stats(
    attributes: &AttributeSet,
    level: i32,
    max_health: i32,
    equipment: &Equipment,
) -> DerivedStats {
    let int_mod = attributes.modifier(Attribute::Intelligence);
    let dex_mod = attributes.modifier(Attribute::Dexterity);
    let mastery = mastery_rank(level);

    DerivedStats {
        max_health,
        max_energy: 6 * level + int_mod + 1,
        mastery_rank: mastery,
        armor_class: equipment.total() + dex_mod + int_mod,
        save_dc: 10 + mastery + int_mod + 1,
        attention: attention(attributes, level),
    }
}

/// Attention: `10 + floor(level / 2) + Wis`
pub fn attention(attributes: &AttributeSet, level: i32) -> i32 {
    10 + level.div_euclid(2) + attributes.modifier(Attribute::Wisdom)
}
