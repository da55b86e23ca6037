//! Attributes, modifiers and the derived stat block

mod derived;

pub use derived::{attention, derive_stats, DerivedStats, Equipment};

use crate::label;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Attribute modifier: `floor((score - 10) / 2)`
///
/// Rounds toward negative infinity, so a score of 9 gives -1.
pub fn modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Mastery rank for a level: `ceil(1 + level / 4)`
pub fn mastery_rank(level: i32) -> i32 {
    1 - (-level).div_euclid(4)
}

/// The six attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    /// Get all attributes in sheet order
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Dexterity,
            Attribute::Constitution,
            Attribute::Intelligence,
            Attribute::Wisdom,
            Attribute::Charisma,
        ]
    }

    /// Short sheet label
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Attribute::Strength => "For",
            Attribute::Dexterity => "Des",
            Attribute::Constitution => "Con",
            Attribute::Intelligence => "Int",
            Attribute::Wisdom => "Sab",
            Attribute::Charisma => "Car",
        }
    }

    /// Accepted labels, already folded
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Attribute::Strength => &["for", "forca", "str", "strength"],
            Attribute::Dexterity => &["des", "dex", "destreza", "dexterity"],
            Attribute::Constitution => &["con", "constituicao", "constitution"],
            Attribute::Intelligence => &["int", "inteligencia", "intelligence"],
            Attribute::Wisdom => &["sab", "sabedoria", "wis", "wisdom"],
            Attribute::Charisma => &["car", "carisma", "cha", "charisma"],
        }
    }

    /// Resolve a label (abbreviation or full name, any case, with or without accents)
    pub fn from_label(label: &str) -> Option<Attribute> {
        let folded = label::fold(label);
        Attribute::all()
            .iter()
            .copied()
            .find(|attr| attr.aliases().contains(&folded.as_str()))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Base attribute scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl Default for AttributeSet {
    fn default() -> Self {
        AttributeSet {
            strength: 10,
            dexterity: 10,
            constitution: 10,
            intelligence: 10,
            wisdom: 10,
            charisma: 10,
        }
    }
}

impl AttributeSet {
    pub fn score(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    pub fn modifier(&self, attribute: Attribute) -> i32 {
        modifier(self.score(attribute))
    }

    /// Modifier for a free-form attribute label
    ///
    /// Unknown labels contribute 0.
    pub fn modifier_for_label(&self, label: &str) -> i32 {
        match Attribute::from_label(label) {
            Some(attribute) => self.modifier(attribute),
            None => {
                warn!(label, "unknown attribute label, using modifier 0");
                0
            }
        }
    }
}
