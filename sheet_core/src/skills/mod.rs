//! Skill table: per-skill totals from attribute, level and bonus sets

mod check;

pub use check::{roll_skill, skill_check_title};

use crate::label;
use crate::stats::AttributeSet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Skill whose total is the attack bonus of the blood abilities
pub const SORCERY_SKILL: &str = "Feitiçaria";

/// One row of the skill dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRow {
    pub name: String,
    /// Governing attribute label as written in the dataset
    pub attribute: String,
}

impl SkillRow {
    pub fn new(name: impl Into<String>, attribute: impl Into<String>) -> Self {
        SkillRow {
            name: name.into(),
            attribute: attribute.into(),
        }
    }
}

/// A flat bonus granted to a list of skills
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatBonus {
    pub value: i32,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl FlatBonus {
    pub fn new(value: i32, skills: &[&str]) -> Self {
        FlatBonus {
            value,
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Bonus for a skill (0 when not listed)
    pub fn bonus_for(&self, skill: &str) -> i32 {
        if is_member(&self.skills, skill) {
            self.value
        } else {
            0
        }
    }
}

/// Membership lists for the conditional skill bonuses
///
/// Sets are independent: a skill may appear in any number of them and
/// receives every bonus it qualifies for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusSets {
    /// Skills adding the mastery rank
    #[serde(default)]
    pub mastery: Vec<String>,
    /// Skills adding the mastery rank a second time
    #[serde(default)]
    pub specialization: Vec<String>,
    #[serde(default = "default_other1")]
    pub other1: FlatBonus,
    #[serde(default = "default_other2")]
    pub other2: FlatBonus,
}

fn default_other1() -> FlatBonus {
    FlatBonus::new(1, &[])
}

fn default_other2() -> FlatBonus {
    FlatBonus::new(2, &[])
}

impl Default for BonusSets {
    fn default() -> Self {
        BonusSets {
            mastery: Vec::new(),
            specialization: Vec::new(),
            other1: default_other1(),
            other2: default_other2(),
        }
    }
}

fn is_member(set: &[String], skill: &str) -> bool {
    set.iter().any(|name| label::same_label(name, skill))
}

/// Breakdown of one skill's total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTotal {
    pub name: String,
    pub attribute: String,
    pub attribute_mod: i32,
    pub half_level: i32,
    pub mastery: i32,
    pub specialization: i32,
    pub other1: i32,
    pub other2: i32,
}

impl SkillTotal {
    pub fn total(&self) -> i32 {
        self.attribute_mod
            + self.half_level
            + self.mastery
            + self.specialization
            + self.other1
            + self.other2
    }
}

/// Skill totals keyed by name, in dataset order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTable {
    rows: IndexMap<String, SkillTotal>,
}

impl SkillTable {
    /// Look up a skill by name (exact first, then case/accent-insensitive)
    pub fn get(&self, name: &str) -> Option<&SkillTotal> {
        self.rows.get(name).or_else(|| {
            self.rows
                .values()
                .find(|row| label::same_label(&row.name, name))
        })
    }

    /// Total for a named skill
    pub fn total_of(&self, name: &str) -> Option<i32> {
        self.get(name).map(SkillTotal::total)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillTotal> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at a display position
    pub fn get_index(&self, index: usize) -> Option<&SkillTotal> {
        self.rows.get_index(index).map(|(_, row)| row)
    }

    /// Split into a left half of `ceil(n / 2)` rows and a right half of the rest
    pub fn halves(&self) -> (Vec<&SkillTotal>, Vec<&SkillTotal>) {
        let mid = (self.rows.len() + 1) / 2;
        let rows: Vec<&SkillTotal> = self.rows.values().collect();
        let (left, right) = rows.split_at(mid);
        (left.to_vec(), right.to_vec())
    }
}

/// Compute every skill's total
///
/// `total = attribute modifier + floor(level / 2) + mastery + specialization + other1 + other2`
pub fn build_skill_totals(
    rows: &[SkillRow],
    attributes: &AttributeSet,
    level: i32,
    mastery_rank: i32,
    bonuses: &BonusSets,
) -> SkillTable {
    let half_level = level.div_euclid(2);
    let mut table = SkillTable::default();

    for row in rows {
        let name = row.name.trim().to_string();
        let total = SkillTotal {
            name: name.clone(),
            attribute: row.attribute.trim().to_string(),
            attribute_mod: attributes.modifier_for_label(&row.attribute),
            half_level,
            mastery: if is_member(&bonuses.mastery, &name) { mastery_rank } else { 0 },
            specialization: if is_member(&bonuses.specialization, &name) {
                mastery_rank
            } else {
                0
            },
            other1: bonuses.other1.bonus_for(&name),
            other2: bonuses.other2.bonus_for(&name),
        };
        debug!(skill = %name, total = total.total(), "computed skill total");
        table.rows.insert(name, total);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs() -> AttributeSet {
        AttributeSet {
            strength: 10,
            dexterity: 16,
            constitution: 14,
            intelligence: 20,
            wisdom: 13,
            charisma: 12,
        }
    }

    fn bonuses() -> BonusSets {
        BonusSets {
            mastery: vec!["Feitiçaria".into(), "Ocultismo".into(), "Reflexos".into()],
            specialization: vec!["Feitiçaria".into()],
            other1: FlatBonus::new(1, &["Ocultismo", "Atletismo"]),
            other2: FlatBonus::new(2, &["Feitiçaria", "Atletismo"]),
        }
    }

    fn rows() -> Vec<SkillRow> {
        vec![
            SkillRow::new("Atletismo", "For"),
            SkillRow::new("Feitiçaria", "Int"),
            SkillRow::new("Ocultismo", "Inteligência"),
            SkillRow::new("Reflexos", "Des"),
            SkillRow::new("Sorte", "Luck"),
        ]
    }

    #[test]
    fn test_skill_totals() {
        let table = build_skill_totals(&rows(), &attrs(), 6, 3, &bonuses());

        // 5 + 3 + 3 + 3 + 0 + 2
        assert_eq!(table.total_of("Feitiçaria"), Some(16));
        // 5 + 3 + 3 + 0 + 1 + 0
        assert_eq!(table.total_of("Ocultismo"), Some(12));
        // 3 + 3 + 3
        assert_eq!(table.total_of("Reflexos"), Some(9));
    }

    #[test]
    fn test_both_other_bonuses_stack() {
        let table = build_skill_totals(&rows(), &attrs(), 6, 3, &bonuses());
        let athletics = table.get("Atletismo").unwrap();

        assert_eq!(athletics.other1, 1);
        assert_eq!(athletics.other2, 2);
        // 0 + 3 + 1 + 2
        assert_eq!(athletics.total(), 6);
    }

    #[test]
    fn test_unknown_attribute_contributes_zero() {
        let table = build_skill_totals(&rows(), &attrs(), 6, 3, &bonuses());
        let luck = table.get("Sorte").unwrap();
        assert_eq!(luck.attribute_mod, 0);
        assert_eq!(luck.total(), 3);
    }

    #[test]
    fn test_order_preserved() {
        let table = build_skill_totals(&rows(), &attrs(), 6, 3, &bonuses());
        let names: Vec<&str> = table.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Atletismo", "Feitiçaria", "Ocultismo", "Reflexos", "Sorte"]);
    }

    #[test]
    fn test_membership_order_does_not_matter() {
        let mut reversed = bonuses();
        reversed.mastery.reverse();
        reversed.other2.skills.reverse();

        let a = build_skill_totals(&rows(), &attrs(), 6, 3, &bonuses());
        let b = build_skill_totals(&rows(), &attrs(), 6, 3, &reversed);
        assert_eq!(a, b);
    }

    #[test]
    fn test_lookup_tolerates_accents() {
        let table = build_skill_totals(&rows(), &attrs(), 6, 3, &bonuses());
        assert_eq!(table.total_of("feiticaria"), Some(16));
        assert_eq!(table.total_of("Investigação"), None);
    }

    #[test]
    fn test_halves() {
        let table = build_skill_totals(&rows(), &attrs(), 6, 3, &bonuses());
        let (left, right) = table.halves();
        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 2);
        assert_eq!(left[0].name, "Atletismo");
        assert_eq!(right[0].name, "Reflexos");
    }

    #[test]
    fn test_empty_table_halves() {
        let table = SkillTable::default();
        let (left, right) = table.halves();
        assert!(left.is_empty());
        assert!(right.is_empty());
    }
}
