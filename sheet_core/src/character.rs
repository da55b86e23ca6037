//! Character - a loaded sheet with its derived stats and skill totals

use crate::abilities::Caster;
use crate::config::{ConfigError, SheetConfig};
use crate::error::SheetError;
use crate::skills::{build_skill_totals, SkillTable, SORCERY_SKILL};
use crate::stats::{derive_stats, Attribute, AttributeSet, DerivedStats};
use serde::{Deserialize, Serialize};

/// A character sheet ready for play
///
/// Derived stats and skill totals are computed once on construction;
/// `rebuild` recomputes them after the config changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub config: SheetConfig,
    pub derived: DerivedStats,
    pub skills: SkillTable,
}

impl Character {
    /// Build a character from a validated config
    pub fn from_config(config: SheetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut character = Character {
            config,
            derived: DerivedStats::default(),
            skills: SkillTable::default(),
        };
        character.rebuild();
        Ok(character)
    }

    /// Recompute derived stats and skill totals from the config
    pub fn rebuild(&mut self) {
        let config = &self.config;
        self.derived = derive_stats(
            &config.attributes,
            config.level,
            config.max_health,
            &config.equipment,
        );
        self.skills = build_skill_totals(
            &config.skills,
            &config.attributes,
            config.level,
            self.derived.mastery_rank,
            &config.bonuses,
        );
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn level(&self) -> i32 {
        self.config.level
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.config.attributes
    }

    pub fn modifier(&self, attribute: Attribute) -> i32 {
        self.config.attributes.modifier(attribute)
    }

    /// Total of a named skill
    pub fn skill_total(&self, name: &str) -> Result<i32, SheetError> {
        self.skills
            .total_of(name)
            .ok_or_else(|| SheetError::UnknownSkill(name.to_string()))
    }

    /// Feitiçaria total, used as the attack bonus of the abilities
    pub fn sorcery_total(&self) -> Result<i32, SheetError> {
        self.skill_total(SORCERY_SKILL)
    }

    /// The values abilities read when cast
    pub fn caster(&self) -> Result<Caster, SheetError> {
        Ok(Caster {
            intelligence_mod: self.modifier(Attribute::Intelligence),
            save_dc: self.derived.save_dc,
            sorcery: self.sorcery_total()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_sheet;

    #[test]
    fn test_default_character() {
        let character = Character::from_config(default_sheet().unwrap()).unwrap();

        assert_eq!(character.name(), "Ryuzaki Kamo");
        assert_eq!(character.level(), 6);
        assert_eq!(character.derived.max_health, 61);
        assert_eq!(character.derived.max_energy, 42);
        assert_eq!(character.derived.armor_class, 22);
        assert_eq!(character.derived.save_dc, 19);
        assert_eq!(character.sorcery_total(), Ok(16));
    }

    #[test]
    fn test_caster_view() {
        let character = Character::from_config(default_sheet().unwrap()).unwrap();
        let caster = character.caster().unwrap();

        assert_eq!(caster.intelligence_mod, 5);
        assert_eq!(caster.save_dc, 19);
        assert_eq!(caster.crit_threshold(), 36);
    }

    #[test]
    fn test_rebuild_after_level_up() {
        let mut character = Character::from_config(default_sheet().unwrap()).unwrap();
        character.config.level = 9;
        character.rebuild();

        assert_eq!(character.derived.mastery_rank, 4);
        // 5 + 4 + 4 + 4 + 2
        assert_eq!(character.sorcery_total(), Ok(19));
    }

    #[test]
    fn test_unknown_skill() {
        let character = Character::from_config(default_sheet().unwrap()).unwrap();
        assert_eq!(
            character.skill_total("Culinária Molecular"),
            Err(SheetError::UnknownSkill("Culinária Molecular".to_string()))
        );
    }
}
