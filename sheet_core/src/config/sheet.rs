//! Character sheet configuration

use super::ConfigError;
use crate::label;
use crate::skills::{BonusSets, SkillRow, SORCERY_SKILL};
use crate::stats::{AttributeSet, Equipment};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Everything fixed about a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    pub name: String,
    pub level: i32,
    pub max_health: i32,
    pub attributes: AttributeSet,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub bonuses: BonusSets,
    /// Skill dataset, in display order
    #[serde(default)]
    pub skills: Vec<SkillRow>,
}

impl SheetConfig {
    /// Reject sheets the engine cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level < 1 {
            return Err(ConfigError::ValidationError(format!(
                "level must be at least 1, got {}",
                self.level
            )));
        }
        if self.max_health < 1 {
            return Err(ConfigError::ValidationError(format!(
                "max_health must be at least 1, got {}",
                self.max_health
            )));
        }

        let mut seen = HashSet::new();
        for row in &self.skills {
            if row.name.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "skill row with an empty name".to_string(),
                ));
            }
            if !seen.insert(label::fold(&row.name)) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate skill: {}",
                    row.name
                )));
            }
        }

        if !seen.contains(&label::fold(SORCERY_SKILL)) {
            return Err(ConfigError::ValidationError(format!(
                "missing required skill: {}",
                SORCERY_SKILL
            )));
        }

        Ok(())
    }
}

/// Load and validate a sheet from a TOML file
pub fn load_sheet(path: &Path) -> Result<SheetConfig, ConfigError> {
    let config: SheetConfig = super::load_toml(path)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a sheet from a TOML string
pub fn parse_sheet(content: &str) -> Result<SheetConfig, ConfigError> {
    let config: SheetConfig = super::parse_toml(content)?;
    config.validate()?;
    Ok(config)
}

/// The bundled Ryuzaki Kamo sheet
pub fn default_sheet() -> Result<SheetConfig, ConfigError> {
    parse_sheet(include_str!("../../config/ryuzaki.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
name = "Teste"
level = 2
max_health = 20

[attributes]
strength = 8
dexterity = 12
constitution = 10
intelligence = 15
wisdom = 10
charisma = 10

[[skills]]
name = "Feitiçaria"
attribute = "Int"

[[skills]]
name = "Atletismo"
attribute = "For"
"#;

    #[test]
    fn test_parse_minimal_sheet() {
        let sheet = parse_sheet(MINIMAL).unwrap();

        assert_eq!(sheet.name, "Teste");
        assert_eq!(sheet.equipment, Equipment::default());
        assert_eq!(sheet.bonuses.other1.value, 1);
        assert_eq!(sheet.bonuses.other2.value, 2);
        assert_eq!(sheet.skills.len(), 2);
        assert_eq!(sheet.skills[1], SkillRow::new("Atletismo", "For"));
    }

    #[test]
    fn test_default_sheet_loads() {
        let sheet = default_sheet().unwrap();

        assert_eq!(sheet.level, 6);
        assert_eq!(sheet.attributes.intelligence, 20);
        assert_eq!(sheet.equipment.uniform, 4);
        assert_eq!(sheet.bonuses.mastery.len(), 11);
        assert!(sheet.skills.iter().any(|s| s.name == "Feitiçaria"));
    }

    #[test]
    fn test_row_missing_attribute_fails_to_parse() {
        let toml = MINIMAL.replace("attribute = \"For\"\n", "");
        assert!(matches!(parse_sheet(&toml), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_row_missing_name_fails_to_parse() {
        let toml = MINIMAL.replace("name = \"Atletismo\"\n", "");
        assert!(matches!(parse_sheet(&toml), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_sheet_from_file() {
        let path = std::env::temp_dir().join(format!("sheet_core_{}.toml", std::process::id()));
        std::fs::write(&path, MINIMAL).unwrap();

        let result = load_sheet(&path);
        std::fs::remove_file(&path).unwrap();

        let sheet = result.unwrap();
        assert_eq!(sheet.name, "Teste");
        assert_eq!(sheet.level, 2);
        assert_eq!(sheet.skills.len(), 2);
    }

    #[test]
    fn test_duplicate_skill_rejected() {
        let toml = format!("{}\n[[skills]]\nname = \"feiticaria\"\nattribute = \"Int\"\n", MINIMAL);
        assert!(matches!(parse_sheet(&toml), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_missing_sorcery_rejected() {
        let toml = MINIMAL.replace("Feitiçaria", "Ocultismo");
        let err = parse_sheet(&toml).unwrap_err();
        assert!(err.to_string().contains("Feitiçaria"));
    }

    #[test]
    fn test_level_zero_rejected() {
        let toml = MINIMAL.replace("level = 2", "level = 0");
        assert!(matches!(parse_sheet(&toml), Err(ConfigError::ValidationError(_))));
    }
}
