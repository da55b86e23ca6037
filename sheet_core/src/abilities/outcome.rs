//! AbilityOutcome - Structured result of casting an ability

use super::Ability;
use crate::dice::DiceRoll;
use crate::payload::Payload;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attack roll made by an ability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRoll {
    /// Raw d20 face
    pub d20: i32,
    /// d20 + attack bonus
    pub total: i32,
    pub critical: bool,
}

impl fmt::Display for AttackRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.critical {
            write!(f, "{}(CRIT)", self.total)
        } else {
            write!(f, "{}", self.total)
        }
    }
}

/// Damage dice and flat bonus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRoll {
    /// Expression shown in the damage label
    pub label: DiceRoll,
    /// Faces actually rolled
    pub rolls: Vec<i32>,
    pub bonus: i32,
}

impl DamageRoll {
    pub fn total(&self) -> i32 {
        self.rolls.iter().sum::<i32>() + self.bonus
    }

    /// Whether the label names as many dice as were rolled
    pub fn label_matches_rolls(&self) -> bool {
        self.label.count == self.rolls.len()
    }

    /// Payload key, e.g. `Dano (3d8)`
    pub fn key(&self) -> String {
        format!("Dano ({})", self.label)
    }
}

/// Result of one ability cast
///
/// Fields an ability does not use stay `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityOutcome {
    pub ability: Ability,
    /// Technique name shown in the card
    pub title: String,
    /// Flavor energy cost (never deducted by the engine)
    pub cost: Option<i32>,
    pub range: Option<String>,
    pub save_dc: Option<i32>,
    pub description: String,
    pub attack: Option<AttackRoll>,
    pub damage: DamageRoll,
}

impl AbilityOutcome {
    pub fn is_critical(&self) -> bool {
        self.attack.is_some_and(|attack| attack.critical)
    }

    /// Flatten into the labeled payload shown and recorded
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new().with("Habilidade", self.title.as_str());
        if let Some(cost) = self.cost {
            payload.insert("Custo", cost);
        }
        if let Some(range) = &self.range {
            payload.insert("Alcance", range.as_str());
        }
        if let Some(dc) = self.save_dc {
            payload.insert("CD do TR", dc);
        }
        payload.insert("Descrição", self.description.as_str());
        if let Some(attack) = self.attack {
            if attack.critical {
                payload.insert("Rolagem de Ataque", attack.to_string());
            } else {
                payload.insert("Rolagem de Ataque", attack.total);
            }
        }
        payload.insert("Rolagens", self.damage.rolls.as_slice());
        payload.insert(self.damage.key(), self.damage.total());
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::Value;

    fn outcome(attack: Option<AttackRoll>) -> AbilityOutcome {
        AbilityOutcome {
            ability: Ability::PiercingBlood,
            title: "Sangue Perfurante".to_string(),
            cost: Some(4),
            range: Some("18m".to_string()),
            save_dc: None,
            description: "Perfura com sangue".to_string(),
            attack,
            damage: DamageRoll {
                label: DiceRoll::new(2, 8),
                rolls: vec![3, 6],
                bonus: 5,
            },
        }
    }

    #[test]
    fn test_payload_fields() {
        let payload = outcome(Some(AttackRoll { d20: 7, total: 23, critical: false })).to_payload();

        assert_eq!(payload.get("Custo"), Some(&Value::Number(4)));
        assert_eq!(payload.get("Alcance"), Some(&Value::from("18m")));
        assert_eq!(payload.get("CD do TR"), None);
        assert_eq!(payload.get("Rolagem de Ataque"), Some(&Value::Number(23)));
        assert_eq!(payload.get("Rolagens"), Some(&Value::Rolls(vec![3, 6])));
        assert_eq!(payload.get("Dano (2d8)"), Some(&Value::Number(14)));
    }

    #[test]
    fn test_critical_attack_is_text() {
        let critical = outcome(Some(AttackRoll { d20: 20, total: 36, critical: true }));
        assert!(critical.is_critical());
        assert_eq!(
            critical.to_payload().get("Rolagem de Ataque"),
            Some(&Value::from("36(CRIT)"))
        );
    }

    #[test]
    fn test_label_mismatch_detected() {
        let mut whirl = outcome(None);
        whirl.damage.label = DiceRoll::new(7, 8);
        assert!(!whirl.damage.label_matches_rolls());
        assert!(whirl.to_payload().get("Dano (7d8)").is_some());
    }
}
