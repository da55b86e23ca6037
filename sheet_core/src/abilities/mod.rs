//! Ability catalog and resolver

mod outcome;
mod resolver;

pub use outcome::{AbilityOutcome, AttackRoll, DamageRoll};
pub use resolver::Caster;

use crate::dice::{DiceError, DieSource};
use crate::label;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The blood-manipulation abilities on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Convergence,
    PiercingBlood,
    BloodPool,
    BloodPoolPermanence,
    BloodWhirl,
    Bleeding,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Convergence,
        Ability::PiercingBlood,
        Ability::BloodPool,
        Ability::BloodPoolPermanence,
        Ability::BloodWhirl,
        Ability::Bleeding,
    ];

    /// Button label
    pub fn name(&self) -> &'static str {
        match self {
            Ability::Convergence => "Convergência, 血を流す",
            Ability::PiercingBlood => "Sangue Perfurante",
            Ability::BloodPool => "Poça de Sangue",
            Ability::BloodPoolPermanence => "Poça de Sangue - Permanencia",
            Ability::BloodWhirl => "Turbilhão de Sangue",
            Ability::Bleeding => "Sangramento",
        }
    }

    /// Label recorded in the history
    pub fn history_label(&self) -> &'static str {
        match self {
            Ability::Bleeding => "Turbilhão de Sangue - Sangramento",
            other => other.name(),
        }
    }

    /// Find an ability by button name, history label or short name
    pub fn from_name(name: &str) -> Option<Ability> {
        let folded = label::fold(name);
        Ability::ALL.iter().copied().find(|ability| {
            label::fold(ability.name()) == folded
                || label::fold(ability.history_label()) == folded
                || ability
                    .name()
                    .split(',')
                    .next()
                    .is_some_and(|short| label::fold(short) == folded)
        })
    }

    /// Resolve this ability for a caster
    pub fn cast(&self, caster: &Caster, rng: &mut impl DieSource) -> Result<AbilityOutcome, DiceError> {
        match self {
            Ability::Convergence => resolver::convergence(caster, rng),
            Ability::PiercingBlood => resolver::piercing_blood(caster, rng),
            Ability::BloodPool => resolver::blood_pool(caster, rng),
            Ability::BloodPoolPermanence => resolver::blood_pool_permanence(caster, rng),
            Ability::BloodWhirl => resolver::blood_whirl(caster, rng),
            Ability::Bleeding => resolver::bleeding(caster, rng),
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(Ability::from_name("Convergência"), Some(Ability::Convergence));
        assert_eq!(Ability::from_name("convergencia, 血を流す"), Some(Ability::Convergence));
        assert_eq!(Ability::from_name("sangue perfurante"), Some(Ability::PiercingBlood));
        assert_eq!(
            Ability::from_name("poca de sangue - permanência"),
            Some(Ability::BloodPoolPermanence)
        );
        assert_eq!(
            Ability::from_name("Turbilhão de Sangue - Sangramento"),
            Some(Ability::Bleeding)
        );
        assert_eq!(Ability::from_name("Bola de Fogo"), None);
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in Ability::ALL.iter().enumerate() {
            for b in &Ability::ALL[i + 1..] {
                assert_ne!(label::fold(a.name()), label::fold(b.name()));
            }
        }
    }
}
