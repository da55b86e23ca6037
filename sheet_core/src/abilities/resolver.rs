//! Ability resolution - dice, damage and the crit branch

use super::outcome::{AbilityOutcome, AttackRoll, DamageRoll};
use super::Ability;
use crate::dice::{roll_dice, DiceError, DiceRoll, DieSource};
use serde::{Deserialize, Serialize};
use tracing::info;

/// What an ability reads from the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caster {
    /// Flat bonus added to every damage roll
    pub intelligence_mod: i32,
    pub save_dc: i32,
    /// Feitiçaria total, the attack bonus
    pub sorcery: i32,
}

impl Caster {
    /// Attack total at or above which an attack is critical
    pub fn crit_threshold(&self) -> i32 {
        20 + self.sorcery
    }
}

fn damage(
    caster: &Caster,
    label: DiceRoll,
    dice: DiceRoll,
    rng: &mut impl DieSource,
) -> Result<DamageRoll, DiceError> {
    Ok(DamageRoll {
        label,
        rolls: dice.roll(rng)?,
        bonus: caster.intelligence_mod,
    })
}

fn finish(outcome: AbilityOutcome) -> AbilityOutcome {
    info!(
        ability = outcome.ability.name(),
        damage = outcome.damage.total(),
        critical = outcome.is_critical(),
        "cast ability"
    );
    outcome
}

pub(super) fn convergence(caster: &Caster, rng: &mut impl DieSource) -> Result<AbilityOutcome, DiceError> {
    let dice = DiceRoll::new(3, 8);
    Ok(finish(AbilityOutcome {
        ability: Ability::Convergence,
        title: "Convergência, 血を流す".to_string(),
        cost: Some(1),
        range: Some("12m".to_string()),
        save_dc: Some(caster.save_dc),
        description: "Converge legal".to_string(),
        attack: None,
        damage: damage(caster, dice, dice, rng)?,
    }))
}

/// One d20 decides the branch; only the chosen damage pool is rolled.
pub(super) fn piercing_blood(caster: &Caster, rng: &mut impl DieSource) -> Result<AbilityOutcome, DiceError> {
    let d20 = roll_dice(rng, 20, 1)?.iter().sum::<i32>();
    let total = d20 + caster.sorcery;
    let critical = total >= caster.crit_threshold();

    let (dice, description) = if critical {
        (DiceRoll::new(16, 8), "Perfura com sangue mt potente")
    } else {
        (DiceRoll::new(8, 8), "Perfura com sangue")
    };

    Ok(finish(AbilityOutcome {
        ability: Ability::PiercingBlood,
        title: "Sangue Perfurante".to_string(),
        cost: Some(4),
        range: Some("18m".to_string()),
        save_dc: None,
        description: description.to_string(),
        attack: Some(AttackRoll { d20, total, critical }),
        damage: damage(caster, dice, dice, rng)?,
    }))
}

/// Damage first, then the pool's duration (1d2 + 1 rounds).
pub(super) fn blood_pool(caster: &Caster, rng: &mut impl DieSource) -> Result<AbilityOutcome, DiceError> {
    let dice = DiceRoll::new(3, 8);
    let pool = damage(caster, dice, dice, rng)?;
    let rounds = roll_dice(rng, 2, 1)?.iter().sum::<i32>() + 1;

    Ok(finish(AbilityOutcome {
        ability: Ability::BloodPool,
        title: "Byakuren, Chi Damari".to_string(),
        cost: Some(4),
        range: Some("18m".to_string()),
        save_dc: Some(caster.save_dc),
        description: format!("Cria uma poça de sangue que dura {} rodadas", rounds),
        attack: None,
        damage: pool,
    }))
}

pub(super) fn blood_pool_permanence(
    caster: &Caster,
    rng: &mut impl DieSource,
) -> Result<AbilityOutcome, DiceError> {
    let dice = DiceRoll::new(4, 12);
    Ok(finish(AbilityOutcome {
        ability: Ability::BloodPoolPermanence,
        title: "Byakuren, Chi Damari".to_string(),
        cost: None,
        range: Some("Um quadrado (1,5m)".to_string()),
        save_dc: None,
        description: "Com a poça de sangue ainda no chão, tu vai tomando".to_string(),
        attack: None,
        damage: damage(caster, dice, dice, rng)?,
    }))
}

// NOTE: labeled 7d8 but rolls 3d8. Kept as the sheet defines it until the
// sheet's author settles the intended dice count.
pub(super) fn blood_whirl(caster: &Caster, rng: &mut impl DieSource) -> Result<AbilityOutcome, DiceError> {
    Ok(finish(AbilityOutcome {
        ability: Ability::BloodWhirl,
        title: "Turbilhão de Sangue".to_string(),
        cost: None,
        range: Some("6m, raio 3m".to_string()),
        save_dc: Some(caster.save_dc),
        description: "Liga o liquidificador".to_string(),
        attack: None,
        damage: damage(caster, DiceRoll::new(7, 8), DiceRoll::new(3, 8), rng)?,
    }))
}

// NOTE: labeled 7d8 but rolls 2d8, same mismatch as the whirl.
pub(super) fn bleeding(caster: &Caster, rng: &mut impl DieSource) -> Result<AbilityOutcome, DiceError> {
    Ok(finish(AbilityOutcome {
        ability: Ability::Bleeding,
        title: "Sangramento - Turbilhão".to_string(),
        cost: None,
        range: None,
        save_dc: Some(caster.save_dc),
        description: "Sangra legal até passar no teste".to_string(),
        attack: None,
        damage: damage(caster, DiceRoll::new(7, 8), DiceRoll::new(2, 8), rng)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use crate::payload::Value;
    use rand::SeedableRng;

    fn caster() -> Caster {
        Caster {
            intelligence_mod: 5,
            save_dc: 19,
            sorcery: 16,
        }
    }

    #[test]
    fn test_convergence_fixed_rolls() {
        let mut dice = ScriptedDice::new(vec![8, 8, 8]);
        let outcome = Ability::Convergence.cast(&caster(), &mut dice).unwrap();

        assert_eq!(outcome.damage.rolls, vec![8, 8, 8]);
        assert_eq!(outcome.damage.total(), 29);
        assert_eq!(outcome.save_dc, Some(19));
        assert_eq!(outcome.cost, Some(1));
        assert_eq!(outcome.to_payload().get("Dano (3d8)"), Some(&Value::Number(29)));
    }

    #[test]
    fn test_piercing_blood_crit_branch() {
        // natural 20: 20 + 16 reaches the threshold of 36
        let mut faces = vec![20];
        faces.extend([4; 16]);
        let mut dice = ScriptedDice::new(faces);
        let outcome = Ability::PiercingBlood.cast(&caster(), &mut dice).unwrap();

        let attack = outcome.attack.unwrap();
        assert!(attack.critical);
        assert_eq!(attack.total, 36);
        assert_eq!(outcome.damage.rolls.len(), 16);
        assert_eq!(outcome.damage.label, DiceRoll::new(16, 8));
        assert_eq!(outcome.damage.total(), 16 * 4 + 5);
        assert_eq!(dice.consumed(), 17);

        let payload = outcome.to_payload();
        assert_eq!(payload.get("Rolagem de Ataque"), Some(&Value::from("36(CRIT)")));
        assert!(payload.get("Dano (16d8)").is_some());
    }

    #[test]
    fn test_piercing_blood_normal_branch() {
        let mut faces = vec![19];
        faces.extend([4; 8]);
        let mut dice = ScriptedDice::new(faces);
        let outcome = Ability::PiercingBlood.cast(&caster(), &mut dice).unwrap();

        let attack = outcome.attack.unwrap();
        assert!(!attack.critical);
        assert_eq!(attack.total, 35);
        assert_eq!(outcome.damage.rolls.len(), 8);
        assert_eq!(outcome.damage.total(), 8 * 4 + 5);
        assert_eq!(dice.consumed(), 9);

        let payload = outcome.to_payload();
        assert_eq!(payload.get("Rolagem de Ataque"), Some(&Value::Number(35)));
        assert!(payload.get("Dano (8d8)").is_some());
    }

    #[test]
    fn test_blood_pool_duration() {
        let mut dice = ScriptedDice::new(vec![1, 2, 3, 2]);
        let outcome = Ability::BloodPool.cast(&caster(), &mut dice).unwrap();

        assert_eq!(outcome.damage.rolls, vec![1, 2, 3]);
        assert_eq!(outcome.damage.total(), 11);
        assert_eq!(outcome.description, "Cria uma poça de sangue que dura 3 rodadas");
    }

    #[test]
    fn test_blood_pool_duration_range() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let outcome = Ability::BloodPool.cast(&caster(), &mut rng).unwrap();
            assert!(
                outcome.description.contains("dura 2 rodadas")
                    || outcome.description.contains("dura 3 rodadas")
            );
        }
    }

    #[test]
    fn test_permanence_has_no_attack_or_dc() {
        let mut dice = ScriptedDice::new(vec![12]);
        let outcome = Ability::BloodPoolPermanence.cast(&caster(), &mut dice).unwrap();

        assert_eq!(outcome.attack, None);
        assert_eq!(outcome.save_dc, None);
        assert_eq!(outcome.damage.total(), 48 + 5);
        assert_eq!(outcome.range.as_deref(), Some("Um quadrado (1,5m)"));
    }

    #[test]
    fn test_whirl_label_says_seven_dice_but_rolls_three() {
        let mut dice = ScriptedDice::new(vec![2]);
        let outcome = Ability::BloodWhirl.cast(&caster(), &mut dice).unwrap();

        assert_eq!(outcome.damage.rolls.len(), 3);
        assert!(!outcome.damage.label_matches_rolls());
        assert_eq!(outcome.to_payload().get("Dano (7d8)"), Some(&Value::Number(11)));
    }

    #[test]
    fn test_bleeding_label_says_seven_dice_but_rolls_two() {
        let mut dice = ScriptedDice::new(vec![2]);
        let outcome = Ability::Bleeding.cast(&caster(), &mut dice).unwrap();

        assert_eq!(outcome.damage.rolls.len(), 2);
        assert!(!outcome.damage.label_matches_rolls());
        assert_eq!(outcome.range, None);
        assert_eq!(outcome.to_payload().get("Dano (7d8)"), Some(&Value::Number(9)));
    }

    #[test]
    fn test_every_ability_adds_intelligence() {
        for ability in Ability::ALL {
            let mut dice = ScriptedDice::new(vec![1]);
            let outcome = ability.cast(&caster(), &mut dice).unwrap();
            let dice_sum: i32 = outcome.damage.rolls.iter().sum();
            assert_eq!(outcome.damage.total(), dice_sum + 5, "{}", ability);
        }
    }
}
