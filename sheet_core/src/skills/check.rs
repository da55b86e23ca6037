//! Skill checks: 1d20 + skill total

use crate::dice::{roll_dice, DiceError, DieSource};
use crate::payload::Payload;
use tracing::info;

/// Title shown for a skill check
pub fn skill_check_title(name: &str) -> String {
    format!("Perícia – {}", name)
}

/// Roll a skill check
///
/// The payload carries the raw d20 under "Rolagens" and the check total
/// under "Ataque".
pub fn roll_skill(name: &str, total: i32, rng: &mut impl DieSource) -> Result<Payload, DiceError> {
    let d20 = roll_dice(rng, 20, 1)?;
    let check = d20.iter().sum::<i32>() + total;
    info!(skill = name, check, "rolled skill check");

    Ok(Payload::new()
        .with("Habilidade", skill_check_title(name))
        .with("Rolagens", d20)
        .with("Ataque", check))
}
