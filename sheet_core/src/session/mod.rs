//! Session - one user's character, dice, history and resource counters

mod history;

pub use history::{History, HistoryEntry, RECENT_LIMIT};

use crate::abilities::Ability;
use crate::character::Character;
use crate::dice::DieSource;
use crate::error::SheetError;
use crate::payload::Payload;
use crate::skills::roll_skill;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A resource counter bounded to `0..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub current: i32,
    pub max: i32,
}

impl Counter {
    /// A full counter
    pub fn full(max: i32) -> Self {
        let max = max.max(0);
        Counter { current: max, max }
    }

    /// Set the value, clamped into range
    pub fn set(&mut self, value: i32) {
        self.current = value.clamp(0, self.max);
    }

    /// Add (or subtract) from the value, clamped into range
    pub fn adjust(&mut self, delta: i32) {
        self.set(self.current.saturating_add(delta));
    }

    pub fn percent(&self) -> f64 {
        if self.max <= 0 {
            return 0.0;
        }
        (self.current as f64 / self.max as f64 * 100.0).clamp(0.0, 100.0)
    }
}

/// Per-user session state
///
/// Each session owns its die source and history; nothing is shared between
/// sessions and nothing outlives the value.
pub struct Session<D: DieSource = StdRng> {
    character: Character,
    dice: D,
    history: History,
    health: Counter,
    energy: Counter,
    last_ability: Option<HistoryEntry>,
    last_skill: Option<HistoryEntry>,
}

impl Session<StdRng> {
    /// Start a session with an entropy-seeded generator
    pub fn new(character: Character) -> Self {
        Session::with_dice(character, StdRng::from_entropy())
    }

    /// Start a session with a fixed seed
    pub fn seeded(character: Character, seed: u64) -> Self {
        Session::with_dice(character, StdRng::seed_from_u64(seed))
    }
}

impl<D: DieSource> Session<D> {
    /// Start a session with a given die source
    pub fn with_dice(character: Character, dice: D) -> Self {
        let health = Counter::full(character.derived.max_health);
        let energy = Counter::full(character.derived.max_energy);
        Session {
            character,
            dice,
            history: History::new(),
            health,
            energy,
            last_ability: None,
            last_skill: None,
        }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn dice(&self) -> &D {
        &self.dice
    }

    pub fn health(&self) -> Counter {
        self.health
    }

    pub fn energy(&self) -> Counter {
        self.energy
    }

    pub fn set_health(&mut self, value: i32) {
        self.health.set(value);
    }

    pub fn set_energy(&mut self, value: i32) {
        self.energy.set(value);
    }

    pub fn adjust_health(&mut self, delta: i32) {
        self.health.adjust(delta);
        debug!(current = self.health.current, "health changed");
    }

    pub fn adjust_energy(&mut self, delta: i32) {
        self.energy.adjust(delta);
        debug!(current = self.energy.current, "energy changed");
    }

    /// Last ability output, if any
    pub fn last_ability(&self) -> Option<&HistoryEntry> {
        self.last_ability.as_ref()
    }

    /// Last skill check output, if any
    pub fn last_skill(&self) -> Option<&HistoryEntry> {
        self.last_skill.as_ref()
    }

    /// Cast an ability and record the outcome
    ///
    /// The listed cost is flavor only; energy is left untouched.
    pub fn cast(&mut self, ability: Ability) -> Result<Payload, SheetError> {
        let caster = self.character.caster()?;
        let payload = ability.cast(&caster, &mut self.dice)?.to_payload();
        let entry = self.history.record(ability.history_label(), payload.clone());
        self.last_ability = Some(entry.clone());
        Ok(payload)
    }

    /// Cast an ability looked up by name
    pub fn cast_by_name(&mut self, name: &str) -> Result<Payload, SheetError> {
        let ability =
            Ability::from_name(name).ok_or_else(|| SheetError::UnknownAbility(name.to_string()))?;
        self.cast(ability)
    }

    /// Roll a skill check by skill name and record the outcome
    pub fn roll_skill(&mut self, name: &str) -> Result<Payload, SheetError> {
        let skill = self
            .character
            .skills
            .get(name)
            .ok_or_else(|| SheetError::UnknownSkill(name.to_string()))?;
        let label = format!("Perícia: {}", skill.name);
        let payload = roll_skill(&skill.name, skill.total(), &mut self.dice)?;
        let entry = self.history.record(label, payload.clone());
        self.last_skill = Some(entry.clone());
        Ok(payload)
    }
}
