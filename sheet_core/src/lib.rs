//! sheet_core - Derived-stat and dice-resolution engine for a character sheet
//!
//! This library provides:
//! - Dice: uniform die rolls over a swappable `DieSource`
//! - Stats: attribute modifiers and the derived stat block
//! - Skills: the skill table with per-skill bonus totals and skill checks
//! - Abilities: the ability catalog and its resolver (including crit branching)
//! - Summary: headline extraction from heterogeneous result payloads
//! - Session: per-user history and health/energy counters

pub mod abilities;
pub mod character;
pub mod config;
pub mod dice;
pub mod error;
pub mod label;
pub mod payload;
pub mod prelude;
pub mod session;
pub mod skills;
pub mod stats;
pub mod summary;

// Re-export core types for convenience
pub use abilities::{Ability, AbilityOutcome, AttackRoll, Caster, DamageRoll};
pub use character::Character;
pub use config::{default_sheet, load_sheet, parse_sheet, ConfigError, SheetConfig};
pub use dice::{roll_dice, roll_dice_floor_shifted, DiceError, DiceRoll, DieSource, ScriptedDice};
pub use error::SheetError;
pub use payload::{Payload, Value};
pub use session::{Counter, History, HistoryEntry, Session, RECENT_LIMIT};
pub use skills::{roll_skill, BonusSets, SkillRow, SkillTable, SkillTotal};
pub use stats::{derive_stats, mastery_rank, modifier, Attribute, AttributeSet, DerivedStats, Equipment};
pub use summary::{summarize, Headline, HeadlineLabel, HeadlineValue, Summary};
