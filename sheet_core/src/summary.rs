//! Summary - Headline and secondary fields extracted from a result payload
//!
//! Payload shapes differ per ability, so the headline comes from an ordered
//! rule chain over the labeled values:
//! 1. the first numeric damage/heal field
//! 2. the sum of the roll list plus any numeric modifier/bonus fields
//! 3. the first present attack-roll or save-DC field
//! 4. the placeholder `-`

use crate::label;
use crate::payload::{Payload, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

const DAMAGE_KEYWORDS: &[&str] = &["dano", "damage"];
const HEAL_KEYWORDS: &[&str] = &["cura", "heal"];
const BONUS_KEYWORDS: &[&str] = &["mod", "bonus"];

const ROLLS_FIELDS: &[&str] = &["rolagens", "rolls"];
const RANGE_FIELDS: &[&str] = &["alcance", "range"];
const EFFECT_FIELDS: &[&str] = &["efeito", "effect"];
const DESCRIPTION_FIELDS: &[&str] = &["descricao", "description"];
const ATTACK_FIELDS: &[&str] = &["rolagem de ataque", "ataque", "acerto", "attack roll", "attack"];
const SAVE_DC_FIELDS: &[&str] = &["cd do tr", "cd", "save dc"];
const FALLBACK_FIELDS: &[&str] = &[
    "rolagem acerto",
    "ataque",
    "acerto",
    "rolagem de ataque",
    "attack roll",
    "attack",
    "cd",
    "cd do tr",
    "save dc",
];

/// Kind of headline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadlineLabel {
    Damage,
    Heal,
    Result,
}

impl HeadlineLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadlineLabel::Damage => "Damage",
            HeadlineLabel::Heal => "Heal",
            HeadlineLabel::Result => "Result",
        }
    }
}

impl fmt::Display for HeadlineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Headline value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadlineValue {
    Number(i64),
    Text(String),
    /// Nothing usable in the payload
    Placeholder,
}

impl HeadlineValue {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            HeadlineValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&Value> for HeadlineValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(n) => HeadlineValue::Number(*n),
            other => HeadlineValue::Text(other.to_string()),
        }
    }
}

impl fmt::Display for HeadlineValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadlineValue::Number(n) => write!(f, "{}", n),
            HeadlineValue::Text(text) => f.write_str(text),
            HeadlineValue::Placeholder => f.write_str("-"),
        }
    }
}

/// The single most important number of a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub label: HeadlineLabel,
    pub value: HeadlineValue,
    /// Payload field the value came from, when it came from one field
    pub source: Option<String>,
}

/// Display-ready view of a payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub headline: Headline,
    pub range: Option<String>,
    pub effect: Option<String>,
    pub description: Option<String>,
    /// Individual die faces
    pub rolls: Vec<i64>,
    pub attack_total: Option<String>,
    pub save_dc: Option<String>,
}

impl Summary {
    /// "Alcance: …" / "Efeito: …" chips
    pub fn chips(&self) -> Vec<String> {
        let mut chips = Vec::new();
        if let Some(range) = &self.range {
            chips.push(format!("Alcance: {}", range));
        }
        if let Some(effect) = &self.effect {
            chips.push(format!("Efeito: {}", effect));
        }
        chips
    }
}

type Rule = fn(&Payload) -> Option<Headline>;

/// Headline rules in priority order
const RULES: &[Rule] = &[damage_or_heal, roll_total, fallback_field];

/// Summarize a payload
///
/// Never fails: a payload missing every known field yields the placeholder
/// headline and empty secondary fields.
pub fn summarize(payload: &Payload) -> Summary {
    let headline = RULES
        .iter()
        .find_map(|rule| rule(payload))
        .unwrap_or(Headline {
            label: HeadlineLabel::Result,
            value: HeadlineValue::Placeholder,
            source: None,
        });

    Summary {
        headline,
        range: text_field(payload, RANGE_FIELDS),
        effect: text_field(payload, EFFECT_FIELDS),
        description: text_field(payload, DESCRIPTION_FIELDS),
        rolls: rolls(payload).to_vec(),
        attack_total: text_field(payload, ATTACK_FIELDS),
        save_dc: text_field(payload, SAVE_DC_FIELDS),
    }
}

fn contains_any(folded: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| folded.contains(kw))
}

/// First numeric field whose label mentions damage or healing
fn damage_or_heal(payload: &Payload) -> Option<Headline> {
    payload.iter().find_map(|(key, value)| {
        let n = value.as_number()?;
        let folded = label::fold(key);
        let kind = if contains_any(&folded, DAMAGE_KEYWORDS) {
            HeadlineLabel::Damage
        } else if contains_any(&folded, HEAL_KEYWORDS) {
            HeadlineLabel::Heal
        } else {
            return None;
        };
        Some(Headline {
            label: kind,
            value: HeadlineValue::Number(n),
            source: Some(key.to_string()),
        })
    })
}

/// Sum of the roll list plus numeric modifier/bonus fields
fn roll_total(payload: &Payload) -> Option<Headline> {
    let rolls = rolls(payload);
    if rolls.is_empty() {
        return None;
    }
    let bonus: i64 = payload
        .iter()
        .filter(|(key, _)| contains_any(&label::fold(key), BONUS_KEYWORDS))
        .filter_map(|(_, value)| value.as_number())
        .fold(0, i64::saturating_add);
    let roll_sum = rolls.iter().copied().fold(0, i64::saturating_add);

    Some(Headline {
        label: HeadlineLabel::Result,
        value: HeadlineValue::Number(roll_sum.saturating_add(bonus)),
        source: None,
    })
}

/// First present attack-roll or save-DC field
fn fallback_field(payload: &Payload) -> Option<Headline> {
    FALLBACK_FIELDS.iter().find_map(|alias| {
        let (key, value) = field(payload, &[*alias])?;
        Some(Headline {
            label: HeadlineLabel::Result,
            value: HeadlineValue::from(value),
            source: Some(key.to_string()),
        })
    })
}

/// First non-blank field matching any alias (case- and accent-insensitive)
fn field<'a>(payload: &'a Payload, aliases: &[&str]) -> Option<(&'a str, &'a Value)> {
    aliases.iter().find_map(|alias| {
        payload
            .iter()
            .find(|(key, value)| label::fold(key) == *alias && !value.is_blank())
    })
}

fn text_field(payload: &Payload, aliases: &[&str]) -> Option<String> {
    field(payload, aliases).map(|(_, value)| value.to_string())
}

fn rolls(payload: &Payload) -> &[i64] {
    field(payload, ROLLS_FIELDS)
        .and_then(|(_, value)| value.as_rolls())
        .unwrap_or(&[])
}
