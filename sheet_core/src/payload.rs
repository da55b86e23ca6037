//! Result payloads: ordered label → value records shown to the user

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single payload value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(i64),
    Rolls(Vec<i64>),
    Text(String),
}

impl Value {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_rolls(&self) -> Option<&[i64]> {
        match self {
            Value::Rolls(rolls) => Some(rolls),
            _ => None,
        }
    }

    /// Empty text and empty roll lists count as absent
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Number(_) => false,
            Value::Rolls(rolls) => rolls.is_empty(),
            Value::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(text) => f.write_str(text),
            Value::Rolls(rolls) => {
                let parts: Vec<String> = rolls.iter().map(|r| r.to_string()).collect();
                f.write_str(&parts.join(", "))
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<Vec<i32>> for Value {
    fn from(rolls: Vec<i32>) -> Self {
        Value::Rolls(rolls.into_iter().map(i64::from).collect())
    }
}

impl From<&[i32]> for Value {
    fn from(rolls: &[i32]) -> Self {
        Value::Rolls(rolls.iter().copied().map(i64::from).collect())
    }
}

/// Labeled values in insertion order
///
/// Labels are free-form display strings; the shape differs per ability, so
/// readers must tolerate any field being absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(IndexMap<String, Value>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value under the same label
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(label.into(), value.into());
    }

    /// Builder-style insert
    pub fn with(mut self, label: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(label, value);
        self
    }

    /// Exact-label lookup
    pub fn get(&self, label: &str) -> Option<&Value> {
        self.0.get(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pretty JSON for display
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Payload::new();
        for (label, value) in iter {
            payload.insert(label, value);
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_kept() {
        let payload = Payload::new()
            .with("Habilidade", "Convergência")
            .with("Custo", 1)
            .with("Rolagens", vec![3, 5]);

        let labels: Vec<&str> = payload.iter().map(|(k, _)| k).collect();
        assert_eq!(labels, vec!["Habilidade", "Custo", "Rolagens"]);
    }

    #[test]
    fn test_json_shape() {
        let payload = Payload::new()
            .with("Rolagens", vec![8, 1])
            .with("Dano (2d8)", 14)
            .with("Alcance", "12m");

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"Rolagens":[8,1],"Dano (2d8)":14,"Alcance":"12m"}"#);

        let back: Payload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from(vec![1, 2, 3]).to_string(), "1, 2, 3");
        assert_eq!(Value::from("23(CRIT)").to_string(), "23(CRIT)");
        assert_eq!(Value::from(-2).to_string(), "-2");
    }

    #[test]
    fn test_blank_values() {
        assert!(Value::from("  ").is_blank());
        assert!(Value::Rolls(vec![]).is_blank());
        assert!(!Value::from(0).is_blank());
    }
}
