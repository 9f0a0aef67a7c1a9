//! Valores de respuesta enviados por la capa de presentación.
//!
//! Un valor es texto o número; el mapa de respuestas acumula valores por id de
//! campo a través de todos los pasos. El orden de inserción es irrelevante
//! (se usa `BTreeMap` para que la serialización sea estable).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Respuestas acumuladas o enviadas por paso: id de campo → valor.
pub type Answers = BTreeMap<String, AnswerValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
}

impl AnswerValue {
    /// `true` cuando el valor cuenta como ausente: texto vacío o sólo espacios.
    pub fn is_blank(&self) -> bool {
        match self {
            AnswerValue::Text(s) => s.trim().is_empty(),
            AnswerValue::Number(_) => false,
        }
    }

    /// Interpretación numérica del valor. Sólo valores finitos.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            AnswerValue::Number(n) => *n,
            AnswerValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        n.is_finite().then_some(n)
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Number(n) => write!(f, "{n}"),
            AnswerValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        AnswerValue::Text(s)
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        AnswerValue::Number(n)
    }
}

impl From<i64> for AnswerValue {
    fn from(n: i64) -> Self {
        AnswerValue::Number(n as f64)
    }
}

impl From<i32> for AnswerValue {
    fn from(n: i32) -> Self {
        AnswerValue::Number(f64::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_blank_but_zero_is_not() {
        assert!(AnswerValue::from("   ").is_blank());
        assert!(!AnswerValue::from(0).is_blank());
    }

    #[test]
    fn numeric_text_parses_and_garbage_does_not() {
        assert_eq!(AnswerValue::from(" 42.5 ").as_number(), Some(42.5));
        assert_eq!(AnswerValue::from("4O").as_number(), None);
        assert_eq!(AnswerValue::from("NaN").as_number(), None);
        assert_eq!(AnswerValue::Number(f64::INFINITY).as_number(), None);
    }

    #[test]
    fn untagged_json_roundtrip_keeps_kind() {
        let v: AnswerValue = serde_json::from_str("10").expect("number");
        assert_eq!(v, AnswerValue::Number(10.0));
        let v: AnswerValue = serde_json::from_str("\"10\"").expect("text");
        assert_eq!(v, AnswerValue::Text("10".into()));
    }
}
