//! value — identifiers and artifacts of a manifest.
//!
//! EntryId = String | i64, Artifact = String | Number.
//!
//! Ключи в файле — всегда JSON-строки, поэтому EntryId сводится к канонической
//! строке (`as_key`): строка как есть, целое — в десятичной записи. Обратно в
//! число ключи не приводятся, т.е. `Int(42)` и `Str("42")` — одна и та же запись.
//!
//! Artifact сериализуется без тега: JSON string или JSON number.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::{ManifestError, Result};

// ----------------- EntryId -----------------

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryId {
    Str(String),
    Int(i64),
}

impl EntryId {
    /// Canonical key under which the entry is stored and persisted.
    pub fn as_key(&self) -> String {
        match self {
            EntryId::Str(s) => s.clone(),
            EntryId::Int(n) => n.to_string(),
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Str(s) => f.write_str(s),
            EntryId::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        EntryId::Str(s.to_string())
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        EntryId::Str(s)
    }
}

impl From<&String> for EntryId {
    fn from(s: &String) -> Self {
        EntryId::Str(s.clone())
    }
}

impl From<i64> for EntryId {
    fn from(n: i64) -> Self {
        EntryId::Int(n)
    }
}

impl From<i32> for EntryId {
    fn from(n: i32) -> Self {
        EntryId::Int(n as i64)
    }
}

impl From<u32> for EntryId {
    fn from(n: u32) -> Self {
        EntryId::Int(n as i64)
    }
}

impl From<&EntryId> for EntryId {
    fn from(id: &EntryId) -> Self {
        id.clone()
    }
}

impl TryFrom<&Value> for EntryId {
    type Error = ManifestError;

    fn try_from(v: &Value) -> Result<Self> {
        match v {
            Value::String(s) => Ok(EntryId::Str(s.clone())),
            Value::Number(n) => n.as_i64().map(EntryId::Int).ok_or_else(|| {
                ManifestError::invalid(format!("id must be an integer, got {n}"))
            }),
            other => Err(ManifestError::invalid(format!(
                "id must be a string or number, got {}",
                kind_of(other)
            ))),
        }
    }
}

// ----------------- Artifact -----------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Artifact {
    Text(String),
    Number(Number),
}

impl Artifact {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Artifact::Text(s) => Some(s),
            Artifact::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Artifact::Text(_) => None,
            Artifact::Number(n) => Some(n),
        }
    }
}

/// Text never equals a number ("1" != 1); numbers compare by value (1 == 1.0).
impl PartialEq for Artifact {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Artifact::Text(a), Artifact::Text(b)) => a == b,
            (Artifact::Number(a), Artifact::Number(b)) => numbers_eq(a, b),
            _ => false,
        }
    }
}

fn numbers_eq(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Text(s) => f.write_str(s),
            Artifact::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Artifact {
    fn from(s: &str) -> Self {
        Artifact::Text(s.to_string())
    }
}

impl From<String> for Artifact {
    fn from(s: String) -> Self {
        Artifact::Text(s)
    }
}

impl From<&String> for Artifact {
    fn from(s: &String) -> Self {
        Artifact::Text(s.clone())
    }
}

impl From<i64> for Artifact {
    fn from(n: i64) -> Self {
        Artifact::Number(n.into())
    }
}

impl From<i32> for Artifact {
    fn from(n: i32) -> Self {
        Artifact::Number(n.into())
    }
}

impl From<u64> for Artifact {
    fn from(n: u64) -> Self {
        Artifact::Number(n.into())
    }
}

impl From<&Artifact> for Artifact {
    fn from(a: &Artifact) -> Self {
        a.clone()
    }
}

/// NaN and infinities have no JSON form.
impl TryFrom<f64> for Artifact {
    type Error = ManifestError;

    fn try_from(x: f64) -> Result<Self> {
        Number::from_f64(x)
            .map(Artifact::Number)
            .ok_or_else(|| ManifestError::invalid(format!("artifact must be a finite number, got {x}")))
    }
}

impl TryFrom<&Value> for Artifact {
    type Error = ManifestError;

    fn try_from(v: &Value) -> Result<Self> {
        match v {
            Value::String(s) => Ok(Artifact::Text(s.clone())),
            Value::Number(n) => Ok(Artifact::Number(n.clone())),
            other => Err(ManifestError::invalid(format!(
                "artifact must be a string or number, got {}",
                kind_of(other)
            ))),
        }
    }
}

/// Parse a JSON sequence of artifacts. Anything but an array of strings/numbers
/// is an InvalidArgument.
pub fn artifacts_from_value(v: &Value) -> Result<Vec<Artifact>> {
    let arr = v.as_array().ok_or_else(|| {
        ManifestError::invalid(format!("artifacts must be an array, got {}", kind_of(v)))
    })?;
    arr.iter().map(Artifact::try_from).collect()
}

pub(crate) fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_id_key_is_decimal() {
        assert_eq!(EntryId::from(42).as_key(), "42");
        assert_eq!(EntryId::from(-7i64).as_key(), "-7");
        assert_eq!(EntryId::from("build-7").as_key(), "build-7");
    }

    #[test]
    fn id_from_value_rejects_non_scalars_and_fractions() {
        assert_eq!(EntryId::try_from(&json!(5)).unwrap(), EntryId::Int(5));
        assert!(EntryId::try_from(&json!({"a": 1})).unwrap_err().is_invalid_argument());
        assert!(EntryId::try_from(&json!([1])).unwrap_err().is_invalid_argument());
        assert!(EntryId::try_from(&json!(1.5)).unwrap_err().is_invalid_argument());
        assert!(EntryId::try_from(&json!(null)).is_err());
    }

    #[test]
    fn artifact_equality_is_strict_across_kinds() {
        assert_ne!(Artifact::from("1"), Artifact::from(1));
        assert_eq!(Artifact::from(1), Artifact::try_from(1.0).unwrap());
        assert_eq!(Artifact::from(7u64), Artifact::from(7i64));
        assert_ne!(Artifact::from(2), Artifact::try_from(2.5).unwrap());
    }

    #[test]
    fn artifact_untagged_serde() {
        let list: Vec<Artifact> = serde_json::from_value(json!(["a.out", 3, 1.5])).unwrap();
        assert_eq!(list[0], Artifact::from("a.out"));
        assert_eq!(list[1], Artifact::from(3));
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["a.out",3,1.5]"#);
        assert!(Artifact::try_from(f64::NAN).is_err());
    }

    #[test]
    fn artifacts_from_value_checks_shape() {
        assert!(artifacts_from_value(&json!("a.out")).unwrap_err().is_invalid_argument());
        assert!(artifacts_from_value(&json!(["a", {"x": 1}])).unwrap_err().is_invalid_argument());
        assert_eq!(artifacts_from_value(&json!([])).unwrap(), Vec::<Artifact>::new());
    }
}
