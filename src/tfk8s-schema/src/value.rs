use std::collections::BTreeMap;
use std::fmt;

use serde_json::Number;
use serde_json::Value as JsonValue;

/// Attribute value as exchanged with Terraform.
/// Maps and nested objects share the `Object` representation, the schema tells them apart.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    /// not known until apply
    Unknown,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// true when neither this value nor anything nested in it is unknown
    pub fn is_wholly_known(&self) -> bool {
        match self {
            Self::Unknown => false,
            Self::List(items) => items.iter().all(Value::is_wholly_known),
            Self::Object(entries) => entries.values().all(Value::is_wholly_known),
            _ => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// integral numbers only, `3.0` counts as integral
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(number) => integral(number),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|entries| entries.get(key))
    }

    /// look up a dotted attribute path such as `metadata.name`
    pub fn pointer(&self, dotted: &str) -> Option<&Value> {
        dotted
            .split('.')
            .try_fold(self, |current, key| match key.parse::<usize>() {
                Ok(index) => current.as_list().and_then(|items| items.get(index)),
                Err(_) => current.get(key),
            })
    }

    /// set an attribute, only has an effect on objects
    pub fn set<K: Into<String>>(&mut self, key: K, value: Value) {
        if let Self::Object(entries) = self {
            entries.insert(key.into(), value);
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Unknown => "unknown",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }

    /// plain JSON form, `None` if any part is unknown
    pub fn to_json(&self) -> Option<JsonValue> {
        Some(match self {
            Self::Null => JsonValue::Null,
            Self::Unknown => return None,
            Self::Bool(value) => JsonValue::Bool(*value),
            Self::Number(value) => JsonValue::Number(value.clone()),
            Self::String(value) => JsonValue::String(value.clone()),
            Self::List(items) => JsonValue::Array(
                items
                    .iter()
                    .map(Value::to_json)
                    .collect::<Option<Vec<_>>>()?,
            ),
            Self::Object(entries) => {
                let mut map = serde_json::Map::new();
                for (key, value) in entries {
                    map.insert(key.clone(), value.to_json()?);
                }
                JsonValue::Object(map)
            }
        })
    }
}

pub(crate) fn integral(number: &Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }
    number
        .as_f64()
        .filter(|value| value.fract() == 0.0 && *value >= i64::MIN as f64 && *value <= i64::MAX as f64)
        .map(|value| value as i64)
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(value) => Self::Bool(value),
            JsonValue::Number(value) => Self::Number(value),
            JsonValue::String(value) => Self::String(value),
            JsonValue::Array(items) => Self::List(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(entries) => Self::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json() {
            Some(json) => write!(f, "{}", json),
            None => write!(f, "(known after apply)"),
        }
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::Value;

    #[test]
    fn test_from_json() {
        let value = Value::from(json!({
            "metadata": { "name": "web", "labels": { "app": "web" } },
            "spec": { "replicas": 3, "ports": [80, 443] }
        }));

        assert_eq!(value.pointer("metadata.name").and_then(Value::as_str), Some("web"));
        assert_eq!(value.pointer("spec.replicas").and_then(Value::as_i64), Some(3));
        assert_eq!(value.pointer("spec.ports.1").and_then(Value::as_i64), Some(443));
        assert!(value.pointer("spec.missing").is_none());
        assert!(value.is_wholly_known());
    }

    #[test]
    fn test_unknown() {
        let mut value = Value::from(json!({ "id": null }));
        assert!(value.is_wholly_known());

        value.set("id", Value::Unknown);
        assert!(!value.is_wholly_known());
        assert!(value.to_json().is_none());
        assert_eq!(value.to_string(), "(known after apply)");
    }

    #[test]
    fn test_integral_float() {
        let value = Value::from(json!(3.0));
        assert_eq!(value.as_i64(), Some(3));
        assert_eq!(Value::from(json!(3.5)).as_i64(), None);
    }
}
