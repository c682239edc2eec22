use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Value that holds either an int32 or a string, as used by `targetPort`,
/// `maxSurge`, probe ports and friends.
/// Serializes to the inner value without any tagging.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Int32OrString {
    Int(i32),
    String(String),
}

impl Int32OrString {
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(*value),
            Self::String(_) => None,
        }
    }
}

impl Default for Int32OrString {
    fn default() -> Self {
        Self::Int(0)
    }
}

/// strings written as canonical int32 decimals become `Int`;
/// `+8`, `08` and the like stay strings
impl FromStr for Int32OrString {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i32>()
            .ok()
            .filter(|number| number.to_string() == s)
            .map(Self::Int)
            .unwrap_or_else(|| Self::String(s.to_owned())))
    }
}

impl From<i32> for Int32OrString {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Int32OrString {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl fmt::Display for Int32OrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{}", value),
            Self::String(value) => write!(f, "{}", value),
        }
    }
}

impl Serialize for Int32OrString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Int(value) => serializer.serialize_i32(*value),
            Self::String(value) => serializer.serialize_str(value),
        }
    }
}

struct Int32OrStringVisitor;

impl Visitor<'_> for Int32OrStringVisitor {
    type Value = Int32OrString;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a 32-bit integer or a string")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i32::try_from(v)
            .map(Int32OrString::Int)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i32::try_from(v)
            .map(Int32OrString::Int)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Int32OrString::String(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Int32OrString::String(v))
    }
}

impl<'de> Deserialize<'de> for Int32OrString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(Int32OrStringVisitor)
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use crate::Int32OrString;

    #[test]
    fn test_from_str() {
        assert_eq!("8080".parse::<Int32OrString>(), Ok(Int32OrString::Int(8080)));
        assert_eq!(
            "http".parse::<Int32OrString>(),
            Ok(Int32OrString::String("http".to_owned()))
        );
        assert_eq!(
            "25%".parse::<Int32OrString>(),
            Ok(Int32OrString::String("25%".to_owned()))
        );
        assert_eq!("-1".parse::<Int32OrString>(), Ok(Int32OrString::Int(-1)));
        assert_eq!(
            "+080".parse::<Int32OrString>(),
            Ok(Int32OrString::String("+080".to_owned()))
        );
        assert_eq!(
            "007".parse::<Int32OrString>(),
            Ok(Int32OrString::String("007".to_owned()))
        );
    }

    #[test]
    fn test_int_serde() {
        let value: Int32OrString = serde_json::from_value(json!(100)).expect("int");
        assert_eq!(value, Int32OrString::Int(100));
        assert_eq!(serde_json::to_value(&value).expect("ser"), json!(100));
    }

    #[test]
    fn test_out_of_range() {
        serde_json::from_value::<Int32OrString>(json!(4_294_967_296_u64))
            .expect_err("too large for int32");
        serde_json::from_value::<Int32OrString>(json!(2.5)).expect_err("float");
    }

    #[test]
    fn test_str_yaml() {
        let value: Int32OrString = serde_yaml::from_str("25%").expect("str");
        assert_eq!(value, Int32OrString::from("25%"));
        assert_eq!(serde_yaml::to_string(&value).expect("ser"), "25%\n");
    }
}
