use std::collections::BTreeMap;

use serde_json::Map;
use serde_json::Value as JsonValue;
use tracing::trace;

use crate::value::integral;
use crate::AttributePath;
use crate::AttributeType;
use crate::Attributes;
use crate::ConvertError;
use crate::Schema;
use crate::Value;

impl Schema {
    /// Render a resource value as a manifest document: attribute names turn into
    /// Kubernetes field names, provider-only attributes and nulls are dropped.
    pub fn to_manifest(&self, value: &Value) -> Result<JsonValue, ConvertError> {
        let root = AttributePath::root();
        match value {
            Value::Object(entries) => convert_object(&self.attributes, entries, &root),
            other => Err(mismatch(
                &root,
                &AttributeType::SingleNested(self.attributes.clone()),
                other,
            )),
        }
    }
}

fn convert_object(
    attributes: &Attributes,
    entries: &BTreeMap<String, Value>,
    path: &AttributePath,
) -> Result<JsonValue, ConvertError> {
    let mut fields = Map::new();
    for (name, attribute) in attributes.iter() {
        let field = match attribute.field_name(name) {
            Some(field) => field,
            None => continue,
        };
        let value = match entries.get(name) {
            Some(value) if !value.is_null() => value,
            _ => continue,
        };
        let converted = convert(&attribute.attr_type, value, &path.attribute(name))?;
        fields.insert(field.into_owned(), converted);
    }
    trace!(%path, fields = fields.len(), "converted object");
    Ok(JsonValue::Object(fields))
}

fn convert(attr_type: &AttributeType, value: &Value, path: &AttributePath) -> Result<JsonValue, ConvertError> {
    if value.is_unknown() {
        return Err(ConvertError::UnknownValue(path.clone()));
    }

    match (attr_type, value) {
        (_, Value::Null) => Ok(JsonValue::Null),
        (AttributeType::String, Value::String(text)) => Ok(JsonValue::String(text.clone())),
        (AttributeType::Bool, Value::Bool(flag)) => Ok(JsonValue::Bool(*flag)),
        (AttributeType::Int64, Value::Number(number)) => integral(number)
            .map(JsonValue::from)
            .ok_or_else(|| ConvertError::NotInteger {
                path: path.clone(),
                value: number.to_string(),
            }),
        (AttributeType::IntOrString, Value::String(text)) => Ok(match canonical_i32(text) {
            Some(number) => JsonValue::from(number),
            None => JsonValue::String(text.clone()),
        }),
        (AttributeType::IntOrString, Value::Number(number)) => integral(number)
            .and_then(|number| i32::try_from(number).ok())
            .map(JsonValue::from)
            .ok_or_else(|| ConvertError::NotInteger {
                path: path.clone(),
                value: number.to_string(),
            }),
        (AttributeType::List(element), Value::List(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| convert_element(element, item, &path.index(index)))
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        (AttributeType::Map(element), Value::Object(entries)) => {
            let mut map = Map::new();
            for (key, item) in entries {
                map.insert(key.clone(), convert_element(element, item, &path.key(key))?);
            }
            Ok(JsonValue::Object(map))
        }
        (AttributeType::SingleNested(attributes), Value::Object(entries)) => {
            convert_object(attributes, entries, path)
        }
        (AttributeType::ListNested(attributes), Value::List(items)) => {
            let mut converted = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let item_path = path.index(index);
                match item {
                    Value::Object(entries) => converted.push(convert_object(attributes, entries, &item_path)?),
                    Value::Unknown => return Err(ConvertError::UnknownValue(item_path)),
                    other => {
                        return Err(mismatch(
                            &item_path,
                            &AttributeType::SingleNested(attributes.clone()),
                            other,
                        ))
                    }
                }
            }
            Ok(JsonValue::Array(converted))
        }
        (attr_type, other) => Err(mismatch(path, attr_type, other)),
    }
}

/// only plain decimals count as numbers, so `"+080"` survives as written
fn canonical_i32(text: &str) -> Option<i32> {
    text.parse::<i32>()
        .ok()
        .filter(|number| number.to_string() == text)
}

fn convert_element(element: &AttributeType, item: &Value, path: &AttributePath) -> Result<JsonValue, ConvertError> {
    if item.is_null() {
        return Err(mismatch(path, element, item));
    }
    convert(element, item, path)
}

fn mismatch(path: &AttributePath, attr_type: &AttributeType, value: &Value) -> ConvertError {
    ConvertError::TypeMismatch {
        path: path.clone(),
        expected: attr_type.describe(),
        found: value.type_name(),
    }
}
