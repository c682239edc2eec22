use std::collections::BTreeMap;

use tracing::trace;

use crate::value::integral;
use crate::Attribute;
use crate::AttributePath;
use crate::AttributeType;
use crate::Attributes;
use crate::Diagnostic;
use crate::Diagnostics;
use crate::Schema;
use crate::Value;

impl Schema {
    /// Check a configuration against the declarations: required attributes,
    /// undeclared attributes, value types and field validators.
    /// Unknown values pass.
    pub fn validate(&self, config: &Value) -> Diagnostics {
        let mut diags = Diagnostics::new();
        let root = AttributePath::root();
        match config {
            Value::Object(entries) => validate_object(&self.attributes, entries, &root, &mut diags),
            Value::Unknown => {}
            other => diags.push(Diagnostic::attribute_error(
                &root,
                "Invalid configuration",
                format!("expected object, got {}", other.type_name()),
            )),
        }
        trace!(problems = diags.len(), "validated configuration");
        diags
    }
}

fn validate_object(
    attributes: &Attributes,
    entries: &BTreeMap<String, Value>,
    path: &AttributePath,
    diags: &mut Diagnostics,
) {
    for (key, value) in entries {
        if !attributes.contains(key) && !value.is_null() {
            diags.push(Diagnostic::attribute_error(
                &path.attribute(key),
                "Unsupported argument",
                format!("an argument named {:?} is not expected here", key),
            ));
        }
    }

    for (name, attribute) in attributes.iter() {
        let child_path = path.attribute(name);
        match entries.get(name) {
            None | Some(Value::Null) => {
                if attribute.required {
                    diags.push(Diagnostic::attribute_error(
                        &child_path,
                        "Missing required argument",
                        format!("the argument {:?} is required, but no definition was found", name),
                    ));
                }
            }
            Some(value) => validate_attribute(attribute, value, &child_path, diags),
        }
    }
}

fn validate_attribute(
    attribute: &Attribute,
    value: &Value,
    path: &AttributePath,
    diags: &mut Diagnostics,
) {
    if !attribute.is_configurable() && !value.is_unknown() {
        diags.push(Diagnostic::attribute_error(
            path,
            "Invalid configuration",
            "the attribute is computed by the provider and cannot be set",
        ));
        return;
    }

    let before = diags.len();
    check_type(&attribute.attr_type, value, path, diags);
    if diags.len() > before {
        return;
    }

    for validator in &attribute.validators {
        validator.validate(path, value, diags);
    }
}

fn check_type(attr_type: &AttributeType, value: &Value, path: &AttributePath, diags: &mut Diagnostics) {
    if value.is_null() || value.is_unknown() {
        return;
    }

    let matches = match (attr_type, value) {
        (AttributeType::String, Value::String(_)) => true,
        (AttributeType::Bool, Value::Bool(_)) => true,
        (AttributeType::Int64, Value::Number(number)) => integral(number).is_some(),
        (AttributeType::IntOrString, Value::String(_)) => true,
        (AttributeType::IntOrString, Value::Number(number)) => integral(number).is_some(),
        (AttributeType::List(element), Value::List(items)) => {
            for (index, item) in items.iter().enumerate() {
                check_element(element, item, &path.index(index), diags);
            }
            true
        }
        (AttributeType::Map(element), Value::Object(entries)) => {
            for (key, item) in entries {
                check_element(element, item, &path.key(key), diags);
            }
            true
        }
        (AttributeType::SingleNested(attributes), Value::Object(entries)) => {
            validate_object(attributes, entries, path, diags);
            true
        }
        (AttributeType::ListNested(attributes), Value::List(items)) => {
            for (index, item) in items.iter().enumerate() {
                let item_path = path.index(index);
                match item {
                    Value::Object(entries) => validate_object(attributes, entries, &item_path, diags),
                    Value::Unknown => {}
                    other => diags.push(type_error(attr_type, other, &item_path)),
                }
            }
            true
        }
        _ => false,
    };

    if !matches {
        diags.push(type_error(attr_type, value, path));
    }
}

/// list and map elements must not be null
fn check_element(element: &AttributeType, item: &Value, path: &AttributePath, diags: &mut Diagnostics) {
    if item.is_null() {
        diags.push(Diagnostic::attribute_error(
            path,
            "Null value not allowed",
            format!("expected {}, got null", element.describe()),
        ));
    } else {
        check_type(element, item, path, diags);
    }
}

fn type_error(attr_type: &AttributeType, value: &Value, path: &AttributePath) -> Diagnostic {
    let expected = match attr_type {
        AttributeType::ListNested(_) => "object".to_owned(),
        other => other.describe(),
    };
    Diagnostic::attribute_error(
        path,
        "Incorrect attribute value type",
        format!("expected {}, got {}", expected, value.type_name()),
    )
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use crate::{Attribute, Attributes, Schema, Validator, Value};

    fn schema() -> Schema {
        let port = Attributes::new()
            .with(
                "container_port",
                Attribute::int64("port").required().validate(Validator::Port),
            )
            .with("protocol", Attribute::string("protocol").validate(Validator::OneOf(&["TCP", "UDP"])));
        let container = Attributes::new()
            .with("name", Attribute::string("name").required().validate(Validator::LabelName))
            .with("ports", Attribute::list_nested(port, "ports"));
        let metadata = Attributes::new()
            .with("name", Attribute::string("name").validate(Validator::Name))
            .with("labels", Attribute::string_map("labels").validate(Validator::Labels));
        let attributes = Attributes::new()
            .with("id", Attribute::string("id").computed().provider_only())
            .with("metadata", Attribute::single_nested(metadata, "metadata").required())
            .with("containers", Attribute::list_nested(container, "containers"));
        Schema::new("test", attributes)
    }

    #[test]
    fn test_valid_config() {
        let config = Value::from(json!({
            "metadata": { "name": "web", "labels": { "app": "web" } },
            "containers": [{ "name": "nginx", "ports": [{ "container_port": 80, "protocol": "TCP" }] }]
        }));
        let diags = schema().validate(&config);
        assert!(diags.is_empty(), "{}", diags);
    }

    #[test]
    fn test_missing_required() {
        let diags = schema().validate(&Value::from(json!({ "containers": [{}] })));
        assert!(diags.at("metadata").is_some());
        assert!(diags.at("containers[0].name").is_some());
    }

    #[test]
    fn test_nested_validator_path() {
        let config = Value::from(json!({
            "metadata": { "name": "Web" },
            "containers": [
                { "name": "nginx", "ports": [{ "container_port": 80 }, { "container_port": 99999 }] }
            ]
        }));
        let diags = schema().validate(&config);
        assert_eq!(diags.len(), 2, "{}", diags);
        assert_eq!(
            diags.at("metadata.name").map(|d| d.summary.as_str()),
            Some("Invalid name")
        );
        assert_eq!(
            diags.at("containers[0].ports[1].container_port").map(|d| d.summary.as_str()),
            Some("Invalid port")
        );
    }

    #[test]
    fn test_type_mismatch_skips_validators() {
        let config = Value::from(json!({
            "metadata": { "name": 42 },
            "containers": "nginx"
        }));
        let diags = schema().validate(&config);
        assert_eq!(diags.len(), 2, "{}", diags);
        assert_eq!(
            diags.at("metadata.name").map(|d| d.summary.as_str()),
            Some("Incorrect attribute value type")
        );
        assert!(diags.at("containers").is_some());
    }

    #[test]
    fn test_undeclared_and_computed() {
        let config = Value::from(json!({
            "metadata": {},
            "id": "123",
            "replicas": 3
        }));
        let diags = schema().validate(&config);
        assert_eq!(
            diags.at("id").map(|d| d.summary.as_str()),
            Some("Invalid configuration")
        );
        assert_eq!(
            diags.at("replicas").map(|d| d.summary.as_str()),
            Some("Unsupported argument")
        );
    }

    #[test]
    fn test_null_elements() {
        let config = Value::from(json!({
            "metadata": { "name": "web", "labels": { "app": null, "tier": "front" } },
            "containers": [{ "name": "nginx", "ports": [null] }]
        }));
        let diags = schema().validate(&config);
        assert_eq!(
            diags.at(r#"metadata.labels["app"]"#).map(|d| d.summary.as_str()),
            Some("Null value not allowed")
        );
        assert_eq!(
            diags.at("containers[0].ports[0]").map(|d| d.summary.as_str()),
            Some("Incorrect attribute value type")
        );
        assert_eq!(diags.len(), 2, "{}", diags);
    }

    #[test]
    fn test_unknown_passes() {
        let mut config = Value::from(json!({ "metadata": { "name": "web" } }));
        config.set("containers", Value::Unknown);
        config.set("id", Value::Unknown);
        assert!(schema().validate(&config).is_empty());
    }
}
