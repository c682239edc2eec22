//! Field level validators and the Kubernetes name formats they check.

use lazy_static::lazy_static;
use regex::Regex;

use crate::AttributePath;
use crate::Diagnostic;
use crate::Diagnostics;
use crate::Value;

pub const DNS1123_LABEL_MAX_LENGTH: usize = 63;
pub const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;
pub const QUALIFIED_NAME_MAX_LENGTH: usize = 63;
pub const LABEL_VALUE_MAX_LENGTH: usize = 63;
pub const PORT_NAME_MAX_LENGTH: usize = 15;
pub const TOTAL_ANNOTATION_SIZE_LIMIT: usize = 256 * 1024;

lazy_static! {
    static ref DNS1123_LABEL: Regex = Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").unwrap();
    static ref DNS1123_SUBDOMAIN: Regex =
        Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$").unwrap();
    static ref QUALIFIED_NAME: Regex =
        Regex::new(r"^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$").unwrap();
    static ref PORT_NAME: Regex = Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").unwrap();
}

/// RFC 1123 subdomain, used for most object names
pub fn check_dns1123_subdomain(value: &str) -> Result<(), String> {
    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        return Err(format!(
            "must be no more than {} characters",
            DNS1123_SUBDOMAIN_MAX_LENGTH
        ));
    }
    if !DNS1123_SUBDOMAIN.is_match(value) {
        return Err("a lowercase RFC 1123 subdomain must consist of lower case alphanumeric \
                    characters, '-' or '.', and must start and end with an alphanumeric character"
            .to_owned());
    }
    Ok(())
}

/// RFC 1123 label, used for container names and the like
pub fn check_dns1123_label(value: &str) -> Result<(), String> {
    if value.len() > DNS1123_LABEL_MAX_LENGTH {
        return Err(format!(
            "must be no more than {} characters",
            DNS1123_LABEL_MAX_LENGTH
        ));
    }
    if !DNS1123_LABEL.is_match(value) {
        return Err("a lowercase RFC 1123 label must consist of lower case alphanumeric \
                    characters or '-', and must start and end with an alphanumeric character"
            .to_owned());
    }
    Ok(())
}

/// label and annotation keys: optional DNS subdomain prefix, then a name
pub fn check_qualified_name(value: &str) -> Result<(), String> {
    let (prefix, name) = match value.split_once('/') {
        Some((prefix, name)) => (Some(prefix), name),
        None => (None, value),
    };
    if let Some(prefix) = prefix {
        if prefix.is_empty() {
            return Err("prefix part must be non-empty".to_owned());
        }
        check_dns1123_subdomain(prefix).map_err(|err| format!("prefix part {}", err))?;
    }
    if name.is_empty() {
        return Err("name part must be non-empty".to_owned());
    }
    if name.len() > QUALIFIED_NAME_MAX_LENGTH {
        return Err(format!(
            "name part must be no more than {} characters",
            QUALIFIED_NAME_MAX_LENGTH
        ));
    }
    if !QUALIFIED_NAME.is_match(name) {
        return Err("name part must consist of alphanumeric characters, '-', '_' or '.', and \
                    must start and end with an alphanumeric character"
            .to_owned());
    }
    Ok(())
}

pub fn check_label_value(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }
    if value.len() > LABEL_VALUE_MAX_LENGTH {
        return Err(format!(
            "must be no more than {} characters",
            LABEL_VALUE_MAX_LENGTH
        ));
    }
    if !QUALIFIED_NAME.is_match(value) {
        return Err("a valid label must be an empty string or consist of alphanumeric \
                    characters, '-', '_' or '.', and must start and end with an alphanumeric \
                    character"
            .to_owned());
    }
    Ok(())
}

/// IANA service name, as accepted for named ports
pub fn check_port_name(value: &str) -> Result<(), String> {
    if value.len() > PORT_NAME_MAX_LENGTH {
        return Err(format!(
            "must be no more than {} characters",
            PORT_NAME_MAX_LENGTH
        ));
    }
    if !PORT_NAME.is_match(value) {
        return Err("must contain only lowercase alphanumeric characters or '-' and must start \
                    and end with an alphanumeric character"
            .to_owned());
    }
    if value.contains("--") {
        return Err("must not contain consecutive hyphens".to_owned());
    }
    if !value.chars().any(|ch| ch.is_ascii_lowercase()) {
        return Err("must contain at least one letter".to_owned());
    }
    Ok(())
}

pub fn check_port_number(value: i64) -> Result<(), String> {
    if (1..=65535).contains(&value) {
        Ok(())
    } else {
        Err(format!("{} must be between 1 and 65535, inclusive", value))
    }
}

pub fn check_rfc3339(value: &str) -> Result<(), String> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|_| ())
        .map_err(|err| format!("must be an RFC 3339 timestamp: {}", err))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validator {
    /// DNS-1123 subdomain
    Name,
    /// DNS-1123 label
    LabelName,
    Labels,
    Annotations,
    DateTime,
    Port,
    OneOf(&'static [&'static str]),
    Int64AtLeast(i64),
}

impl Validator {
    /// validate a known value; null and unknown values are skipped
    pub fn validate(&self, path: &AttributePath, value: &Value, diags: &mut Diagnostics) {
        match self {
            Self::Labels => self.validate_map(path, value, diags, true),
            Self::Annotations => {
                self.validate_map(path, value, diags, false);
                if let Some(entries) = value.as_object() {
                    let total: usize = entries
                        .iter()
                        .map(|(key, value)| key.len() + value.as_str().map(str::len).unwrap_or(0))
                        .sum();
                    if total > TOTAL_ANNOTATION_SIZE_LIMIT {
                        diags.push(Diagnostic::attribute_error(
                            path,
                            "Invalid annotations",
                            format!(
                                "total size of annotations must be at most {} bytes, got {}",
                                TOTAL_ANNOTATION_SIZE_LIMIT, total
                            ),
                        ));
                    }
                }
            }
            _ => match value {
                Value::List(items) => {
                    for (index, item) in items.iter().enumerate() {
                        self.validate_scalar(&path.index(index), item, diags);
                    }
                }
                _ => self.validate_scalar(path, value, diags),
            },
        }
    }

    fn validate_map(
        &self,
        path: &AttributePath,
        value: &Value,
        diags: &mut Diagnostics,
        check_values: bool,
    ) {
        let entries = match value.as_object() {
            Some(entries) => entries,
            None => return,
        };
        for (key, entry) in entries {
            if let Err(detail) = check_qualified_name(key) {
                diags.push(Diagnostic::attribute_error(
                    &path.key(key),
                    "Invalid key",
                    format!("{:?}: {}", key, detail),
                ));
            }
            if !check_values {
                continue;
            }
            if let Some(text) = entry.as_str() {
                if let Err(detail) = check_label_value(text) {
                    diags.push(Diagnostic::attribute_error(
                        &path.key(key),
                        "Invalid label value",
                        format!("{:?}: {}", text, detail),
                    ));
                }
            }
        }
    }

    fn validate_scalar(&self, path: &AttributePath, value: &Value, diags: &mut Diagnostics) {
        if value.is_null() || value.is_unknown() {
            return;
        }
        let result = match self {
            Self::Name => with_str(value, check_dns1123_subdomain),
            Self::LabelName => with_str(value, check_dns1123_label),
            Self::DateTime => with_str(value, check_rfc3339),
            Self::Port => match value {
                Value::String(text) => match text.parse::<i64>() {
                    Ok(number) => check_port_number(number),
                    Err(_) => check_port_name(text),
                },
                other => match other.as_i64() {
                    Some(number) => check_port_number(number),
                    None => Err("must be a whole number".to_owned()),
                },
            },
            Self::OneOf(allowed) => with_str(value, |text| {
                if allowed.contains(&text) {
                    Ok(())
                } else {
                    Err(format!(
                        "value must be one of: {}, got {:?}",
                        allowed
                            .iter()
                            .map(|option| format!("{:?}", option))
                            .collect::<Vec<_>>()
                            .join(", "),
                        text
                    ))
                }
            }),
            Self::Int64AtLeast(min) => match value.as_i64() {
                Some(number) if number >= *min => Ok(()),
                Some(number) => Err(format!("must be at least {}, got {}", min, number)),
                None => Err("must be a whole number".to_owned()),
            },
            Self::Labels | Self::Annotations => Ok(()),
        };

        if let Err(detail) = result {
            diags.push(Diagnostic::attribute_error(
                path,
                self.summary(),
                detail,
            ));
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            Self::Name | Self::LabelName => "Invalid name",
            Self::Labels => "Invalid labels",
            Self::Annotations => "Invalid annotations",
            Self::DateTime => "Invalid timestamp",
            Self::Port => "Invalid port",
            Self::OneOf(_) => "Invalid value",
            Self::Int64AtLeast(_) => "Value out of range",
        }
    }
}

fn with_str<F>(value: &Value, check: F) -> Result<(), String>
where
    F: FnOnce(&str) -> Result<(), String>,
{
    match value.as_str() {
        Some(text) => check(text),
        None => Err(format!("expected string, got {}", value.type_name())),
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::*;

    fn run(validator: Validator, value: serde_json::Value) -> Diagnostics {
        let mut diags = Diagnostics::new();
        validator.validate(&AttributePath::root().attribute("field"), &Value::from(value), &mut diags);
        diags
    }

    #[test]
    fn test_name() {
        assert!(run(Validator::Name, json!("web-0.example")).is_empty());
        assert!(run(Validator::Name, json!("Web")).has_error());
        assert!(run(Validator::Name, json!("-web")).has_error());
        assert!(run(Validator::Name, json!("a".repeat(254))).has_error());
    }

    #[test]
    fn test_label_name() {
        assert!(run(Validator::LabelName, json!("nginx")).is_empty());
        assert!(run(Validator::LabelName, json!("nginx.web")).has_error());
        assert!(run(Validator::LabelName, json!(["ok", "NOT_OK"])).has_error());
    }

    #[test]
    fn test_qualified_name() {
        assert!(check_qualified_name("app").is_ok());
        assert!(check_qualified_name("app.kubernetes.io/name").is_ok());
        assert!(check_qualified_name("/name").is_err());
        assert!(check_qualified_name("Example.com/name").is_err());
        assert!(check_qualified_name("example.com/").is_err());
        assert!(check_qualified_name("_name").is_err());
    }

    #[test]
    fn test_labels() {
        let diags = run(
            Validator::Labels,
            json!({ "app": "web", "tier": "-front", "bad key!": "x" }),
        );
        assert_eq!(diags.len(), 2);
        assert!(diags.at(r#"field["tier"]"#).is_some());
        assert!(diags.at(r#"field["bad key!"]"#).is_some());

        assert!(run(Validator::Labels, json!({ "empty": "" })).is_empty());
    }

    #[test]
    fn test_annotations() {
        assert!(run(
            Validator::Annotations,
            json!({ "example.com/note": "any value: even with spaces!" })
        )
        .is_empty());
        let huge = "x".repeat(TOTAL_ANNOTATION_SIZE_LIMIT);
        assert!(run(Validator::Annotations, json!({ "note": huge })).has_error());
    }

    #[test]
    fn test_datetime() {
        assert!(run(Validator::DateTime, json!("2024-05-01T10:00:00Z")).is_empty());
        assert!(run(Validator::DateTime, json!("2024-05-01T10:00:00+02:00")).is_empty());
        assert!(run(Validator::DateTime, json!("yesterday")).has_error());
    }

    #[test]
    fn test_port() {
        assert!(run(Validator::Port, json!(8080)).is_empty());
        assert!(run(Validator::Port, json!("8080")).is_empty());
        assert!(run(Validator::Port, json!("http")).is_empty());
        assert!(run(Validator::Port, json!(0)).has_error());
        assert!(run(Validator::Port, json!(65536)).has_error());
        assert!(run(Validator::Port, json!("70000")).has_error());
        assert!(run(Validator::Port, json!("my--port")).has_error());
        assert!(run(Validator::Port, json!("123-456")).has_error());
    }

    #[test]
    fn test_one_of() {
        const POLICIES: &[&str] = &["Always", "Never", "IfNotPresent"];
        assert!(run(Validator::OneOf(POLICIES), json!("Never")).is_empty());
        let diags = run(Validator::OneOf(POLICIES), json!("Sometimes"));
        let diag = diags.at("field").expect("diagnostic");
        assert_eq!(diag.summary, "Invalid value");
        assert!(diag.detail.contains("\"IfNotPresent\""));
    }

    #[test]
    fn test_int_at_least() {
        assert!(run(Validator::Int64AtLeast(0), json!(0)).is_empty());
        assert!(run(Validator::Int64AtLeast(0), json!(-1)).has_error());
    }

    #[test]
    fn test_skips_unknown() {
        let mut diags = Diagnostics::new();
        Validator::Name.validate(&AttributePath::root(), &Value::Unknown, &mut diags);
        assert!(diags.is_empty());
    }
}
