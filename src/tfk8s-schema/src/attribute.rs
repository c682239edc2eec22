use std::borrow::Cow;

use crate::snake_to_camel;
use crate::Validator;

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeType {
    String,
    Bool,
    Int64,
    /// string on the Terraform side, integer in the manifest when it parses as one
    IntOrString,
    List(Box<AttributeType>),
    Map(Box<AttributeType>),
    SingleNested(Attributes),
    ListNested(Attributes),
}

impl AttributeType {
    pub fn describe(&self) -> String {
        match self {
            Self::String | Self::IntOrString => "string".to_owned(),
            Self::Bool => "bool".to_owned(),
            Self::Int64 => "number".to_owned(),
            Self::List(element) => format!("list of {}", element.describe()),
            Self::Map(element) => format!("map of {}", element.describe()),
            Self::SingleNested(_) => "object".to_owned(),
            Self::ListNested(_) => "list of object".to_owned(),
        }
    }

    pub fn nested_attributes(&self) -> Option<&Attributes> {
        match self {
            Self::SingleNested(attributes) | Self::ListNested(attributes) => Some(attributes),
            _ => None,
        }
    }
}

/// how an attribute shows up in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldName {
    /// camelCase form of the attribute name
    Derived,
    Renamed(&'static str),
    /// managed by the provider, never rendered
    Omitted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub attr_type: AttributeType,
    pub description: &'static str,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub field: FieldName,
    pub validators: Vec<Validator>,
}

impl Attribute {
    pub fn new(attr_type: AttributeType, description: &'static str) -> Self {
        Self {
            attr_type,
            description,
            required: false,
            optional: true,
            computed: false,
            sensitive: false,
            field: FieldName::Derived,
            validators: vec![],
        }
    }

    pub fn string(description: &'static str) -> Self {
        Self::new(AttributeType::String, description)
    }

    pub fn bool(description: &'static str) -> Self {
        Self::new(AttributeType::Bool, description)
    }

    pub fn int64(description: &'static str) -> Self {
        Self::new(AttributeType::Int64, description)
    }

    pub fn int_or_string(description: &'static str) -> Self {
        Self::new(AttributeType::IntOrString, description)
    }

    pub fn string_list(description: &'static str) -> Self {
        Self::new(AttributeType::List(Box::new(AttributeType::String)), description)
    }

    pub fn int64_list(description: &'static str) -> Self {
        Self::new(AttributeType::List(Box::new(AttributeType::Int64)), description)
    }

    pub fn string_map(description: &'static str) -> Self {
        Self::new(AttributeType::Map(Box::new(AttributeType::String)), description)
    }

    pub fn single_nested(attributes: Attributes, description: &'static str) -> Self {
        Self::new(AttributeType::SingleNested(attributes), description)
    }

    pub fn list_nested(attributes: Attributes, description: &'static str) -> Self {
        Self::new(AttributeType::ListNested(attributes), description)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self.optional = true;
        self
    }

    /// set by the provider; stays optional only if it was marked so afterwards
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self.required = false;
        self.optional = false;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn k8s_name(mut self, name: &'static str) -> Self {
        self.field = FieldName::Renamed(name);
        self
    }

    pub fn provider_only(mut self) -> Self {
        self.field = FieldName::Omitted;
        self
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// true if the user may set the attribute in configuration
    pub fn is_configurable(&self) -> bool {
        self.required || self.optional
    }

    /// manifest field name for attribute `name`, `None` if never rendered
    pub fn field_name<'a>(&self, name: &'a str) -> Option<Cow<'a, str>> {
        match self.field {
            FieldName::Derived => Some(Cow::Owned(snake_to_camel(name))),
            FieldName::Renamed(renamed) => Some(Cow::Borrowed(renamed)),
            FieldName::Omitted => None,
        }
    }
}

/// ordered attribute declarations of one object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(Vec<(&'static str, Attribute)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// builder form of [`Attributes::insert`]
    pub fn with(mut self, name: &'static str, attribute: Attribute) -> Self {
        self.insert(name, attribute);
        self
    }

    /// add or replace the declaration of `name`
    pub fn insert(&mut self, name: &'static str, attribute: Attribute) {
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = attribute,
            None => self.0.push((name, attribute)),
        }
    }

    /// append every declaration of `other`
    pub fn merge(mut self, other: Attributes) -> Self {
        for (name, attribute) in other.0 {
            self.insert(name, attribute);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.0
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, attribute)| attribute)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Attribute)> {
        self.0.iter().map(|(name, attribute)| (*name, attribute))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// schema of one resource type
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub version: i64,
    pub description: &'static str,
    pub attributes: Attributes,
}

impl Schema {
    pub fn new(description: &'static str, attributes: Attributes) -> Self {
        Self {
            version: 0,
            description,
            attributes,
        }
    }

    /// find the declaration at a dotted path, descending into nested attributes
    pub fn attribute_at(&self, dotted: &str) -> Option<&Attribute> {
        let mut segments = dotted.split('.');
        let first = segments.next()?;
        let mut current = self.attributes.get(first)?;
        for segment in segments {
            current = current.attr_type.nested_attributes()?.get(segment)?;
        }
        Some(current)
    }
}

#[cfg(test)]
mod test {

    use super::{Attribute, AttributeType, Attributes, Schema};

    fn schema() -> Schema {
        let ports = Attributes::new()
            .with("container_port", Attribute::int64("port").required())
            .with("host_ip", Attribute::string("host ip").k8s_name("hostIP"));
        let attributes = Attributes::new()
            .with("id", Attribute::string("id").computed().provider_only())
            .with("ports", Attribute::list_nested(ports, "ports"));
        Schema::new("test", attributes)
    }

    #[test]
    fn test_field_names() {
        let schema = schema();
        let port = schema.attribute_at("ports.container_port").expect("port");
        assert!(port.required);
        assert_eq!(port.field_name("container_port").as_deref(), Some("containerPort"));

        let host_ip = schema.attribute_at("ports.host_ip").expect("host_ip");
        assert_eq!(host_ip.field_name("host_ip").as_deref(), Some("hostIP"));

        let id = schema.attribute_at("id").expect("id");
        assert!(!id.is_configurable());
        assert!(id.field_name("id").is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let attributes = Attributes::new()
            .with("name", Attribute::string("first"))
            .with("name", Attribute::int64("second"));
        assert_eq!(attributes.len(), 1);
        assert_eq!(
            attributes.get("name").map(|attr| &attr.attr_type),
            Some(&AttributeType::Int64)
        );
    }

    #[test]
    fn test_describe() {
        let list = AttributeType::List(Box::new(AttributeType::String));
        assert_eq!(list.describe(), "list of string");
    }
}
