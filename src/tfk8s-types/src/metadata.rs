use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::Spec;

pub const DEFAULT_NS: &str = "default";

/// metadata as written by the user: every field is optional and
/// absent fields do not show up in the manifest
#[derive(Deserialize, Serialize, PartialEq, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finalizers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_references: Option<Vec<OwnerReference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,
}

impl ObjectMeta {
    pub fn new<S>(name: S, name_space: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: Some(name.into()),
            namespace: Some(name_space.into()),
            ..Default::default()
        }
    }

    /// create with name and default namespace
    pub fn named<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// provide builder pattern setter
    pub fn set_labels<T: Into<String>>(mut self, labels: Vec<(T, T)>) -> Self {
        let label_map = labels
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.labels = Some(label_map);
        self
    }
}

impl fmt::Display for ObjectMeta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            self.name.as_deref().unwrap_or(""),
            self.namespace.as_deref().unwrap_or(DEFAULT_NS)
        )
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerReference {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_owner_deletion: Option<bool>,
}

/// The full object as rendered into a manifest.
/// `apiVersion` and `kind` default to the constants of the kind.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[serde(bound(serialize = "S: Serialize"))]
#[serde(bound(deserialize = "S: DeserializeOwned"))]
pub struct Manifest<S>
where
    S: Spec,
{
    #[serde(default = "S::api_version")]
    pub api_version: String,
    #[serde(default = "S::kind")]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<S>,
    #[serde(flatten)]
    pub header: S::Header,
}

impl<S> Manifest<S>
where
    S: Spec,
{
    pub fn new(metadata: ObjectMeta, spec: S) -> Self {
        Self {
            api_version: S::api_version(),
            kind: S::kind(),
            metadata,
            spec: Some(spec),
            header: S::Header::default(),
        }
    }

    pub fn with_header(metadata: ObjectMeta, header: S::Header) -> Self {
        Self {
            api_version: S::api_version(),
            kind: S::kind(),
            metadata,
            spec: None,
            header,
        }
    }

    /// overwrite apiVersion and kind with the constants of the kind,
    /// whatever the object was built from. Kinds without a spec never
    /// render one.
    pub fn stamp_type(&mut self) {
        self.api_version = S::api_version();
        self.kind = S::kind();
        if !S::HAS_SPEC {
            self.spec = None;
        }
    }
}

/// name is optional for template
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSpec<S> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ObjectMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<S>,
}

impl<S> TemplateSpec<S> {
    pub fn new(spec: S) -> Self {
        TemplateSpec {
            metadata: None,
            spec: Some(spec),
        }
    }
}

#[derive(Deserialize, Serialize, Default, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_expressions: Option<Vec<LabelSelectorRequirement>>,
}

impl LabelSelector {
    pub fn new_labels<T: Into<String>>(labels: Vec<(T, T)>) -> Self {
        let match_labels = labels
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        LabelSelector {
            match_labels: Some(match_labels),
            match_expressions: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelectorRequirement {
    pub key: String,
    pub operator: SelectorOperator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// `Gt` and `Lt` are only accepted by node selectors
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum SelectorOperator {
    In,
    NotIn,
    Exists,
    DoesNotExist,
    Gt,
    Lt,
}

/// reference to an object in the same namespace
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocalObjectReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectFieldSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    pub field_path: String,
}

#[cfg(test)]
mod test {

    use super::{LabelSelector, ObjectMeta};

    #[test]
    fn test_metadata_label() {
        let metadata = ObjectMeta::named("web").set_labels(vec![("app", "test")]);

        let maps = metadata.labels.expect("labels");
        assert_eq!(maps.len(), 1);
        assert_eq!(maps.get("app").map(String::as_str), Some("test"));
    }

    #[test]
    fn test_empty_metadata_is_omitted() {
        let metadata = ObjectMeta::named("web");
        let value = serde_json::to_value(&metadata).expect("ser");
        assert_eq!(value, serde_json::json!({ "name": "web" }));
    }

    #[test]
    fn test_display() {
        assert_eq!(ObjectMeta::named("web").to_string(), "web:default");
        assert_eq!(ObjectMeta::new("web", "prod").to_string(), "web:prod");
    }

    #[test]
    fn test_selector() {
        let selector = LabelSelector::new_labels(vec![("app", "web")]);
        let yaml = serde_yaml::to_string(&selector).expect("yaml");
        assert_eq!(yaml, "matchLabels:\n  app: web\n");
    }
}
