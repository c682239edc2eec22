use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::Crd;
use crate::CrdNames;
use crate::Header;
use crate::Spec;

//
// ConfigMap Object
const CONFIG_MAP_API: Crd = Crd {
    group: "core",
    version: "v1",
    names: CrdNames {
        kind: "ConfigMap",
    },
};

impl Spec for ConfigMapSpec {
    type Header = ConfigMapHeader;
    const HAS_SPEC: bool = false;

    fn metadata() -> &'static Crd {
        &CONFIG_MAP_API
    }
}

/// ConfigMap has no spec, its payload lives in the header
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMapSpec {}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMapHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_data: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immutable: Option<bool>,
}

impl Header for ConfigMapHeader {}

#[cfg(test)]
mod test {

    use std::collections::BTreeMap;

    use super::{ConfigMapHeader, ConfigMapSpec};
    use crate::{Manifest, ObjectMeta};

    #[test]
    fn test_config_map_yaml() {
        let mut data = BTreeMap::new();
        data.insert("log_level".to_owned(), "debug".to_owned());

        let manifest: Manifest<ConfigMapSpec> = Manifest::with_header(
            ObjectMeta::new("settings", "prod"),
            ConfigMapHeader {
                data: Some(data),
                ..Default::default()
            },
        );
        let yaml = serde_yaml::to_string(&manifest).expect("yaml");
        assert_eq!(
            yaml,
            r#"apiVersion: v1
kind: ConfigMap
metadata:
  name: settings
  namespace: prod
data:
  log_level: debug
"#
        );

        let decoded: Manifest<ConfigMapSpec> = serde_yaml::from_str(&yaml).expect("decode");
        assert_eq!(decoded, manifest);
    }

    #[test]
    fn test_stamp_drops_spec() {
        let mut manifest: Manifest<ConfigMapSpec> =
            Manifest::new(ObjectMeta::named("settings"), ConfigMapSpec {});
        manifest.api_version = "v2".to_owned();
        manifest.stamp_type();

        assert_eq!(manifest.api_version, "v1");
        assert!(manifest.spec.is_none());
        let yaml = serde_yaml::to_string(&manifest).expect("yaml");
        assert!(!yaml.contains("spec"));
    }
}
