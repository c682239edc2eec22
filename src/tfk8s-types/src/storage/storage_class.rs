use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::{Crd, CrdNames, Header, Spec};

const STORAGE_API: Crd = Crd {
    group: "storage.k8s.io",
    version: "v1",
    names: CrdNames {
        kind: "StorageClass",
    },
};

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StorageClassSpec {}

impl Spec for StorageClassSpec {
    type Header = StorageClassHeader;
    const NAME_SPACED: bool = false;
    const HAS_SPEC: bool = false;

    fn metadata() -> &'static Crd {
        &STORAGE_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StorageClassHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_volume_expansion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_topologies: Option<Vec<TopologySelectorTerm>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, String>>,
    pub provisioner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reclaim_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_binding_mode: Option<String>,
}

impl Header for StorageClassHeader {}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopologySelectorTerm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_label_expressions: Option<Vec<TopologySelectorLabelRequirement>>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopologySelectorLabelRequirement {
    pub key: String,
    pub values: Vec<String>,
}

#[cfg(test)]
mod test {

    use super::{StorageClassHeader, StorageClassSpec};
    use crate::{Manifest, ObjectMeta, Spec};

    #[test]
    fn test_cluster_scoped_header() {
        assert!(!StorageClassSpec::NAME_SPACED);
        assert_eq!(StorageClassSpec::api_version(), "storage.k8s.io/v1");

        let manifest: Manifest<StorageClassSpec> = Manifest::with_header(
            ObjectMeta::named("fast"),
            StorageClassHeader {
                provisioner: "ebs.csi.aws.com".to_owned(),
                reclaim_policy: Some("Retain".to_owned()),
                ..Default::default()
            },
        );
        let yaml = serde_yaml::to_string(&manifest).expect("yaml");
        assert_eq!(
            yaml,
            r#"apiVersion: storage.k8s.io/v1
kind: StorageClass
metadata:
  name: fast
provisioner: ebs.csi.aws.com
reclaimPolicy: Retain
"#
        );
    }
}
