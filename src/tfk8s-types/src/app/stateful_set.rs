use serde::Deserialize;
use serde::Serialize;

use crate::core::persistent_volume_claim::PersistentVolumeClaimSpec;
use crate::core::pod::PodSpec;
use crate::{Crd, CrdNames, DefaultHeader, Int32OrString, LabelSelector, Spec, TemplateSpec};

const STATEFUL_SET_API: Crd = Crd {
    group: "apps",
    version: "v1",
    names: CrdNames {
        kind: "StatefulSet",
    },
};

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatefulSetSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_ready_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinals: Option<StatefulSetOrdinals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_volume_claim_retention_policy:
        Option<StatefulSetPersistentVolumeClaimRetentionPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_management_policy: Option<PodManagementPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_history_limit: Option<i32>,
    pub selector: LabelSelector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    pub template: TemplateSpec<PodSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_strategy: Option<StatefulSetUpdateStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_claim_templates: Option<Vec<TemplateSpec<PersistentVolumeClaimSpec>>>,
}

impl Spec for StatefulSetSpec {
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &STATEFUL_SET_API
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum PodManagementPolicy {
    OrderedReady,
    Parallel,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatefulSetOrdinals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i32>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatefulSetPersistentVolumeClaimRetentionPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when_deleted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when_scaled: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatefulSetUpdateStrategy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rolling_update: Option<RollingUpdateStatefulSetStrategy>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RollingUpdateStatefulSetStrategy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_unavailable: Option<Int32OrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<i32>,
}

#[cfg(test)]
mod test {

    use super::{PodManagementPolicy, StatefulSetSpec};
    use crate::core::pod::{Container, PodSpec};
    use crate::{LabelSelector, Manifest, ObjectMeta, Spec, TemplateSpec};

    #[test]
    fn test_stateful_set_type() {
        assert_eq!(StatefulSetSpec::api_version(), "apps/v1");
        assert_eq!(StatefulSetSpec::kind(), "StatefulSet");
    }

    #[test]
    fn test_stamp_type_overrides_input() {
        let yaml = r#"
apiVersion: v1
kind: Pod
metadata:
  name: db
spec:
  selector:
    matchLabels:
      app: db
  serviceName: db
  template:
    spec:
      containers:
      - name: postgres
        image: postgres:16
"#;
        let mut manifest: Manifest<StatefulSetSpec> = serde_yaml::from_str(yaml).expect("decode");
        assert_eq!(manifest.kind, "Pod");

        manifest.stamp_type();
        assert_eq!(manifest.api_version, "apps/v1");
        assert_eq!(manifest.kind, "StatefulSet");
    }

    #[test]
    fn test_missing_type_defaults_to_constants() {
        let spec = StatefulSetSpec {
            selector: LabelSelector::new_labels(vec![("app", "db")]),
            pod_management_policy: Some(PodManagementPolicy::Parallel),
            template: TemplateSpec::new(PodSpec {
                containers: vec![Container {
                    name: "postgres".to_owned(),
                    ..Default::default()
                }],
                ..Default::default()
            }),
            ..Default::default()
        };
        let manifest = Manifest::new(ObjectMeta::named("db"), spec);
        let value = serde_json::to_value(&manifest).expect("ser");
        let mut object = value.as_object().expect("object").clone();
        object.remove("apiVersion");
        object.remove("kind");

        let decoded: Manifest<StatefulSetSpec> =
            serde_json::from_value(serde_json::Value::Object(object)).expect("decode");
        assert_eq!(decoded, manifest);
    }
}
