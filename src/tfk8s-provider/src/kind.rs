use tfk8s_schema::camel_to_snake;
use tfk8s_schema::Attribute;
use tfk8s_schema::Attributes;
use tfk8s_schema::Schema;
use tfk8s_types::Spec;

use crate::schemas::common::object_meta;

/// Kubernetes kind exposed as a Terraform resource
pub trait ResourceKind: Spec + 'static {
    const DESCRIPTION: &'static str;

    /// attributes next to `metadata`: `spec`, or the top level fields of
    /// kinds without one
    fn body_attributes() -> Attributes;
}

/// `<prefix>_<group>_<version>_<kind>`, e.g. `k8s_apps_v1_stateful_set`
pub fn type_name<S: Spec>(prefix: &str) -> String {
    let crd = S::metadata();
    format!(
        "{}_{}_{}_{}",
        prefix,
        crd.group.replace('.', "_"),
        crd.version,
        camel_to_snake(crd.names.kind)
    )
}

pub fn resource_schema<S: ResourceKind>() -> Schema {
    let attributes = Attributes::new()
        .with(
            "id",
            Attribute::string("Timestamp of the last change, in nanoseconds.")
                .computed()
                .provider_only(),
        )
        .with(
            "yaml",
            Attribute::string("Rendered manifest.")
                .computed()
                .provider_only(),
        )
        .with(
            "api_version",
            Attribute::string("APIVersion defines the versioned schema of this representation of an object.")
                .computed()
                .optional(),
        )
        .with(
            "kind",
            Attribute::string("Kind is a string value representing the REST resource this object represents.")
                .computed()
                .optional(),
        )
        .with(
            "metadata",
            Attribute::single_nested(
                object_meta(S::NAME_SPACED),
                "Standard object's metadata.",
            )
            .required(),
        )
        .merge(S::body_attributes());
    Schema::new(S::DESCRIPTION, attributes)
}

#[cfg(test)]
mod test {

    use tfk8s_types::app::daemon_set::DaemonSetSpec;
    use tfk8s_types::app::deployment::DeploymentSpec;
    use tfk8s_types::app::stateful_set::StatefulSetSpec;
    use tfk8s_types::batch::cron_job::CronJobSpec;
    use tfk8s_types::batch::job::JobSpec;
    use tfk8s_types::core::config_map::ConfigMapSpec;
    use tfk8s_types::core::namespace::NamespaceSpec;
    use tfk8s_types::core::persistent_volume_claim::PersistentVolumeClaimSpec;
    use tfk8s_types::core::pod::PodSpec;
    use tfk8s_types::core::secret::SecretSpec;
    use tfk8s_types::core::service::ServiceSpec;
    use tfk8s_types::core::service_account::ServiceAccountSpec;
    use tfk8s_types::storage::storage_class::StorageClassSpec;

    use super::{resource_schema, type_name, ResourceKind};

    fn assert_spec_attribute<S: ResourceKind>() {
        let schema = resource_schema::<S>();
        assert_eq!(
            schema.attribute_at("spec").is_some(),
            S::HAS_SPEC,
            "{}",
            S::label()
        );
    }

    #[test]
    fn test_type_name() {
        assert_eq!(type_name::<StatefulSetSpec>("k8s"), "k8s_apps_v1_stateful_set");
        assert_eq!(type_name::<ConfigMapSpec>("k8s"), "k8s_core_v1_config_map");
        assert_eq!(
            type_name::<StorageClassSpec>("kube"),
            "kube_storage_k8s_io_v1_storage_class"
        );
    }

    #[test]
    fn test_common_attributes() {
        let schema = resource_schema::<StatefulSetSpec>();
        let id = schema.attribute_at("id").expect("id");
        assert!(id.computed && !id.is_configurable());
        let kind = schema.attribute_at("kind").expect("kind");
        assert!(kind.computed && kind.optional);
        assert!(schema.attribute_at("metadata").expect("metadata").required);
        assert!(schema.attribute_at("metadata.namespace").is_some());
        assert!(schema.attribute_at("spec.template.spec.containers").is_some());
    }

    #[test]
    fn test_cluster_scoped_has_no_namespace() {
        let schema = resource_schema::<NamespaceSpec>();
        assert!(schema.attribute_at("metadata.name").is_some());
        assert!(schema.attribute_at("metadata.namespace").is_none());
    }

    #[test]
    fn test_spec_attribute_matches_kind() {
        assert_spec_attribute::<ConfigMapSpec>();
        assert_spec_attribute::<CronJobSpec>();
        assert_spec_attribute::<DaemonSetSpec>();
        assert_spec_attribute::<DeploymentSpec>();
        assert_spec_attribute::<JobSpec>();
        assert_spec_attribute::<NamespaceSpec>();
        assert_spec_attribute::<PersistentVolumeClaimSpec>();
        assert_spec_attribute::<PodSpec>();
        assert_spec_attribute::<SecretSpec>();
        assert_spec_attribute::<ServiceSpec>();
        assert_spec_attribute::<ServiceAccountSpec>();
        assert_spec_attribute::<StatefulSetSpec>();
        assert_spec_attribute::<StorageClassSpec>();
    }

    #[test]
    fn test_header_kind_attributes() {
        let schema = resource_schema::<ConfigMapSpec>();
        assert!(schema.attribute_at("spec").is_none());
        assert!(schema.attribute_at("data").is_some());
        assert!(schema.attribute_at("binary_data").is_some());
    }
}
