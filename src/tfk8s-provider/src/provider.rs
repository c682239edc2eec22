use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;
use tracing::info;

use tfk8s_config::ProviderConfig;
use tfk8s_schema::Schema;
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

use crate::IdGenerator;
use crate::ManifestResource;
use crate::ProviderError;
use crate::Resource;
use crate::ResourceKind;

/// kinds the provider knows how to render
pub const SUPPORTED_KINDS: &[&str] = &[
    "ConfigMap",
    "CronJob",
    "DaemonSet",
    "Deployment",
    "Job",
    "Namespace",
    "PersistentVolumeClaim",
    "Pod",
    "Secret",
    "Service",
    "ServiceAccount",
    "StatefulSet",
    "StorageClass",
];

/// Registry of resource types, keyed by Terraform type name
pub struct Provider {
    config: ProviderConfig,
    resources: BTreeMap<String, Box<dyn Resource>>,
}

impl Provider {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        Self::with_ids(config, Arc::new(IdGenerator::default()))
    }

    /// provider using `ids` for every resource type
    pub fn with_ids(config: ProviderConfig, ids: Arc<IdGenerator>) -> Result<Self, ProviderError> {
        config.validate()?;
        if let Some(kind) = config
            .kinds
            .iter()
            .flatten()
            .find(|kind| !SUPPORTED_KINDS.contains(&kind.as_str()))
        {
            return Err(ProviderError::UnsupportedKind(kind.clone()));
        }

        let mut provider = Self {
            config,
            resources: BTreeMap::new(),
        };
        provider.register_all(&ids);

        info!(
            prefix = %provider.config.type_prefix,
            resources = provider.resources.len(),
            "provider ready"
        );
        Ok(provider)
    }

    fn register_all(&mut self, ids: &Arc<IdGenerator>) {
        self.register::<ConfigMapSpec>(ids);
        self.register::<CronJobSpec>(ids);
        self.register::<DaemonSetSpec>(ids);
        self.register::<DeploymentSpec>(ids);
        self.register::<JobSpec>(ids);
        self.register::<NamespaceSpec>(ids);
        self.register::<PersistentVolumeClaimSpec>(ids);
        self.register::<PodSpec>(ids);
        self.register::<SecretSpec>(ids);
        self.register::<ServiceSpec>(ids);
        self.register::<ServiceAccountSpec>(ids);
        self.register::<StatefulSetSpec>(ids);
        self.register::<StorageClassSpec>(ids);
    }

    fn register<S: ResourceKind>(&mut self, ids: &Arc<IdGenerator>) {
        if !self.config.allows(S::label()) {
            debug!(kind = S::label(), "kind disabled by config");
            return;
        }
        let resource = ManifestResource::<S>::new(&self.config.type_prefix, ids.clone())
            .with_document_marker(self.config.document_marker);
        debug!(type_name = resource.type_name(), "registered");
        self.resources
            .insert(resource.type_name().to_owned(), Box::new(resource));
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn resource(&self, type_name: &str) -> Result<&dyn Resource, ProviderError> {
        self.resources
            .get(type_name)
            .map(|resource| resource.as_ref())
            .ok_or_else(|| ProviderError::UnknownResourceType(type_name.to_owned()))
    }

    pub fn resource_types(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn schemas(&self) -> BTreeMap<&str, &Schema> {
        self.resources
            .iter()
            .map(|(type_name, resource)| (type_name.as_str(), resource.schema()))
            .collect()
    }
}

impl Default for Provider {
    fn default() -> Self {
        let ids = Arc::new(IdGenerator::default());
        let mut provider = Self {
            config: ProviderConfig::default(),
            resources: BTreeMap::new(),
        };
        provider.register_all(&ids);
        provider
    }
}
