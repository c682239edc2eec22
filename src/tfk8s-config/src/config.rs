use std::fs::File;
use std::path::Path;
use std::path::PathBuf;

use dirs::home_dir;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::ConfigError;

/// environment variable naming a configuration file
pub const TFK8S_CONFIG: &str = "TFK8S_CONFIG";
pub const DEFAULT_TYPE_PREFIX: &str = "k8s";

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ProviderConfig {
    #[serde(skip)]
    pub path: PathBuf,
    /// first segment of every resource type name, `k8s_apps_v1_deployment`
    pub type_prefix: String,
    /// start every manifest with a `---` line
    pub document_marker: bool,
    /// register only these kinds, all kinds when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kinds: Option<Vec<String>>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            type_prefix: DEFAULT_TYPE_PREFIX.to_owned(),
            document_marker: false,
            kinds: None,
        }
    }
}

impl ProviderConfig {
    /// path of the file under the home directory
    pub fn home_path() -> Result<PathBuf, ConfigError> {
        let home_dir = home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home_dir.join(".tfk8s").join("config.yaml"))
    }

    /// read from default home directory, defaults if there is no file
    pub fn from_home() -> Result<Self, ConfigError> {
        let path = Self::home_path()?;
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "no provider config, using defaults");
            Ok(Self {
                path,
                ..Default::default()
            })
        }
    }

    /// read from the file named by `TFK8S_CONFIG`, or the home directory
    pub fn load() -> Result<Self, ConfigError> {
        std::env::var(TFK8S_CONFIG).map_or_else(|_| Self::from_home(), Self::from_file)
    }

    pub fn from_file<T: AsRef<Path>>(path: T) -> Result<Self, ConfigError> {
        let file = File::open(path.as_ref())?;
        let mut config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        config.path = path.as_ref().to_path_buf();
        debug!(path = %config.path.display(), prefix = %config.type_prefix, "loaded provider config");
        Ok(config)
    }

    pub fn to_file<T: AsRef<Path>>(&self, path: T) -> Result<(), ConfigError> {
        let file = File::create(path)?;
        Ok(serde_yaml::to_writer(file, self)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.to_file(&self.path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = !self.type_prefix.is_empty()
            && self
                .type_prefix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidPrefix(self.type_prefix.clone()))
        }
    }

    /// true if `kind` should be registered
    pub fn allows(&self, kind: &str) -> bool {
        match &self.kinds {
            Some(kinds) => kinds.iter().any(|allowed| allowed == kind),
            None => true,
        }
    }
}
