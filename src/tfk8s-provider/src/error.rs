use thiserror::Error;

use tfk8s_config::ConfigError;
use tfk8s_schema::ConvertError;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("{0}")]
    Convert(#[from] ConvertError),
    #[error("decoding manifest: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("encoding yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),
    #[error("kind {0} is not supported")]
    UnsupportedKind(String),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
