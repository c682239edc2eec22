mod error;
mod id;
mod kind;
mod manifest;
mod provider;
mod resource;
pub mod schemas;
pub mod testkit;

pub use self::error::*;
pub use self::id::*;
pub use self::kind::*;
pub use self::manifest::*;
pub use self::provider::*;
pub use self::resource::*;

pub use tfk8s_config as config;
pub use tfk8s_schema as schema;
pub use tfk8s_types as types;
