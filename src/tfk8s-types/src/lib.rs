mod crd;
mod int_or_string;
mod metadata;
#[cfg(feature = "core")]
pub mod core;
#[cfg(feature = "app")]
pub mod app;
#[cfg(feature = "batch")]
pub mod batch;
#[cfg(feature = "storage")]
pub mod storage;

pub use self::crd::*;
pub use self::int_or_string::*;
pub use self::metadata::*;
pub use self::spec_def::*;

mod spec_def {

    use std::fmt::Debug;

    use serde::de::DeserializeOwned;
    use serde::Deserialize;
    use serde::Serialize;

    use super::Crd;

    /// top level fields that live next to `spec` in the manifest,
    /// for example `data` of a ConfigMap
    pub trait Header:
        Sized + Debug + Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync
    {
    }

    /// Kubernetes Spec
    pub trait Spec:
        Sized + Debug + Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync
    {
        type Header: Header;

        /// if true, spec is namespaced
        const NAME_SPACED: bool = true;

        /// false for kinds that carry their payload only in the header
        const HAS_SPEC: bool = true;

        fn metadata() -> &'static Crd;

        fn label() -> &'static str {
            Self::metadata().names.kind
        }

        fn api_version() -> String {
            Self::metadata().api_version()
        }

        fn kind() -> String {
            Self::metadata().names.kind.to_owned()
        }
    }

    #[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
    pub struct DefaultHeader {}

    impl Header for DefaultHeader {}
}
