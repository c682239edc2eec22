pub mod affinity;
pub mod config_map;
pub mod namespace;
pub mod persistent_volume_claim;
pub mod pod;
pub mod secret;
pub mod service;
pub mod service_account;
