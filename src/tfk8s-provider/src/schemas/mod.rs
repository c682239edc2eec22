//! Attribute declarations of every supported kind.
//! Each declaration mirrors the model in `tfk8s-types` field by field.

pub mod app;
pub mod batch;
pub mod common;
pub mod core;
pub mod storage;
