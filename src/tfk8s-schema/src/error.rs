use thiserror::Error;

use crate::AttributePath;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("value at {0} is not known until apply")]
    UnknownValue(AttributePath),
    #[error("value at {path}: expected {expected}, got {found}")]
    TypeMismatch {
        path: AttributePath,
        expected: String,
        found: &'static str,
    },
    #[error("value at {path} is not a whole number: {value}")]
    NotInteger { path: AttributePath, value: String },
}
