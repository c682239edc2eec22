mod json;

pub use json::JsonDiff;
pub use json::PatchObject;

use std::fmt;

pub trait Changes {
    type Replace;
    type Patch;

    fn diff(&self, new: &Self) -> Result<Diff<Self::Replace, Self::Patch>, DiffError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// an object was compared with a value of another type at this path
    DiffValue(String),
}

impl fmt::Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiffValue(path) if path.is_empty() => write!(f, "JSON value types are different"),
            Self::DiffValue(path) => write!(f, "JSON value types are different at {}", path),
        }
    }
}

impl std::error::Error for DiffError {}

#[derive(Debug, Clone, PartialEq)]
pub enum Diff<R, P> {
    None,
    Delete,
    Patch(P),   // objects
    Replace(R), // scalars and lists
}

impl<R, P> Diff<R, P> {
    pub fn is_none(&self) -> bool {
        matches!(self, Diff::None)
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Diff::Delete)
    }

    pub fn is_replace(&self) -> bool {
        matches!(self, Diff::Replace(_))
    }

    pub fn is_patch(&self) -> bool {
        matches!(self, Diff::Patch(_))
    }

    pub fn as_replace_ref(&self) -> Option<&R> {
        match self {
            Diff::Replace(ref val) => Some(val),
            _ => None,
        }
    }

    pub fn as_patch_ref(&self) -> Option<&P> {
        match self {
            Diff::Patch(ref val) => Some(val),
            _ => None,
        }
    }
}
