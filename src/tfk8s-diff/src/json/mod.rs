mod diff;

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;
use serde_json::Map;
use serde_json::Value;
use tracing::trace;

use crate::Changes;
use crate::Diff;
use crate::DiffError;

pub type JsonDiff = Diff<Value, PatchObject>;

/// per-field changes of a JSON object, serializes as a JSON merge patch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchObject(BTreeMap<String, JsonDiff>);

impl PatchObject {
    // diff { "a": 1,"b": 2}, { "a": 3, "b": 2} => { "a": 1 }
    fn diff(old: &Map<String, Value>, new: &Map<String, Value>) -> Result<Self, DiffError> {
        let mut map: BTreeMap<String, JsonDiff> = BTreeMap::new();

        for (key, new_val) in new.iter() {
            let changes = match old.get(key) {
                Some(old_val) => old_val.diff(new_val).map_err(|err| nested(key, err))?,
                None => Diff::Replace(new_val.clone()),
            };
            if !changes.is_none() {
                trace!(key = %key, "field changed");
                map.insert(key.clone(), changes);
            }
        }

        for key in old.keys() {
            if !new.contains_key(key) {
                trace!(key = %key, "field removed");
                map.insert(key.clone(), Diff::Delete);
            }
        }

        Ok(Self(map))
    }

    pub fn get_inner_ref(&self) -> &BTreeMap<String, JsonDiff> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// dotted paths of every changed leaf, e.g. `spec.replicas`
    pub fn changed_paths(&self) -> Vec<String> {
        let mut paths = vec![];
        self.collect_paths("", &mut paths);
        paths
    }

    fn collect_paths(&self, prefix: &str, paths: &mut Vec<String>) {
        for (key, diff) in self.0.iter() {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };
            match diff {
                Diff::Patch(patch) => patch.collect_paths(&path, paths),
                Diff::None => {}
                _ => paths.push(path),
            }
        }
    }
}

fn nested(key: &str, err: DiffError) -> DiffError {
    match err {
        DiffError::DiffValue(path) if path.is_empty() => DiffError::DiffValue(key.to_owned()),
        DiffError::DiffValue(path) => DiffError::DiffValue(format!("{}.{}", key, path)),
    }
}

impl Serialize for PatchObject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, val) in self.0.iter() {
            match val {
                Diff::None => {}
                Diff::Delete => map.serialize_entry(key, &Value::Null)?,
                Diff::Patch(patch) => map.serialize_entry(key, patch)?,
                Diff::Replace(value) => map.serialize_entry(key, value)?,
            }
        }
        map.end()
    }
}
