use serde_json::Value;

use super::JsonDiff;
use super::PatchObject;
use crate::Changes;
use crate::Diff;
use crate::DiffError;

impl Changes for Value {
    type Replace = Value;
    type Patch = PatchObject;

    fn diff(&self, new: &Self) -> Result<JsonDiff, DiffError> {
        if *self == *new {
            return Ok(Diff::None);
        }
        match self {
            Value::Null => Ok(Diff::Replace(new.clone())),
            _ => match new {
                Value::Null => Ok(Diff::Replace(Value::Null)),
                Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(Diff::Replace(new.clone())),
                // lists are ordered, any change replaces the whole list
                Value::Array(_) => Ok(Diff::Replace(new.clone())),
                Value::Object(ref new_val) => match self {
                    Value::Object(ref old_val) => {
                        let patch = PatchObject::diff(old_val, new_val)?;
                        Ok(Diff::Patch(patch))
                    }
                    _ => Err(DiffError::DiffValue(String::new())),
                },
            },
        }
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;
    use serde_json::Value;

    use super::Changes;
    use crate::DiffError;

    #[test]
    fn test_null_comparison() {
        let n1 = Value::Null;
        let str1 = Value::String("test".to_owned());
        let str2 = Value::String("test".to_owned());

        assert!(n1.diff(&str1).expect("diff").is_replace());
        assert!(str1.diff(&str2).expect("diff").is_none());
    }

    #[test]
    fn test_object_comparison() {
        let old_spec = json!({
            "replicas": 2,
            "serviceName": "web"
        });
        let new_spec = json!({
            "replicas": 3,
            "serviceName": "web"
        });

        let diff = old_spec.diff(&new_spec).expect("diff");
        assert!(diff.is_patch());
        let patch = diff.as_patch_ref().expect("patch").get_inner_ref();
        assert_eq!(patch.len(), 1);
        let diff_replicas = patch.get("replicas").expect("replicas");
        assert!(diff_replicas.is_replace());
        assert_eq!(diff_replicas.as_replace_ref(), Some(&json!(3)));
    }

    #[test]
    fn test_changed_paths() {
        let old = json!({
            "metadata": { "name": "web", "labels": { "app": "web" } },
            "spec": { "replicas": 2, "selector": { "matchLabels": { "app": "web" } } }
        });
        let new = json!({
            "metadata": { "name": "web" },
            "spec": { "replicas": 3, "selector": { "matchLabels": { "app": "web" } } }
        });

        let diff = old.diff(&new).expect("diff");
        let patch = diff.as_patch_ref().expect("patch");
        assert_eq!(patch.changed_paths(), vec!["metadata.labels", "spec.replicas"]);
    }

    #[test]
    fn test_type_change_reports_path() {
        let old = json!({ "spec": { "template": { "metadata": {} } } });
        let new = json!({ "spec": { "template": "inline" } });
        assert!(old.diff(&new).expect("diff").is_patch());

        let err = new.diff(&old).expect_err("object over string");
        assert_eq!(err, DiffError::DiffValue("spec.template".to_owned()));
        assert_eq!(
            err.to_string(),
            "JSON value types are different at spec.template"
        );
    }

    #[test]
    fn test_replace_some_with_none() {
        use serde::Serialize;
        use serde_json::to_value;

        #[derive(Serialize)]
        struct Test {
            #[serde(skip_serializing_if = "Option::is_none")]
            paused: Option<bool>,
            replicas: u16,
        }

        let old_spec = to_value(Test {
            paused: Some(true),
            replicas: 5,
        })
        .expect("json");
        let new_spec = to_value(Test {
            paused: None,
            replicas: 5,
        })
        .expect("json");

        let diff = old_spec.diff(&new_spec).expect("diff");
        let patch = diff.as_patch_ref().expect("patch");
        let json_diff = serde_json::to_value(patch).expect("json");
        assert_eq!(json_diff, json!({ "paused": null }));
    }
}
