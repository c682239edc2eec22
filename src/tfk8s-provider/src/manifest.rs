use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;
use tracing::instrument;
use tracing::trace;

use tfk8s_diff::Changes;
use tfk8s_diff::PatchObject;
use tfk8s_schema::ConvertError;
use tfk8s_schema::Diagnostic;
use tfk8s_schema::Diagnostics;
use tfk8s_schema::Schema;
use tfk8s_schema::Value;
use tfk8s_types::Manifest;

use crate::resource_schema;
use crate::type_name;
use crate::IdGenerator;
use crate::ManifestError;
use crate::Resource;
use crate::ResourceKind;

pub const MARSHAL_ERROR: &str = "Error marshalling YAML";
pub const UNKNOWN_AT_APPLY: &str = "Value not known at apply time";

/// Resource rendering kind `S` into a manifest.
/// The same handlers serve every kind, only the schema and model differ.
pub struct ManifestResource<S> {
    type_name: String,
    schema: Schema,
    ids: Arc<IdGenerator>,
    document_marker: bool,
    data: PhantomData<fn() -> S>,
}

impl<S> fmt::Debug for ManifestResource<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ManifestResource({})", self.type_name)
    }
}

impl<S> ManifestResource<S>
where
    S: ResourceKind,
{
    pub fn new(prefix: &str, ids: Arc<IdGenerator>) -> Self {
        Self {
            type_name: type_name::<S>(prefix),
            schema: resource_schema::<S>(),
            ids,
            document_marker: false,
            data: PhantomData,
        }
    }

    /// start rendered manifests with a `---` line
    pub fn with_document_marker(mut self, document_marker: bool) -> Self {
        self.document_marker = document_marker;
        self
    }

    /// typed manifest of a resource value, apiVersion and kind stamped
    pub fn decode(&self, value: &Value) -> Result<Manifest<S>, ManifestError> {
        let json = self.schema.to_manifest(value)?;
        let mut manifest: Manifest<S> = serde_json::from_value(json)?;
        manifest.stamp_type();
        Ok(manifest)
    }

    pub fn render(&self, value: &Value) -> Result<String, ManifestError> {
        let manifest = self.decode(value)?;
        let yaml = serde_yaml::to_string(&manifest)?;
        trace!(type_name = %self.type_name, bytes = yaml.len(), "rendered manifest");
        if self.document_marker {
            Ok(format!("---\n{}", yaml))
        } else {
            Ok(yaml)
        }
    }

    /// read back a rendered manifest
    pub fn parse(yaml: &str) -> Result<Manifest<S>, ManifestError> {
        let yaml = yaml.strip_prefix("---\n").unwrap_or(yaml);
        Ok(serde_yaml::from_str(yaml)?)
    }

    fn manifest_json(&self, value: &Value) -> Result<serde_json::Value, ManifestError> {
        Ok(serde_json::to_value(self.decode(value)?)?)
    }

    fn apply(&self, planned: &Value) -> Result<Value, Diagnostics> {
        let yaml = self.render(planned).map_err(marshal_error)?;
        let id = self.ids.next_id();
        debug!(type_name = %self.type_name, %id, "applied");

        let mut state = planned.clone();
        state.set("id", id.into());
        state.set("api_version", S::api_version().into());
        state.set("kind", S::kind().into());
        state.set("yaml", yaml.into());
        Ok(state)
    }

    /// true when prior and planned render the same manifest
    fn unchanged(&self, prior: &Value, planned: &serde_json::Value) -> bool {
        let prior = match self.manifest_json(prior) {
            Ok(prior) => prior,
            Err(err) => {
                debug!(type_name = %self.type_name, %err, "prior state does not render");
                return false;
            }
        };
        match prior.diff(planned) {
            Ok(diff) if diff.is_none() => true,
            Ok(diff) => {
                let changed = diff
                    .as_patch_ref()
                    .map(PatchObject::changed_paths)
                    .unwrap_or_default();
                debug!(type_name = %self.type_name, ?changed, "manifest changed");
                false
            }
            Err(err) => {
                debug!(type_name = %self.type_name, %err, "manifest changed shape");
                false
            }
        }
    }
}

impl<S> Resource for ManifestResource<S>
where
    S: ResourceKind,
{
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn validate(&self, config: &Value) -> Diagnostics {
        self.schema.validate(config)
    }

    #[instrument(skip(self, prior, proposed), fields(type_name = %self.type_name))]
    fn plan(&self, prior: Option<&Value>, proposed: &Value) -> Result<Value, Diagnostics> {
        if proposed.is_null() {
            return Ok(Value::Null);
        }

        let mut planned = proposed.clone();
        planned.set("api_version", S::api_version().into());
        planned.set("kind", S::kind().into());

        let carried = match self.manifest_json(&planned) {
            Ok(json) => prior
                .filter(|prior| !prior.is_null())
                .filter(|prior| self.unchanged(prior, &json)),
            Err(ManifestError::Convert(ConvertError::UnknownValue(path))) => {
                trace!(%path, "unknown until apply");
                None
            }
            Err(err) => return Err(marshal_error(err)),
        };

        match carried {
            Some(prior) => {
                planned.set("id", prior.get("id").cloned().unwrap_or(Value::Unknown));
                planned.set("yaml", prior.get("yaml").cloned().unwrap_or(Value::Unknown));
            }
            None => {
                planned.set("id", Value::Unknown);
                planned.set("yaml", Value::Unknown);
            }
        }
        Ok(planned)
    }

    #[instrument(skip(self, planned), fields(type_name = %self.type_name))]
    fn create(&self, planned: &Value) -> Result<Value, Diagnostics> {
        self.apply(planned)
    }

    fn read(&self, state: &Value) -> Value {
        trace!(type_name = %self.type_name, "read");
        state.clone()
    }

    #[instrument(skip(self, prior, planned), fields(type_name = %self.type_name))]
    fn update(&self, prior: &Value, planned: &Value) -> Result<Value, Diagnostics> {
        debug!(prior_id = %prior.get("id").cloned().unwrap_or_default(), "updating");
        self.apply(planned)
    }

    fn delete(&self, state: &Value) {
        debug!(type_name = %self.type_name, id = %state.get("id").cloned().unwrap_or_default(), "delete");
    }
}

fn marshal_error(err: ManifestError) -> Diagnostics {
    let diagnostic = match &err {
        ManifestError::Convert(ConvertError::UnknownValue(path)) => {
            Diagnostic::attribute_error(path, UNKNOWN_AT_APPLY, err.to_string())
        }
        ManifestError::Convert(ConvertError::TypeMismatch { path, .. })
        | ManifestError::Convert(ConvertError::NotInteger { path, .. }) => {
            Diagnostic::attribute_error(path, MARSHAL_ERROR, err.to_string())
        }
        _ => Diagnostic::error(MARSHAL_ERROR, err.to_string()),
    };
    diagnostic.into()
}
