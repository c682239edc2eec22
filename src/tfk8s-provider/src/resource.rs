use tfk8s_schema::Diagnostics;
use tfk8s_schema::Schema;
use tfk8s_schema::Value;

/// Lifecycle hooks Terraform calls for one resource type.
/// States and configurations are `Value::Object`s shaped by [`Resource::schema`].
pub trait Resource: Send + Sync {
    fn type_name(&self) -> &str;

    fn schema(&self) -> &Schema;

    /// check a configuration, unknown values are accepted
    fn validate(&self, config: &Value) -> Diagnostics;

    /// planned state for `proposed`, given the state currently recorded
    fn plan(&self, prior: Option<&Value>, proposed: &Value) -> Result<Value, Diagnostics>;

    fn create(&self, planned: &Value) -> Result<Value, Diagnostics>;

    /// state as recorded, there is nothing else to look at
    fn read(&self, state: &Value) -> Value;

    fn update(&self, prior: &Value, planned: &Value) -> Result<Value, Diagnostics>;

    /// nothing exists outside the state, so nothing to remove
    fn delete(&self, state: &Value);
}
