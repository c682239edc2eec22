//! In-memory stand-in for Terraform core.
//! Keeps one state per resource address and drives the provider through
//! plan, apply, refresh and destroy the way a Terraform run would.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use tfk8s_schema::Diagnostic;
use tfk8s_schema::Diagnostics;
use tfk8s_schema::Value;

use crate::Provider;

/// `<type_name>.<name>`, as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    pub type_name: String,
    pub name: String,
}

impl Address {
    pub fn new<T: Into<String>, N: Into<String>>(type_name: T, name: N) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name, self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApplyResult {
    None(Value),
    Created(Value),
    Updated(Value),
}

impl ApplyResult {
    pub fn state(&self) -> &Value {
        match self {
            Self::None(state) | Self::Created(state) | Self::Updated(state) => state,
        }
    }

    pub fn is_changed(&self) -> bool {
        !matches!(self, Self::None(_))
    }
}

pub struct Harness {
    provider: Provider,
    states: BTreeMap<Address, Value>,
}

impl Harness {
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            states: BTreeMap::new(),
        }
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    pub fn state(&self, address: &Address) -> Option<&Value> {
        self.states.get(address)
    }

    pub fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.states.keys()
    }

    /// planned state without applying it
    pub fn plan(&self, address: &Address, config: &Value) -> Result<Value, Diagnostics> {
        let resource = self.provider.resource(&address.type_name).map_err(unknown_type)?;
        let diags = resource.validate(config);
        if diags.has_error() {
            return Err(diags);
        }
        resource.plan(self.states.get(address), config)
    }

    /// validate, plan, then create or update when the plan says so
    pub fn apply(&mut self, address: &Address, config: &Value) -> Result<ApplyResult, Diagnostics> {
        let planned = self.plan(address, config)?;
        let resource = self.provider.resource(&address.type_name).map_err(unknown_type)?;

        let result = match self.states.get(address) {
            None => ApplyResult::Created(resource.create(&planned)?),
            Some(prior) if planned.get("id").map(Value::is_unknown).unwrap_or(true) => {
                ApplyResult::Updated(resource.update(prior, &planned)?)
            }
            Some(prior) => ApplyResult::None(prior.clone()),
        };
        debug!(%address, changed = result.is_changed(), "applied");
        self.states.insert(address.clone(), result.state().clone());
        Ok(result)
    }

    /// read every state back through the provider
    pub fn refresh(&mut self) -> Result<(), Diagnostics> {
        for (address, state) in self.states.iter_mut() {
            let resource = self.provider.resource(&address.type_name).map_err(unknown_type)?;
            *state = resource.read(state);
        }
        Ok(())
    }

    pub fn destroy(&mut self, address: &Address) -> Result<Option<Value>, Diagnostics> {
        let resource = self.provider.resource(&address.type_name).map_err(unknown_type)?;
        match self.states.remove(address) {
            Some(state) => {
                resource.delete(&state);
                Ok(Some(state))
            }
            None => Ok(None),
        }
    }
}

fn unknown_type(err: crate::ProviderError) -> Diagnostics {
    Diagnostic::error("Invalid resource type", err.to_string()).into()
}
