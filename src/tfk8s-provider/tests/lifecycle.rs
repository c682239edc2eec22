use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use serde_json::json;

use tfk8s_provider::config::ProviderConfig;
use tfk8s_provider::schema::Value;
use tfk8s_provider::testkit::Address;
use tfk8s_provider::testkit::ApplyResult;
use tfk8s_provider::testkit::Harness;
use tfk8s_provider::Clock;
use tfk8s_provider::IdGenerator;
use tfk8s_provider::Provider;
use tfk8s_provider::MARSHAL_ERROR;
use tfk8s_provider::UNKNOWN_AT_APPLY;

const DEPLOYMENT: &str = "k8s_apps_v1_deployment";
const CONFIG_MAP: &str = "k8s_core_v1_config_map";

/// clock that moves only when told to
#[derive(Clone, Default)]
struct ManualClock(Arc<AtomicU64>);

impl ManualClock {
    fn set(&self, nanos: u64) {
        self.0.store(nanos, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_nanos(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

fn harness(clock: &ManualClock) -> Harness {
    let ids = Arc::new(IdGenerator::new(clock.clone()));
    let provider = Provider::with_ids(ProviderConfig::default(), ids).expect("provider");
    Harness::new(provider)
}

fn deployment(replicas: i64) -> Value {
    Value::from(json!({
        "metadata": { "name": "api", "labels": { "app": "api" } },
        "spec": {
            "replicas": replicas,
            "selector": { "match_labels": { "app": "api" } },
            "strategy": { "type": "RollingUpdate", "rolling_update": { "max_surge": "1" } },
            "template": {
                "metadata": { "labels": { "app": "api" } },
                "spec": {
                    "containers": [{
                        "name": "api",
                        "image": "registry.local/api",
                        "env": [{ "name": "MODE", "value": "prod" }]
                    }]
                }
            }
        }
    }))
}

fn id_of(state: &Value) -> &str {
    state.get("id").and_then(Value::as_str).expect("id")
}

#[test]
fn test_create_update_unchanged() {
    let clock = ManualClock::default();
    clock.set(1_000);
    let mut harness = harness(&clock);
    let address = Address::new(DEPLOYMENT, "api");

    let created = harness.apply(&address, &deployment(2)).expect("create");
    assert!(matches!(created, ApplyResult::Created(_)));
    assert_eq!(id_of(created.state()), "1000");
    let yaml = created.state().get("yaml").and_then(Value::as_str).expect("yaml");
    assert!(yaml.contains("kind: Deployment\n"));
    assert!(yaml.contains("maxSurge: 1\n"));

    // same configuration, nothing to do
    let unchanged = harness.apply(&address, &deployment(2)).expect("noop");
    assert!(!unchanged.is_changed());
    assert_eq!(id_of(unchanged.state()), "1000");

    // the clock did not move, the id still does
    let updated = harness.apply(&address, &deployment(3)).expect("update");
    assert!(matches!(updated, ApplyResult::Updated(_)));
    assert_eq!(id_of(updated.state()), "1001");

    clock.set(5_000);
    let updated = harness.apply(&address, &deployment(4)).expect("update");
    assert_eq!(id_of(updated.state()), "5000");
    assert_eq!(
        harness.state(&address).map(id_of),
        Some("5000")
    );
}

#[test]
fn test_plan_carries_over_id() {
    let clock = ManualClock::default();
    clock.set(42);
    let mut harness = harness(&clock);
    let address = Address::new(DEPLOYMENT, "api");

    let first = harness.plan(&address, &deployment(2)).expect("plan");
    assert!(first.get("id").map(Value::is_unknown).unwrap_or(false));
    assert!(first.get("yaml").map(Value::is_unknown).unwrap_or(false));
    assert_eq!(first.get("api_version").and_then(Value::as_str), Some("apps/v1"));

    harness.apply(&address, &deployment(2)).expect("apply");
    let state = harness.state(&address).cloned().expect("state");

    let same = harness.plan(&address, &deployment(2)).expect("plan");
    assert_eq!(same.get("id"), state.get("id"));
    assert_eq!(same.get("yaml"), state.get("yaml"));

    let changed = harness.plan(&address, &deployment(5)).expect("plan");
    assert!(changed.get("id").map(Value::is_unknown).unwrap_or(false));
    assert!(changed.get("yaml").map(Value::is_unknown).unwrap_or(false));
}

#[test]
fn test_unknown_values() {
    let clock = ManualClock::default();
    let harness = harness(&clock);
    let address = Address::new(CONFIG_MAP, "settings");

    let mut config = Value::from(json!({ "metadata": { "name": "settings" } }));
    config.set("data", Value::Unknown);

    let planned = harness.plan(&address, &config).expect("plan");
    assert!(planned.get("yaml").map(Value::is_unknown).unwrap_or(false));

    let resource = harness.provider().resource(CONFIG_MAP).expect("resource");
    let diags = resource.create(&planned).expect_err("unknown at apply");
    assert_eq!(diags.at("data").map(|diag| diag.summary.as_str()), Some(UNKNOWN_AT_APPLY));
}

#[test]
fn test_read_and_delete_leave_state_alone() {
    let clock = ManualClock::default();
    clock.set(7);
    let mut harness = harness(&clock);
    let address = Address::new(CONFIG_MAP, "settings");
    let config = Value::from(json!({
        "metadata": { "name": "settings" },
        "data": { "LOG_LEVEL": "info" }
    }));

    harness.apply(&address, &config).expect("apply");
    let before = harness.state(&address).cloned().expect("state");

    harness.refresh().expect("refresh");
    assert_eq!(harness.state(&address), Some(&before));

    let resource = harness.provider().resource(CONFIG_MAP).expect("resource");
    assert_eq!(resource.read(&before), before);

    let removed = harness.destroy(&address).expect("destroy");
    assert_eq!(removed, Some(before));
    assert!(harness.state(&address).is_none());
    assert_eq!(harness.destroy(&address).expect("destroy twice"), None);
}

#[test]
fn test_validation_paths() {
    let clock = ManualClock::default();
    let mut harness = harness(&clock);
    let address = Address::new(DEPLOYMENT, "broken");

    let config = Value::from(json!({
        "metadata": {
            "name": "Broken_Name",
            "labels": { "app": "-api" },
            "creation_timestamp": "last tuesday"
        },
        "spec": {
            "replicas": -1,
            "selector": {},
            "template": {
                "spec": {
                    "restart_policy": "Sometimes",
                    "containers": [{
                        "name": "api",
                        "ports": [{ "container_port": 80 }, { "container_port": 70000 }]
                    }]
                }
            }
        }
    }));

    let diags = harness.apply(&address, &config).expect_err("invalid");
    let summary = |path: &str| diags.at(path).map(|diag| diag.summary.clone());

    assert_eq!(summary("metadata.name"), Some("Invalid name".to_owned()));
    assert_eq!(summary(r#"metadata.labels["app"]"#), Some("Invalid label value".to_owned()));
    assert_eq!(summary("metadata.creation_timestamp"), Some("Invalid timestamp".to_owned()));
    assert_eq!(summary("spec.replicas"), Some("Value out of range".to_owned()));
    assert_eq!(
        summary("spec.template.spec.restart_policy"),
        Some("Invalid value".to_owned())
    );
    assert_eq!(
        summary("spec.template.spec.containers[1].ports[1].container_port"),
        None
    );
    assert_eq!(
        summary("spec.template.spec.containers[0].ports[1].container_port"),
        Some("Invalid port".to_owned())
    );
    assert_eq!(diags.len(), 6);
    assert!(harness.state(&address).is_none());
}

#[test]
fn test_null_entries_are_reported_at_their_path() {
    let clock = ManualClock::default();
    let mut harness = harness(&clock);
    let address = Address::new(CONFIG_MAP, "settings");
    let config = Value::from(json!({
        "metadata": { "name": "settings", "labels": { "app": null } },
        "data": { "LOG_LEVEL": null }
    }));

    let diags = harness.apply(&address, &config).expect_err("null entries");
    let summary = |path: &str| diags.at(path).map(|diag| diag.summary.clone());
    assert_eq!(summary(r#"metadata.labels["app"]"#), Some("Null value not allowed".to_owned()));
    assert_eq!(summary(r#"data["LOG_LEVEL"]"#), Some("Null value not allowed".to_owned()));

    // create without validation still names the attribute
    let resource = harness.provider().resource(CONFIG_MAP).expect("resource");
    let unvalidated = Value::from(json!({
        "metadata": { "name": "settings" },
        "data": { "LOG_LEVEL": null }
    }));
    let diags = resource.create(&unvalidated).expect_err("null entry");
    assert_eq!(
        diags.at(r#"data["LOG_LEVEL"]"#).map(|diag| diag.summary.as_str()),
        Some(MARSHAL_ERROR)
    );
}

#[test]
fn test_unknown_resource_type() {
    let clock = ManualClock::default();
    let mut harness = harness(&clock);
    let address = Address::new("k8s_apps_v1_replica_set", "web");

    let diags = harness
        .apply(&address, &Value::from(json!({ "metadata": {} })))
        .expect_err("unknown type");
    assert!(diags.has_error());
    assert_eq!(address.to_string(), "k8s_apps_v1_replica_set.web");
}
