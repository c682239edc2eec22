use serde_json::json;

use tfk8s_provider::config::ProviderConfig;
use tfk8s_provider::schema::Value;
use tfk8s_provider::Provider;

const STATEFUL_SET: &str = "k8s_apps_v1_stateful_set";

fn main() -> anyhow::Result<()> {
    fluvio_future::subscriber::init_tracer(None);

    let provider = Provider::new(ProviderConfig::load()?)?;
    let resource = provider.resource(STATEFUL_SET)?;

    let config = Value::from(json!({
        "metadata": { "name": "web", "labels": { "app": "web" } },
        "spec": {
            "replicas": 3,
            "service_name": "web",
            "selector": { "match_labels": { "app": "web" } },
            "template": {
                "metadata": { "labels": { "app": "web" } },
                "spec": {
                    "containers": [{
                        "name": "nginx",
                        "image": "nginx:1.25",
                        "ports": [{ "container_port": 80, "name": "http" }]
                    }]
                }
            }
        }
    }));

    let diags = resource.validate(&config);
    if diags.has_error() {
        anyhow::bail!("{}", diags);
    }
    let planned = resource.plan(None, &config)?;
    let state = resource.create(&planned)?;

    println!("id: {}", state.get("id").cloned().unwrap_or_default());
    if let Some(yaml) = state.get("yaml").and_then(Value::as_str) {
        print!("{yaml}");
    }
    Ok(())
}
