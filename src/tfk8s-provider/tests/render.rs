use std::sync::Arc;

use serde_json::json;

use tfk8s_provider::schema::Value;
use tfk8s_provider::types::app::stateful_set::StatefulSetSpec;
use tfk8s_provider::types::core::pod::PodSpec;
use tfk8s_provider::types::core::service::ServiceSpec;
use tfk8s_provider::types::Int32OrString;
use tfk8s_provider::IdGenerator;
use tfk8s_provider::ManifestResource;
use tfk8s_provider::Resource;
use tfk8s_provider::MARSHAL_ERROR;

fn stateful_set() -> ManifestResource<StatefulSetSpec> {
    ManifestResource::new("k8s", Arc::new(IdGenerator::default()))
}

fn web_config() -> Value {
    Value::from(json!({
        "api_version": "v1",
        "kind": "Pod",
        "metadata": { "name": "web", "namespace": "prod", "labels": { "app": "web" } },
        "spec": {
            "replicas": 3,
            "service_name": "web",
            "selector": { "match_labels": { "app": "web" } },
            "template": {
                "metadata": { "labels": { "app": "web" } },
                "spec": {
                    "containers": [{
                        "name": "nginx",
                        "image": "nginx",
                        "ports": [{ "container_port": 80, "name": "http" }]
                    }]
                }
            }
        }
    }))
}

#[test]
fn test_stateful_set_yaml() {
    //given
    let resource = stateful_set();

    //when
    let state = resource.create(&web_config()).expect("create");

    //then
    assert_eq!(state.get("api_version").and_then(Value::as_str), Some("apps/v1"));
    assert_eq!(state.get("kind").and_then(Value::as_str), Some("StatefulSet"));
    assert_eq!(
        state.get("yaml").and_then(Value::as_str),
        Some(
            r#"apiVersion: apps/v1
kind: StatefulSet
metadata:
  name: web
  namespace: prod
  labels:
    app: web
spec:
  replicas: 3
  selector:
    matchLabels:
      app: web
  serviceName: web
  template:
    metadata:
      labels:
        app: web
    spec:
      containers:
      - name: nginx
        image: nginx
        ports:
        - containerPort: 80
          name: http
"#
        )
    );
}

#[test]
fn test_round_trip() {
    let resource = stateful_set();
    let config = web_config();

    let yaml = resource.render(&config).expect("render");
    let parsed = ManifestResource::<StatefulSetSpec>::parse(&yaml).expect("parse");
    let decoded = resource.decode(&config).expect("decode");

    assert_eq!(parsed, decoded);
    let spec = parsed.spec.expect("spec");
    assert_eq!(spec.replicas, Some(3));
    assert_eq!(spec.service_name.as_deref(), Some("web"));
    let pod = spec.template.spec.expect("pod spec");
    assert_eq!(pod.containers[0].name, "nginx");
    assert_eq!(
        pod.containers[0].ports.as_ref().map(|ports| ports[0].container_port),
        Some(80)
    );
}

#[test]
fn test_absent_fields_are_omitted() {
    let resource: ManifestResource<PodSpec> =
        ManifestResource::new("k8s", Arc::new(IdGenerator::default()));
    let config = Value::from(json!({
        "metadata": { "name": "solo", "labels": null },
        "spec": {
            "containers": [{ "name": "main", "image": "busybox", "args": null, "env": [] }],
            "host_ipc": null
        }
    }));

    let yaml = resource.render(&config).expect("render");
    assert_eq!(
        yaml,
        r#"apiVersion: v1
kind: Pod
metadata:
  name: solo
spec:
  containers:
  - name: main
    image: busybox
    env: []
"#
    );
}

#[test]
fn test_int_or_string_ports() {
    let resource: ManifestResource<StatefulSetSpec> = stateful_set();
    let mut config = web_config();
    config.set(
        "spec",
        Value::from(json!({
            "selector": { "match_labels": { "app": "web" } },
            "update_strategy": {
                "type": "RollingUpdate",
                "rolling_update": { "max_unavailable": "25%", "partition": 1 }
            },
            "template": {
                "spec": {
                    "containers": [{
                        "name": "nginx",
                        "liveness_probe": { "http_get": { "path": "/healthz", "port": "8080" } },
                        "readiness_probe": { "tcp_socket": { "port": "http" } }
                    }]
                }
            }
        })),
    );

    let manifest = resource.decode(&config).expect("decode");
    let spec = manifest.spec.expect("spec");
    let rolling = spec
        .update_strategy
        .and_then(|strategy| strategy.rolling_update)
        .expect("rolling update");
    assert_eq!(rolling.max_unavailable, Some(Int32OrString::String("25%".to_owned())));

    let container = &spec.template.spec.expect("pod").containers[0];
    let liveness = container.liveness_probe.as_ref().and_then(|probe| probe.http_get.as_ref());
    assert_eq!(liveness.map(|get| &get.port), Some(&Int32OrString::Int(8080)));
    let readiness = container.readiness_probe.as_ref().and_then(|probe| probe.tcp_socket.as_ref());
    assert_eq!(
        readiness.map(|socket| &socket.port),
        Some(&Int32OrString::String("http".to_owned()))
    );
}

#[test]
fn test_target_port_kept_as_written() {
    let resource: ManifestResource<ServiceSpec> =
        ManifestResource::new("k8s", Arc::new(IdGenerator::default()));
    let config = Value::from(json!({
        "metadata": { "name": "web" },
        "spec": {
            "ports": [
                { "port": 80, "target_port": "8080" },
                { "port": 81, "target_port": "+080" },
                { "port": 82, "target_port": "http" }
            ]
        }
    }));

    let yaml = resource.render(&config).expect("render");
    assert!(yaml.contains("targetPort: 8080\n"));

    let manifest = ManifestResource::<ServiceSpec>::parse(&yaml).expect("parse");
    let targets: Vec<Option<Int32OrString>> = manifest
        .spec
        .and_then(|spec| spec.ports)
        .expect("ports")
        .into_iter()
        .map(|port| port.target_port)
        .collect();
    assert_eq!(
        targets,
        vec![
            Some(Int32OrString::Int(8080)),
            Some(Int32OrString::String("+080".to_owned())),
            Some(Int32OrString::String("http".to_owned())),
        ]
    );
}

#[test]
fn test_out_of_range_is_marshal_error() {
    let mut config = web_config();
    if let Value::Object(entries) = &mut config {
        if let Some(spec) = entries.get_mut("spec") {
            spec.set("replicas", Value::from(3_000_000_000_i64));
        }
    }

    let diags = stateful_set().create(&config).expect_err("replicas overflow i32");
    assert_eq!(diags.len(), 1);
    let diag = diags.iter().next().expect("diagnostic");
    assert_eq!(diag.summary, MARSHAL_ERROR);
    assert!(diag.detail.contains("decoding manifest"));
}
