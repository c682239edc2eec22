use tfk8s_schema::Attribute;
use tfk8s_schema::Attributes;
use tfk8s_schema::Validator;
use tfk8s_types::core::service::ServiceSpec;

use crate::ResourceKind;

const TRAFFIC_POLICIES: &[&str] = &["Local", "Cluster"];

impl ResourceKind for ServiceSpec {
    const DESCRIPTION: &'static str =
        "Service is a named abstraction of software service consisting of local port that the proxy listens on, and the selector that determines which pods will answer requests sent through the proxy.";

    fn body_attributes() -> Attributes {
        Attributes::new().with(
            "spec",
            Attribute::single_nested(service_spec(), "Behavior of the service."),
        )
    }
}

fn service_spec() -> Attributes {
    Attributes::new()
        .with(
            "allocate_load_balancer_node_ports",
            Attribute::bool("Whether NodePorts will be automatically allocated for services with type LoadBalancer."),
        )
        .with(
            "cluster_ip",
            Attribute::string("IP address of the service, usually assigned randomly.").k8s_name("clusterIP"),
        )
        .with(
            "cluster_ips",
            Attribute::string_list("IP addresses assigned to this service.").k8s_name("clusterIPs"),
        )
        .with(
            "external_ips",
            Attribute::string_list("IP addresses for which nodes in the cluster will also accept traffic.")
                .k8s_name("externalIPs"),
        )
        .with(
            "external_name",
            Attribute::string("External reference that discovery mechanisms will return as an alias.")
                .validate(Validator::Name),
        )
        .with(
            "external_traffic_policy",
            Attribute::string("How nodes distribute service traffic they receive on externally-facing addresses.")
                .validate(Validator::OneOf(TRAFFIC_POLICIES)),
        )
        .with(
            "health_check_node_port",
            Attribute::int64("Healthcheck nodePort for the service.").validate(Validator::Port),
        )
        .with(
            "internal_traffic_policy",
            Attribute::string("How nodes distribute service traffic they receive on the ClusterIP.")
                .validate(Validator::OneOf(TRAFFIC_POLICIES)),
        )
        .with(
            "ip_families",
            Attribute::string_list("IP families assigned to this service.")
                .validate(Validator::OneOf(&["IPv4", "IPv6"])),
        )
        .with(
            "ip_family_policy",
            Attribute::string("Dual-stack-ness requested or required by this Service.").validate(
                Validator::OneOf(&["SingleStack", "PreferDualStack", "RequireDualStack"]),
            ),
        )
        .with(
            "load_balancer_class",
            Attribute::string("Class of the load balancer implementation this Service belongs to."),
        )
        .with(
            "load_balancer_ip",
            Attribute::string("Deprecated, requested load balancer address.").k8s_name("loadBalancerIP"),
        )
        .with(
            "load_balancer_source_ranges",
            Attribute::string_list("Client IPs allowed through the cloud-provider load-balancer."),
        )
        .with(
            "ports",
            Attribute::list_nested(service_port(), "The list of ports that are exposed by this service."),
        )
        .with(
            "publish_not_ready_addresses",
            Attribute::bool("Publish addresses of pods regardless of their readiness."),
        )
        .with(
            "selector",
            Attribute::string_map("Route service traffic to pods with label keys and values matching this selector.")
                .validate(Validator::Labels),
        )
        .with(
            "session_affinity",
            Attribute::string("Supports \"ClientIP\" and \"None\".")
                .validate(Validator::OneOf(&["ClientIP", "None"])),
        )
        .with(
            "type",
            Attribute::string("Determines how the Service is exposed.").validate(Validator::OneOf(&[
                "ExternalName",
                "ClusterIP",
                "NodePort",
                "LoadBalancer",
            ])),
        )
}

fn service_port() -> Attributes {
    Attributes::new()
        .with(
            "app_protocol",
            Attribute::string("The application protocol for this port."),
        )
        .with(
            "name",
            Attribute::string("The name of this port within the service.").validate(Validator::LabelName),
        )
        .with(
            "node_port",
            Attribute::int64("The port on each node on which this service is exposed.")
                .validate(Validator::Port),
        )
        .with(
            "port",
            Attribute::int64("The port that will be exposed by this service.")
                .required()
                .validate(Validator::Port),
        )
        .with(
            "protocol",
            Attribute::string("The IP protocol for this port.")
                .validate(Validator::OneOf(&["TCP", "UDP", "SCTP"])),
        )
        .with(
            "target_port",
            Attribute::int_or_string("Number or name of the port to access on the pods targeted by the service.")
                .validate(Validator::Port),
        )
}
