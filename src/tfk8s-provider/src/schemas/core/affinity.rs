use tfk8s_schema::Attribute;
use tfk8s_schema::Attributes;
use tfk8s_schema::Validator;

use crate::schemas::common::label_selector;

const REQUIRED_DURING_SCHEDULING: &str = "requiredDuringSchedulingIgnoredDuringExecution";
const PREFERRED_DURING_SCHEDULING: &str = "preferredDuringSchedulingIgnoredDuringExecution";

pub fn affinity() -> Attributes {
    Attributes::new()
        .with(
            "node_affinity",
            Attribute::single_nested(node_affinity(), "Node affinity scheduling rules for the pod."),
        )
        .with(
            "pod_affinity",
            Attribute::single_nested(
                pod_affinity(),
                "Co-locate this pod in the same node, zone, etc. as some other pods.",
            ),
        )
        .with(
            "pod_anti_affinity",
            Attribute::single_nested(
                pod_affinity(),
                "Avoid putting this pod in the same node, zone, etc. as some other pods.",
            ),
        )
}

fn node_affinity() -> Attributes {
    let node_selector = Attributes::new().with(
        "node_selector_terms",
        Attribute::list_nested(node_selector_term(), "List of node selector terms, ORed.").required(),
    );
    let preferred = Attributes::new()
        .with(
            "weight",
            Attribute::int64("Weight associated with matching the term, in the range 1-100.").required(),
        )
        .with(
            "preference",
            Attribute::single_nested(node_selector_term(), "A node selector term.").required(),
        );

    Attributes::new()
        .with(
            "required",
            Attribute::single_nested(
                node_selector,
                "Rules that must be met at scheduling time for the pod to be placed on a node.",
            )
            .k8s_name(REQUIRED_DURING_SCHEDULING),
        )
        .with(
            "preferred",
            Attribute::list_nested(
                preferred,
                "The scheduler prefers nodes that satisfy these expressions.",
            )
            .k8s_name(PREFERRED_DURING_SCHEDULING),
        )
}

fn node_selector_term() -> Attributes {
    let requirement = Attributes::new()
        .with(
            "key",
            Attribute::string("The label key that the selector applies to.").required(),
        )
        .with(
            "operator",
            Attribute::string("Represents a key's relationship to a set of values.")
                .required()
                .validate(Validator::OneOf(&["In", "NotIn", "Exists", "DoesNotExist", "Gt", "Lt"])),
        )
        .with("values", Attribute::string_list("An array of string values."));

    Attributes::new()
        .with(
            "match_expressions",
            Attribute::list_nested(requirement.clone(), "Node selector requirements by node's labels."),
        )
        .with(
            "match_fields",
            Attribute::list_nested(requirement, "Node selector requirements by node's fields."),
        )
}

fn pod_affinity() -> Attributes {
    let weighted = Attributes::new()
        .with(
            "weight",
            Attribute::int64("Weight associated with matching the term, in the range 1-100.").required(),
        )
        .with(
            "pod_affinity_term",
            Attribute::single_nested(pod_affinity_term(), "A pod affinity term.").required(),
        );

    Attributes::new()
        .with(
            "required",
            Attribute::list_nested(
                pod_affinity_term(),
                "Rules that must be met at scheduling time for the pod to be placed on a node.",
            )
            .k8s_name(REQUIRED_DURING_SCHEDULING),
        )
        .with(
            "preferred",
            Attribute::list_nested(weighted, "The scheduler prefers nodes that satisfy these terms.")
                .k8s_name(PREFERRED_DURING_SCHEDULING),
        )
}

fn pod_affinity_term() -> Attributes {
    Attributes::new()
        .with(
            "label_selector",
            Attribute::single_nested(label_selector(), "A label query over a set of resources."),
        )
        .with(
            "namespace_selector",
            Attribute::single_nested(label_selector(), "A label query over the set of namespaces."),
        )
        .with(
            "namespaces",
            Attribute::string_list("Static list of namespace names the term applies to."),
        )
        .with(
            "topology_key",
            Attribute::string("Key of the node label that defines co-location.").required(),
        )
}
