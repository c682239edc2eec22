use tfk8s_schema::Attribute;
use tfk8s_schema::Attributes;
use tfk8s_schema::Validator;
use tfk8s_types::app::stateful_set::StatefulSetSpec;

use crate::schemas::common::label_selector;
use crate::schemas::core::persistent_volume_claim::persistent_volume_claim_template;
use crate::schemas::core::pod::pod_template;
use crate::ResourceKind;

impl ResourceKind for StatefulSetSpec {
    const DESCRIPTION: &'static str =
        "StatefulSet represents a set of pods with consistent identities.";

    fn body_attributes() -> Attributes {
        Attributes::new().with(
            "spec",
            Attribute::single_nested(stateful_set_spec(), "Desired identities of pods in this set.")
                .required(),
        )
    }
}

fn stateful_set_spec() -> Attributes {
    let ordinals = Attributes::new().with(
        "start",
        Attribute::int64("Number representing the first replica's index.")
            .validate(Validator::Int64AtLeast(0)),
    );
    let retention_policy = Attributes::new()
        .with(
            "when_deleted",
            Attribute::string("What happens to PVCs created from volume claim templates when the StatefulSet is deleted.")
                .validate(Validator::OneOf(&["Retain", "Delete"])),
        )
        .with(
            "when_scaled",
            Attribute::string("What happens to PVCs created from volume claim templates when the StatefulSet is scaled down.")
                .validate(Validator::OneOf(&["Retain", "Delete"])),
        );
    let rolling_update = Attributes::new()
        .with(
            "max_unavailable",
            Attribute::int_or_string("Maximum number of pods that can be unavailable during the update."),
        )
        .with(
            "partition",
            Attribute::int64("Ordinal at which the StatefulSet should be partitioned for updates.")
                .validate(Validator::Int64AtLeast(0)),
        );
    let update_strategy = Attributes::new()
        .with(
            "rolling_update",
            Attribute::single_nested(rolling_update, "Used when type is RollingUpdate."),
        )
        .with(
            "type",
            Attribute::string("Type of StatefulSet update.")
                .validate(Validator::OneOf(&["RollingUpdate", "OnDelete"])),
        );

    Attributes::new()
        .with(
            "min_ready_seconds",
            Attribute::int64("Minimum number of seconds for which a newly created pod should be ready.")
                .validate(Validator::Int64AtLeast(0)),
        )
        .with(
            "ordinals",
            Attribute::single_nested(ordinals, "Controls the numbering of replica indices."),
        )
        .with(
            "persistent_volume_claim_retention_policy",
            Attribute::single_nested(
                retention_policy,
                "Lifecycle of persistent volume claims created from volume_claim_templates.",
            ),
        )
        .with(
            "pod_management_policy",
            Attribute::string("Controls how pods are created during initial scale up.")
                .validate(Validator::OneOf(&["OrderedReady", "Parallel"])),
        )
        .with(
            "replicas",
            Attribute::int64("Desired number of replicas of the given Template.")
                .validate(Validator::Int64AtLeast(0)),
        )
        .with(
            "revision_history_limit",
            Attribute::int64("Maximum number of revisions maintained in the revision history.")
                .validate(Validator::Int64AtLeast(0)),
        )
        .with(
            "selector",
            Attribute::single_nested(label_selector(), "Label query over pods that should match the replica count.")
                .required(),
        )
        .with(
            "service_name",
            Attribute::string("Name of the service that governs this StatefulSet.")
                .validate(Validator::LabelName),
        )
        .with(
            "template",
            Attribute::single_nested(pod_template(), "Object that describes the pod that will be created.")
                .required(),
        )
        .with(
            "update_strategy",
            Attribute::single_nested(
                update_strategy,
                "Strategy used to update pods when a revision is made to template.",
            ),
        )
        .with(
            "volume_claim_templates",
            Attribute::list_nested(
                persistent_volume_claim_template(),
                "Claims that pods are allowed to reference.",
            ),
        )
}
