use tfk8s_schema::Attribute;
use tfk8s_schema::Attributes;
use tfk8s_schema::Validator;
use tfk8s_types::app::deployment::DeploymentSpec;

use crate::schemas::common::label_selector;
use crate::schemas::core::pod::pod_template;
use crate::ResourceKind;

impl ResourceKind for DeploymentSpec {
    const DESCRIPTION: &'static str = "Deployment enables declarative updates for Pods and ReplicaSets.";

    fn body_attributes() -> Attributes {
        Attributes::new().with(
            "spec",
            Attribute::single_nested(deployment_spec(), "Desired behavior of the Deployment.").required(),
        )
    }
}

/// shared with DaemonSet
pub fn rolling_update() -> Attributes {
    Attributes::new()
        .with(
            "max_surge",
            Attribute::int_or_string("Maximum number of pods that can be scheduled above the desired number of pods."),
        )
        .with(
            "max_unavailable",
            Attribute::int_or_string("Maximum number of pods that can be unavailable during the update."),
        )
}

fn deployment_spec() -> Attributes {
    let strategy = Attributes::new()
        .with(
            "rolling_update",
            Attribute::single_nested(rolling_update(), "Rolling update config params."),
        )
        .with(
            "type",
            Attribute::string("Type of deployment.")
                .validate(Validator::OneOf(&["Recreate", "RollingUpdate"])),
        );

    Attributes::new()
        .with(
            "min_ready_seconds",
            Attribute::int64("Minimum number of seconds for which a newly created pod should be ready.")
                .validate(Validator::Int64AtLeast(0)),
        )
        .with("paused", Attribute::bool("Indicates that the deployment is paused."))
        .with(
            "progress_deadline_seconds",
            Attribute::int64("Maximum time in seconds for a deployment to make progress before it is considered failed.")
                .validate(Validator::Int64AtLeast(1)),
        )
        .with(
            "replicas",
            Attribute::int64("Number of desired pods.").validate(Validator::Int64AtLeast(0)),
        )
        .with(
            "revision_history_limit",
            Attribute::int64("Number of old ReplicaSets to retain to allow rollback.")
                .validate(Validator::Int64AtLeast(0)),
        )
        .with(
            "selector",
            Attribute::single_nested(label_selector(), "Label selector for pods.").required(),
        )
        .with(
            "strategy",
            Attribute::single_nested(strategy, "The deployment strategy to use to replace existing pods with new ones."),
        )
        .with(
            "template",
            Attribute::single_nested(pod_template(), "Template describes the pods that will be created.")
                .required(),
        )
}
