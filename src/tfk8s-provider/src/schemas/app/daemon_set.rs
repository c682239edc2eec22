use tfk8s_schema::Attribute;
use tfk8s_schema::Attributes;
use tfk8s_schema::Validator;
use tfk8s_types::app::daemon_set::DaemonSetSpec;

use crate::schemas::app::deployment::rolling_update;
use crate::schemas::common::label_selector;
use crate::schemas::core::pod::pod_template;
use crate::ResourceKind;

impl ResourceKind for DaemonSetSpec {
    const DESCRIPTION: &'static str = "DaemonSet represents the configuration of a daemon set.";

    fn body_attributes() -> Attributes {
        let update_strategy = Attributes::new()
            .with(
                "rolling_update",
                Attribute::single_nested(rolling_update(), "Rolling update config params."),
            )
            .with(
                "type",
                Attribute::string("Type of daemon set update.")
                    .validate(Validator::OneOf(&["RollingUpdate", "OnDelete"])),
            );

        let spec = Attributes::new()
            .with(
                "min_ready_seconds",
                Attribute::int64("Minimum number of seconds for which a newly created pod should be ready.")
                    .validate(Validator::Int64AtLeast(0)),
            )
            .with(
                "revision_history_limit",
                Attribute::int64("Number of old history to retain to allow rollback.")
                    .validate(Validator::Int64AtLeast(0)),
            )
            .with(
                "selector",
                Attribute::single_nested(label_selector(), "Label query over pods managed by the daemon set.")
                    .required(),
            )
            .with(
                "template",
                Attribute::single_nested(pod_template(), "Object that describes the pod that will be created.")
                    .required(),
            )
            .with(
                "update_strategy",
                Attribute::single_nested(update_strategy, "Strategy to replace existing DaemonSet pods with new pods."),
            );

        Attributes::new().with(
            "spec",
            Attribute::single_nested(spec, "The desired behavior of this daemon set.").required(),
        )
    }
}
