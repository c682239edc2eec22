use tfk8s_schema::Attribute;
use tfk8s_schema::Attributes;
use tfk8s_schema::Validator;
use tfk8s_types::batch::job::JobSpec;

use crate::schemas::common::label_selector;
use crate::schemas::common::template_meta;
use crate::schemas::core::pod::pod_template;
use crate::ResourceKind;

impl ResourceKind for JobSpec {
    const DESCRIPTION: &'static str = "Job represents the configuration of a single job.";

    fn body_attributes() -> Attributes {
        Attributes::new().with(
            "spec",
            Attribute::single_nested(job_spec(), "Specification of the desired behavior of a job.").required(),
        )
    }
}

/// job template of a CronJob
pub fn job_template() -> Attributes {
    Attributes::new()
        .with(
            "metadata",
            Attribute::single_nested(template_meta(), "Standard object's metadata of the jobs created from this template."),
        )
        .with(
            "spec",
            Attribute::single_nested(job_spec(), "Specification of the desired behavior of the job."),
        )
}

fn job_spec() -> Attributes {
    Attributes::new()
        .with(
            "active_deadline_seconds",
            Attribute::int64("Duration in seconds relative to the start time that the job may be continuously active.")
                .validate(Validator::Int64AtLeast(1)),
        )
        .with(
            "backoff_limit",
            Attribute::int64("Number of retries before marking this job failed.")
                .validate(Validator::Int64AtLeast(0)),
        )
        .with(
            "completion_mode",
            Attribute::string("How Pod completions are tracked.")
                .validate(Validator::OneOf(&["NonIndexed", "Indexed"])),
        )
        .with(
            "completions",
            Attribute::int64("Desired number of successfully finished pods the job should be run with.")
                .validate(Validator::Int64AtLeast(0)),
        )
        .with(
            "manual_selector",
            Attribute::bool("Controls generation of pod labels and pod selectors."),
        )
        .with(
            "parallelism",
            Attribute::int64("Maximum desired number of pods the job should run at any given time.")
                .validate(Validator::Int64AtLeast(0)),
        )
        .with(
            "selector",
            Attribute::single_nested(label_selector(), "A label query over pods that should match the pod count."),
        )
        .with(
            "suspend",
            Attribute::bool("Whether the Job controller should create Pods or not."),
        )
        .with(
            "template",
            Attribute::single_nested(pod_template(), "Describes the pod that will be created when executing a job.")
                .required(),
        )
        .with(
            "ttl_seconds_after_finished",
            Attribute::int64("Limits the lifetime of a Job that has finished execution.")
                .validate(Validator::Int64AtLeast(0)),
        )
}
