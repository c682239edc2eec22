use tfk8s_schema::Attribute;
use tfk8s_schema::Attributes;
use tfk8s_schema::Validator;
use tfk8s_types::batch::cron_job::CronJobSpec;

use crate::schemas::batch::job::job_template;
use crate::ResourceKind;

impl ResourceKind for CronJobSpec {
    const DESCRIPTION: &'static str = "CronJob represents the configuration of a single cron job.";

    fn body_attributes() -> Attributes {
        let spec = Attributes::new()
            .with(
                "concurrency_policy",
                Attribute::string("How to treat concurrent executions of a Job.")
                    .validate(Validator::OneOf(&["Allow", "Forbid", "Replace"])),
            )
            .with(
                "failed_jobs_history_limit",
                Attribute::int64("The number of failed finished jobs to retain.")
                    .validate(Validator::Int64AtLeast(0)),
            )
            .with(
                "job_template",
                Attribute::single_nested(job_template(), "The job that will be created when executing a CronJob.")
                    .required(),
            )
            .with(
                "schedule",
                Attribute::string("The schedule in Cron format.").required(),
            )
            .with(
                "starting_deadline_seconds",
                Attribute::int64("Deadline in seconds for starting the job if it misses scheduled time.")
                    .validate(Validator::Int64AtLeast(0)),
            )
            .with(
                "successful_jobs_history_limit",
                Attribute::int64("The number of successful finished jobs to retain.")
                    .validate(Validator::Int64AtLeast(0)),
            )
            .with(
                "suspend",
                Attribute::bool("Tells the controller to suspend subsequent executions."),
            )
            .with(
                "time_zone",
                Attribute::string("The time zone name for the given schedule."),
            );

        Attributes::new().with(
            "spec",
            Attribute::single_nested(spec, "Desired behavior of a cron job, including the schedule.").required(),
        )
    }
}
