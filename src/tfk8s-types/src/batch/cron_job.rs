use serde::Deserialize;
use serde::Serialize;

use crate::batch::job::JobSpec;
use crate::{Crd, CrdNames, DefaultHeader, Spec, TemplateSpec};

const API: Crd = Crd {
    group: "batch",
    version: "v1",
    names: CrdNames {
        kind: "CronJob",
    },
};

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CronJobSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency_policy: Option<ConcurrencyPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_jobs_history_limit: Option<i32>,
    pub job_template: TemplateSpec<JobSpec>,
    pub schedule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_deadline_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_jobs_history_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum ConcurrencyPolicy {
    Allow,
    Forbid,
    Replace,
}

impl Spec for CronJobSpec {
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &API
    }
}

#[cfg(test)]
mod test {

    use super::{ConcurrencyPolicy, CronJobSpec};
    use crate::batch::job::JobSpec;
    use crate::core::pod::{Container, PodRestartPolicy, PodSpec};
    use crate::{Manifest, ObjectMeta, TemplateSpec};

    #[test]
    fn test_cron_job_round_trip() {
        let job = JobSpec {
            backoff_limit: Some(2),
            template: TemplateSpec::new(PodSpec {
                containers: vec![Container {
                    name: "backup".to_owned(),
                    image: Some("busybox".to_owned()),
                    command: Some(vec!["sh".to_owned(), "-c".to_owned(), "date".to_owned()]),
                    ..Default::default()
                }],
                restart_policy: Some(PodRestartPolicy::OnFailure),
                ..Default::default()
            }),
            ..Default::default()
        };
        let spec = CronJobSpec {
            schedule: "*/5 * * * *".to_owned(),
            concurrency_policy: Some(ConcurrencyPolicy::Forbid),
            job_template: TemplateSpec::new(job),
            ..Default::default()
        };
        let manifest = Manifest::new(ObjectMeta::named("backup"), spec);

        let yaml = serde_yaml::to_string(&manifest).expect("yaml");
        assert!(yaml.starts_with("apiVersion: batch/v1\nkind: CronJob\n"));
        assert!(yaml.contains("*/5 * * * *"));

        let decoded: Manifest<CronJobSpec> = serde_yaml::from_str(&yaml).expect("decode");
        assert_eq!(decoded, manifest);
    }
}
