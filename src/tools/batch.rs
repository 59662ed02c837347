// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! batch/v1 jobs and cronjobs

use crate::error::Result;
use crate::kubernetes::render::summary;
use crate::tools::args::{CronJobArgs, JobArgs, NamespaceArgs};
use crate::tools::shared::{describe_or_summarize, list_references};
use k8s_openapi::api::batch::v1::{CronJob, Job};
use kube::Client;
use tracing::instrument;

#[instrument(skip(client))]
pub async fn list_jobs(client: Client, args: NamespaceArgs) -> Result<String> {
    list_references::<Job>(client, args.namespace(), "jobs").await
}

#[instrument(skip(client))]
pub async fn get_job(client: Client, args: JobArgs) -> Result<String> {
    describe_or_summarize(client, args.target(), "jobs", |job: &Job| {
        summary(job.status.as_ref())
    })
    .await
}

#[instrument(skip(client))]
pub async fn list_cronjobs(client: Client, args: NamespaceArgs) -> Result<String> {
    list_references::<CronJob>(client, args.namespace(), "cronjobs").await
}

#[instrument(skip(client))]
pub async fn get_cronjob(client: Client, args: CronJobArgs) -> Result<String> {
    describe_or_summarize(client, args.target(), "cronjobs", |cj: &CronJob| {
        summary(cj.status.as_ref())
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{list_json, object_json, MockService};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_jobs_all_namespaces() {
        let mock = MockService::new().on_get(
            "/apis/batch/v1/jobs",
            200,
            &list_json(
                "batch/v1",
                "Job",
                vec![object_json("batch/v1", "Job", Some("ops"), "backup-1", json!({}))],
            ),
        );

        let out = list_jobs(mock.into_client(), NamespaceArgs::default()).await.unwrap();
        assert_eq!(out, "ops/backup-1");
    }

    #[tokio::test]
    async fn test_get_job_status_summaries() {
        let mock = MockService::new().on_get(
            "/apis/batch/v1/jobs",
            200,
            &list_json(
                "batch/v1",
                "Job",
                vec![object_json(
                    "batch/v1",
                    "Job",
                    Some("ops"),
                    "backup-1",
                    json!({ "status": { "succeeded": 1 } }),
                )],
            ),
        );

        let out = get_job(mock.into_client(), JobArgs::default()).await.unwrap();
        assert_eq!(out, r#"ops/backup-1: {"succeeded":1}"#);
    }

    #[tokio::test]
    async fn test_list_cronjobs_in_namespace_uses_batch_v1() {
        let mock = MockService::new().on_get(
            "/apis/batch/v1/namespaces/ops/cronjobs",
            200,
            &list_json(
                "batch/v1",
                "CronJob",
                vec![object_json("batch/v1", "CronJob", Some("ops"), "nightly", json!({}))],
            ),
        );
        let args = NamespaceArgs {
            namespace: Some("ops".to_string()),
        };

        let out = list_cronjobs(mock.into_client(), args).await.unwrap();
        assert_eq!(out, "ops/nightly");
    }

    #[tokio::test]
    async fn test_get_single_cronjob() {
        let mock = MockService::new().on_get(
            "/apis/batch/v1/namespaces/ops/cronjobs/nightly",
            200,
            &object_json(
                "batch/v1",
                "CronJob",
                Some("ops"),
                "nightly",
                json!({ "spec": { "schedule": "0 2 * * *", "jobTemplate": {} } }),
            )
            .to_string(),
        );
        let args = CronJobArgs {
            cronjob_name: Some("nightly".to_string()),
            namespace: Some("ops".to_string()),
        };

        let out = get_cronjob(mock.into_client(), args).await.unwrap();
        assert!(out.contains("kind: CronJob"));
        assert!(out.contains("0 2 * * *"));
    }
}
