// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod listing, logs and descriptions

use crate::error::Result;
use crate::kubernetes::render::{blocks_or_empty, describe, qualified_name};
use crate::kubernetes::resources::{get_namespaced, list_namespaced_or_all};
use crate::tools::args::{NamespaceArgs, PodArgs};
use crate::tools::shared::list_references;
use futures::{stream, StreamExt};
use k8s_openapi::api::core::v1::Pod;
use kube::{api::LogParams, Api, Client, ResourceExt};
use tracing::{debug, instrument};

#[instrument(skip(client))]
pub async fn list_pods(client: Client, args: NamespaceArgs) -> Result<String> {
    list_references::<Pod>(client, args.namespace(), "pods").await
}

/// Full log of one pod, or the tail of every pod's log when no pod is named.
/// A pod whose log cannot be read does not fail the whole fan-out.
#[instrument(skip(client))]
pub async fn get_pod_logs(client: Client, args: PodArgs, tail_lines: i64) -> Result<String> {
    if let Some((name, namespace)) = args.target() {
        let pods: Api<Pod> = Api::namespaced(client, namespace);
        let log = pods.logs(name, &LogParams::default()).await?;
        return Ok(format!("{}/{}:\n{}", namespace, name, log));
    }

    let pods: Vec<Pod> = list_namespaced_or_all(client.clone(), None).await?;
    let params = LogParams {
        tail_lines: Some(tail_lines),
        ..Default::default()
    };

    let logs: Vec<String> = stream::iter(pods.iter())
        .then(|pod| tail_pod_log(&client, pod, &params))
        .collect()
        .await;

    Ok(blocks_or_empty(logs, "pod logs"))
}

async fn tail_pod_log(client: &Client, pod: &Pod, params: &LogParams) -> String {
    let reference = qualified_name(pod);
    let pods: Api<Pod> = Api::namespaced(client.clone(), &pod.namespace().unwrap_or_default());

    match pods.logs(&pod.name_any(), params).await {
        Ok(log) => format!("{}:\n{}", reference, log),
        Err(e) => {
            debug!("Failed to read logs of {}: {}", reference, e);
            format!("{}: Error fetching logs: {}", reference, e)
        }
    }
}

#[instrument(skip(client))]
pub async fn describe_pod(client: Client, args: PodArgs) -> Result<String> {
    if let Some((name, namespace)) = args.target() {
        let pod: Pod = get_namespaced(client, name, namespace).await?;
        return Ok(format!("{}/{}:\n{}", namespace, name, describe(&pod)?));
    }

    let pods: Vec<Pod> = list_namespaced_or_all(client, None).await?;
    let descriptions = pods
        .iter()
        .map(|pod| Ok(format!("{}:\n{}", qualified_name(pod), describe(pod)?)))
        .collect::<Result<Vec<_>>>()?;

    Ok(blocks_or_empty(descriptions, "pod descriptions"))
}
