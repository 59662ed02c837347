// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! apps/v1 workloads: deployments, daemonsets, statefulsets and replicasets

use crate::constants::NONE;
use crate::error::Result;
use crate::kubernetes::render::{lines_or_empty, qualified_name, summary};
use crate::kubernetes::resources::list_namespaced_or_all;
use crate::tools::args::{DaemonSetArgs, NamespaceArgs, ReplicaSetArgs, ScaleArgs, StatefulSetArgs};
use crate::tools::shared::{describe_or_summarize, list_references};
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, ReplicaSet, StatefulSet};
use kube::{
    api::{Patch, PatchParams},
    Api, Client,
};
use serde_json::json;
use tracing::{info, instrument};

#[instrument(skip(client))]
pub async fn list_deployments(client: Client, args: NamespaceArgs) -> Result<String> {
    list_references::<Deployment>(client, args.namespace(), "deployments").await
}

/// Patch the scale subresource of one deployment. Without a complete target,
/// report the desired replica count of every deployment instead.
#[instrument(skip(client))]
pub async fn scale_deployment(client: Client, args: ScaleArgs) -> Result<String> {
    if let Some((name, replicas, namespace)) = args.target() {
        let deployments: Api<Deployment> = Api::namespaced(client, namespace);
        let patch = json!({ "spec": { "replicas": replicas } });
        deployments
            .patch_scale(name, &PatchParams::default(), &Patch::Merge(&patch))
            .await?;
        info!("Scaled deployment {}/{} to {} replicas", namespace, name, replicas);
        return Ok(format!(
            "Scaled deployment {}/{} to {} replicas.",
            namespace, name, replicas
        ));
    }

    let deployments: Vec<Deployment> = list_namespaced_or_all(client, None).await?;
    let lines = deployments
        .iter()
        .map(|d| {
            let replicas = d
                .spec
                .as_ref()
                .and_then(|s| s.replicas)
                .map_or_else(|| NONE.to_string(), |r| r.to_string());
            format!("{}: {} replicas", qualified_name(d), replicas)
        })
        .collect();

    Ok(lines_or_empty(lines, "deployments"))
}

#[instrument(skip(client))]
pub async fn list_daemonsets(client: Client, args: NamespaceArgs) -> Result<String> {
    list_references::<DaemonSet>(client, args.namespace(), "daemonsets").await
}

#[instrument(skip(client))]
pub async fn get_daemonset(client: Client, args: DaemonSetArgs) -> Result<String> {
    describe_or_summarize(client, args.target(), "daemonsets", |ds: &DaemonSet| {
        summary(ds.status.as_ref())
    })
    .await
}

#[instrument(skip(client))]
pub async fn list_statefulsets(client: Client, args: NamespaceArgs) -> Result<String> {
    list_references::<StatefulSet>(client, args.namespace(), "statefulsets").await
}

#[instrument(skip(client))]
pub async fn get_statefulset(client: Client, args: StatefulSetArgs) -> Result<String> {
    describe_or_summarize(client, args.target(), "statefulsets", |ss: &StatefulSet| {
        summary(ss.status.as_ref())
    })
    .await
}

#[instrument(skip(client))]
pub async fn list_replicasets(client: Client, args: NamespaceArgs) -> Result<String> {
    list_references::<ReplicaSet>(client, args.namespace(), "replicasets").await
}

#[instrument(skip(client))]
pub async fn get_replicaset(client: Client, args: ReplicaSetArgs) -> Result<String> {
    describe_or_summarize(client, args.target(), "replicasets", |rs: &ReplicaSet| {
        summary(rs.status.as_ref())
    })
    .await
}
