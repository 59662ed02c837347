// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster nodes

use crate::error::Result;
use crate::kubernetes::render::{blocks_or_empty, describe, lines_or_empty};
use crate::kubernetes::resources::{get_cluster, list_cluster};
use crate::tools::args::{NoArgs, NodeArgs};
use k8s_openapi::api::core::v1::Node;
use kube::{Client, ResourceExt};
use tracing::instrument;

#[instrument(skip(client))]
pub async fn list_nodes(client: Client, _args: NoArgs) -> Result<String> {
    let nodes: Vec<Node> = list_cluster(client).await?;
    Ok(lines_or_empty(
        nodes.iter().map(|n| n.name_any()).collect(),
        "nodes",
    ))
}

/// One node as YAML, or every node as YAML
#[instrument(skip(client))]
pub async fn describe_node(client: Client, args: NodeArgs) -> Result<String> {
    if let Some(name) = args.name() {
        let node: Node = get_cluster(client, name).await?;
        return describe(&node);
    }

    let nodes: Vec<Node> = list_cluster(client).await?;
    let descriptions = nodes.iter().map(describe).collect::<Result<Vec<_>>>()?;
    Ok(blocks_or_empty(descriptions, "nodes"))
}
