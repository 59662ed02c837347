// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ConfigMaps and Secrets

use crate::error::Result;
use crate::kubernetes::render::{blocks_or_empty, qualified_name, summary};
use crate::kubernetes::resources::{get_namespaced, list_namespaced_or_all};
use crate::tools::args::{ConfigMapArgs, NamespaceArgs, SecretArgs};
use crate::tools::shared::{describe_or_summarize, list_references};
use k8s_openapi::api::core::v1::{ConfigMap, Secret};
use kube::Client;
use tracing::instrument;

#[instrument(skip(client))]
pub async fn list_configmaps(client: Client, args: NamespaceArgs) -> Result<String> {
    list_references::<ConfigMap>(client, args.namespace(), "configmaps").await
}

/// The data of one configmap, or of every configmap
#[instrument(skip(client))]
pub async fn get_configmap(client: Client, args: ConfigMapArgs) -> Result<String> {
    if let Some((name, namespace)) = args.target() {
        let cm: ConfigMap = get_namespaced(client, name, namespace).await?;
        return Ok(format!(
            "ConfigMap '{}' in namespace '{}':\n{}",
            name,
            namespace,
            summary(cm.data.as_ref())?
        ));
    }

    let configmaps: Vec<ConfigMap> = list_namespaced_or_all(client, None).await?;
    let entries = configmaps
        .iter()
        .map(|cm| Ok(format!("{}: {}", qualified_name(cm), summary(cm.data.as_ref())?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(blocks_or_empty(entries, "configmaps"))
}

#[instrument(skip(client))]
pub async fn list_secrets(client: Client, args: NamespaceArgs) -> Result<String> {
    list_references::<Secret>(client, args.namespace(), "secrets").await
}

/// One secret as YAML, or the (base64) data of every secret
#[instrument(skip(client))]
pub async fn get_secret(client: Client, args: SecretArgs) -> Result<String> {
    describe_or_summarize(client, args.target(), "secrets", |s: &Secret| {
        summary(s.data.as_ref())
    })
    .await
}
