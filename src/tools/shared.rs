// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The two shapes most tools share: "list references" and
//! "describe one, or summarize every one".

use crate::error::Result;
use crate::kubernetes::render::{blocks_or_empty, describe, lines_or_empty, qualified_name};
use crate::kubernetes::resources::{get_namespaced, list_namespaced_or_all};
use k8s_openapi::NamespaceResourceScope;
use kube::{Client, Resource};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// `namespace/name` for every object of a kind, one per line
pub async fn list_references<K>(client: Client, namespace: Option<&str>, kind: &str) -> Result<String>
where
    K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
    <K as Resource>::DynamicType: Default,
{
    let objects: Vec<K> = list_namespaced_or_all(client, namespace).await?;
    Ok(lines_or_empty(objects.iter().map(qualified_name).collect(), kind))
}

/// Full description of one object when `target` names it, otherwise
/// `namespace/name: <field>` for every object across all namespaces
pub async fn describe_or_summarize<K, F>(
    client: Client,
    target: Option<(&str, &str)>,
    kind: &str,
    field: F,
) -> Result<String>
where
    K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Serialize + Debug,
    <K as Resource>::DynamicType: Default,
    F: Fn(&K) -> Result<String>,
{
    if let Some((name, namespace)) = target {
        let object: K = get_namespaced(client, name, namespace).await?;
        return describe(&object);
    }

    let objects: Vec<K> = list_namespaced_or_all(client, None).await?;
    let entries = objects
        .iter()
        .map(|o| Ok(format!("{}: {}", qualified_name(o), field(o)?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(blocks_or_empty(entries, kind))
}
