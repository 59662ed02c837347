// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed list and read calls shared by every resource kind

use crate::error::Result;
use k8s_openapi::{ClusterResourceScope, NamespaceResourceScope};
use kube::{api::ListParams, Api, Client, Resource};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::debug;

/// List a namespaced kind in one namespace, or across all namespaces when none is given
pub async fn list_namespaced_or_all<K>(client: Client, namespace: Option<&str>) -> Result<Vec<K>>
where
    K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
    <K as Resource>::DynamicType: Default,
{
    let api: Api<K> = match namespace {
        Some(ns) => Api::namespaced(client, ns),
        None => Api::all(client),
    };
    let list = api.list(&ListParams::default()).await?;
    debug!(
        "Listed {} {} in {}",
        list.items.len(),
        K::plural(&Default::default()),
        namespace.unwrap_or("all namespaces")
    );
    Ok(list.items)
}

/// List a cluster-scoped kind
pub async fn list_cluster<K>(client: Client) -> Result<Vec<K>>
where
    K: Resource<Scope = ClusterResourceScope> + Clone + DeserializeOwned + Debug,
    <K as Resource>::DynamicType: Default,
{
    let api: Api<K> = Api::all(client);
    Ok(api.list(&ListParams::default()).await?.items)
}

/// Read one namespaced object
pub async fn get_namespaced<K>(client: Client, name: &str, namespace: &str) -> Result<K>
where
    K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
    <K as Resource>::DynamicType: Default,
{
    let api: Api<K> = Api::namespaced(client, namespace);
    Ok(api.get(name).await?)
}

/// Read one cluster-scoped object
pub async fn get_cluster<K>(client: Client, name: &str) -> Result<K>
where
    K: Resource<Scope = ClusterResourceScope> + Clone + DeserializeOwned + Debug,
    <K as Resource>::DynamicType: Default,
{
    let api: Api<K> = Api::all(client);
    Ok(api.get(name).await?)
}
