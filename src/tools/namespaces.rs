// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace listing, creation and deletion

use crate::error::Result;
use crate::kubernetes::render::lines_or_empty;
use crate::kubernetes::resources::list_cluster;
use crate::tools::args::{NamespaceNameArgs, NoArgs};
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{DeleteParams, ObjectMeta, PostParams},
    Api, Client, ResourceExt,
};
use tracing::{info, instrument};

async fn namespace_names(client: Client) -> Result<String> {
    let namespaces: Vec<Namespace> = list_cluster(client).await?;
    Ok(lines_or_empty(
        namespaces.iter().map(|ns| ns.name_any()).collect(),
        "namespaces",
    ))
}

#[instrument(skip(client))]
pub async fn list_namespaces(client: Client, _args: NoArgs) -> Result<String> {
    namespace_names(client).await
}

/// Create the named namespace, or list namespaces when none is named
#[instrument(skip(client))]
pub async fn create_namespace(client: Client, args: NamespaceNameArgs) -> Result<String> {
    let Some(name) = args.name() else {
        return namespace_names(client).await;
    };

    let namespaces: Api<Namespace> = Api::all(client);
    let ns = Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    namespaces.create(&PostParams::default(), &ns).await?;
    info!("Namespace {} created", name);
    Ok(format!("Created namespace: {}", name))
}

/// Delete the named namespace, or list namespaces when none is named
#[instrument(skip(client))]
pub async fn delete_namespace(client: Client, args: NamespaceNameArgs) -> Result<String> {
    let Some(name) = args.name() else {
        return namespace_names(client).await;
    };

    let namespaces: Api<Namespace> = Api::all(client);
    namespaces.delete(name, &DeleteParams::default()).await?;
    info!("Namespace {} deletion requested", name);
    Ok(format!("Deleted namespace: {}", name))
}
