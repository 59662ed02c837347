// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Services and ingresses

use crate::error::Result;
use crate::kubernetes::render::summary;
use crate::tools::args::{IngressArgs, NamespaceArgs, ServiceArgs};
use crate::tools::shared::{describe_or_summarize, list_references};
use k8s_openapi::api::core::v1::Service;
use k8s_openapi::api::networking::v1::Ingress;
use kube::Client;
use tracing::instrument;

#[instrument(skip(client))]
pub async fn list_services(client: Client, args: NamespaceArgs) -> Result<String> {
    list_references::<Service>(client, args.namespace(), "services").await
}

/// One service as YAML, or the spec of every service
#[instrument(skip(client))]
pub async fn get_service(client: Client, args: ServiceArgs) -> Result<String> {
    describe_or_summarize(client, args.target(), "services", |svc: &Service| {
        summary(svc.spec.as_ref())
    })
    .await
}

#[instrument(skip(client))]
pub async fn list_ingresses(client: Client, args: NamespaceArgs) -> Result<String> {
    list_references::<Ingress>(client, args.namespace(), "ingresses").await
}

#[instrument(skip(client))]
pub async fn get_ingress(client: Client, args: IngressArgs) -> Result<String> {
    describe_or_summarize(client, args.target(), "ingresses", |ing: &Ingress| {
        summary(ing.status.as_ref())
    })
    .await
}
