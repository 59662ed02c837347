// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Persistent volumes and claims

use crate::constants::NONE;
use crate::error::Result;
use crate::kubernetes::render::{lines_or_empty, summary};
use crate::kubernetes::resources::list_cluster;
use crate::tools::args::{NamespaceArgs, NoArgs, PvcArgs};
use crate::tools::shared::{describe_or_summarize, list_references};
use k8s_openapi::api::core::v1::{PersistentVolume, PersistentVolumeClaim};
use kube::{Client, ResourceExt};
use tracing::instrument;

#[instrument(skip(client))]
pub async fn list_persistent_volumes(client: Client, _args: NoArgs) -> Result<String> {
    let volumes: Vec<PersistentVolume> = list_cluster(client).await?;
    Ok(lines_or_empty(
        volumes.iter().map(|pv| pv.name_any()).collect(),
        "persistent volumes",
    ))
}

#[instrument(skip(client))]
pub async fn list_persistent_volume_claims(client: Client, args: NamespaceArgs) -> Result<String> {
    list_references::<PersistentVolumeClaim>(client, args.namespace(), "PVCs").await
}

/// One claim as YAML, or the phase of every claim
#[instrument(skip(client))]
pub async fn get_pvc(client: Client, args: PvcArgs) -> Result<String> {
    describe_or_summarize(client, args.target(), "PVCs", |pvc: &PersistentVolumeClaim| {
        Ok(pvc
            .status
            .as_ref()
            .and_then(|s| s.phase.clone())
            .unwrap_or_else(|| NONE.to_string()))
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{list_json, object_json, MockService};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_persistent_volumes() {
        let mock = MockService::new().on_get(
            "/api/v1/persistentvolumes",
            200,
            &list_json(
                "v1",
                "PersistentVolume",
                vec![object_json("v1", "PersistentVolume", None, "pv-001", json!({}))],
            ),
        );

        let out = list_persistent_volumes(mock.into_client(), NoArgs {}).await.unwrap();
        assert_eq!(out, "pv-001");
    }

    #[tokio::test]
    async fn test_list_pvcs_empty() {
        let mock = MockService::new().on_get(
            "/api/v1/persistentvolumeclaims",
            200,
            &list_json("v1", "PersistentVolumeClaim", vec![]),
        );

        let out = list_persistent_volume_claims(mock.into_client(), NamespaceArgs::default())
            .await
            .unwrap();
        assert_eq!(out, "No PVCs found.");
    }

    #[tokio::test]
    async fn test_get_pvc_phases() {
        let mock = MockService::new().on_get(
            "/api/v1/persistentvolumeclaims",
            200,
            &list_json(
                "v1",
                "PersistentVolumeClaim",
                vec![
                    object_json(
                        "v1",
                        "PersistentVolumeClaim",
                        Some("data"),
                        "pg-data",
                        json!({ "status": { "phase": "Bound" } }),
                    ),
                    object_json("v1", "PersistentVolumeClaim", Some("data"), "scratch", json!({})),
                ],
            ),
        );

        let out = get_pvc(mock.into_client(), PvcArgs::default()).await.unwrap();
        assert_eq!(out, "data/pg-data: Bound\n\ndata/scratch: <none>");
    }

    #[tokio::test]
    async fn test_get_single_pvc() {
        let mock = MockService::new().on_get(
            "/api/v1/namespaces/data/persistentvolumeclaims/pg-data",
            200,
            &object_json(
                "v1",
                "PersistentVolumeClaim",
                Some("data"),
                "pg-data",
                json!({ "status": { "phase": "Bound" } }),
            )
            .to_string(),
        );
        let args = PvcArgs {
            pvc_name: Some("pg-data".to_string()),
            namespace: Some("data".to_string()),
        };

        let out = get_pvc(mock.into_client(), args).await.unwrap();
        assert!(out.contains("phase: Bound"));
    }
}
