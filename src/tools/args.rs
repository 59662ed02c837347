// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Tool argument types. Their JSON Schemas are what `tools/list` advertises.
//!
//! Every argument is optional and an empty string counts as absent.

use schemars::JsonSchema;
use serde::Deserialize;

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Arguments of tools that take none
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NoArgs {}

/// Arguments of tools scoped to an optional namespace
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NamespaceArgs {
    /// Namespace to restrict the listing to; all namespaces when omitted
    #[serde(default)]
    pub namespace: Option<String>,
}

impl NamespaceArgs {
    pub fn namespace(&self) -> Option<&str> {
        present(&self.namespace)
    }
}

/// Arguments of namespace create/delete
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NamespaceNameArgs {
    /// Name of the namespace; lists all namespaces when omitted
    #[serde(default)]
    pub namespace: Option<String>,
}

impl NamespaceNameArgs {
    pub fn name(&self) -> Option<&str> {
        present(&self.namespace)
    }
}

/// Arguments of `describe_node`
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NodeArgs {
    /// Name of the node; describes every node when omitted
    #[serde(default)]
    pub node_name: Option<String>,
}

impl NodeArgs {
    pub fn name(&self) -> Option<&str> {
        present(&self.node_name)
    }
}

/// Arguments of `scale_deployment`
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ScaleArgs {
    /// Name of the deployment to scale
    #[serde(default)]
    pub deployment_name: Option<String>,
    /// Desired replica count
    #[serde(default)]
    pub replicas: Option<i32>,
    /// Namespace of the deployment
    #[serde(default)]
    pub namespace: Option<String>,
}

impl ScaleArgs {
    /// Deployment name, replica count and namespace, when all three are given
    pub fn target(&self) -> Option<(&str, i32, &str)> {
        Some((
            present(&self.deployment_name)?,
            self.replicas?,
            present(&self.namespace)?,
        ))
    }
}

/// Declares the argument type of a "get one, or summarize all" tool.
macro_rules! object_args {
    ($name:ident, $field:ident, $field_doc:literal, $namespace_doc:literal) => {
        #[derive(Debug, Default, Deserialize, JsonSchema)]
        pub struct $name {
            #[doc = $field_doc]
            #[serde(default)]
            pub $field: Option<String>,
            #[doc = $namespace_doc]
            #[serde(default)]
            pub namespace: Option<String>,
        }

        impl $name {
            /// Object name and namespace, when both are given
            pub fn target(&self) -> Option<(&str, &str)> {
                Some((present(&self.$field)?, present(&self.namespace)?))
            }
        }
    };
}

object_args!(
    PodArgs,
    pod_name,
    "Name of the pod; covers all pods when omitted",
    "Namespace of the pod"
);
object_args!(
    ServiceArgs,
    service_name,
    "Name of the service; covers all services when omitted",
    "Namespace of the service"
);
object_args!(
    ConfigMapArgs,
    configmap_name,
    "Name of the configmap; covers all configmaps when omitted",
    "Namespace of the configmap"
);
object_args!(
    SecretArgs,
    secret_name,
    "Name of the secret; covers all secrets when omitted",
    "Namespace of the secret"
);
object_args!(
    PvcArgs,
    pvc_name,
    "Name of the persistent volume claim; covers all persistent volume claims when omitted",
    "Namespace of the persistent volume claim"
);
object_args!(
    JobArgs,
    job_name,
    "Name of the job; covers all jobs when omitted",
    "Namespace of the job"
);
object_args!(
    CronJobArgs,
    cronjob_name,
    "Name of the cronjob; covers all cronjobs when omitted",
    "Namespace of the cronjob"
);
object_args!(
    IngressArgs,
    ingress_name,
    "Name of the ingress; covers all ingresses when omitted",
    "Namespace of the ingress"
);
object_args!(
    DaemonSetArgs,
    daemonset_name,
    "Name of the daemonset; covers all daemonsets when omitted",
    "Namespace of the daemonset"
);
object_args!(
    StatefulSetArgs,
    statefulset_name,
    "Name of the statefulset; covers all statefulsets when omitted",
    "Namespace of the statefulset"
);
object_args!(
    EventArgs,
    event_name,
    "Name of the event; covers all events when omitted",
    "Namespace of the event"
);
object_args!(
    ReplicaSetArgs,
    replicaset_name,
    "Name of the replicaset; covers all replicasets when omitted",
    "Namespace of the replicaset"
);
