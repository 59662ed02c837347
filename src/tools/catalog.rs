// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The closed set of tools this server exposes, with their descriptions,
//! error prefixes and argument schemas.

use crate::tools::args::*;
use schemars::schema_for;
use serde_json::Value;

macro_rules! catalog {
    ($($variant:ident => $name:literal, $args:ty, $description:literal, $error:literal;)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Tool {
            $($variant,)+
        }

        impl Tool {
            pub const ALL: &'static [Tool] = &[$(Tool::$variant,)+];

            /// Name callers use in `tools/call`
            pub fn name(self) -> &'static str {
                match self {
                    $(Tool::$variant => $name,)+
                }
            }

            pub fn description(self) -> &'static str {
                match self {
                    $(Tool::$variant => $description,)+
                }
            }

            /// Prefix of the text returned when the call fails
            pub fn error_prefix(self) -> &'static str {
                match self {
                    $(Tool::$variant => $error,)+
                }
            }

            /// JSON Schema of the tool's arguments
            pub fn input_schema(self) -> Value {
                let schema = match self {
                    $(Tool::$variant => schema_for!($args),)+
                };
                serde_json::to_value(schema).unwrap_or_else(|_| serde_json::json!({ "type": "object" }))
            }
        }
    };
}

catalog! {
    ListPods => "list_pods", NamespaceArgs,
        "List all pods in a namespace, or all namespaces if none specified.",
        "Error fetching pods";
    GetPodLogs => "get_pod_logs", PodArgs,
        "Get logs for a specific pod. If pod or namespace not specified, return the last lines of logs for all pods in all namespaces.",
        "Error fetching pod logs";
    DescribePod => "describe_pod", PodArgs,
        "Describe a specific pod, or all pods if none specified.",
        "Error describing pod(s)";
    ListDeployments => "list_deployments", NamespaceArgs,
        "List all deployments in a namespace, or all namespaces if none specified.",
        "Error fetching deployments";
    ScaleDeployment => "scale_deployment", ScaleArgs,
        "Scale a deployment to a specified number of replicas. If not specified, returns all deployments and their replica counts.",
        "Error scaling deployment(s)";
    ListServices => "list_services", NamespaceArgs,
        "List all services in a namespace, or all namespaces if none specified.",
        "Error fetching services";
    GetService => "get_service", ServiceArgs,
        "Get details of a specific service, or all services if not specified.",
        "Error fetching service(s)";
    ListNamespaces => "list_namespaces", NoArgs,
        "List all namespaces.",
        "Error fetching namespaces";
    CreateNamespace => "create_namespace", NamespaceNameArgs,
        "Create a new namespace. If none specified, returns all namespaces.",
        "Error creating/listing namespaces";
    DeleteNamespace => "delete_namespace", NamespaceNameArgs,
        "Delete a namespace. If none specified, returns all namespaces.",
        "Error deleting/listing namespaces";
    ListNodes => "list_nodes", NoArgs,
        "List all nodes in the cluster.",
        "Error fetching nodes";
    DescribeNode => "describe_node", NodeArgs,
        "Describe a specific node, or all nodes if not specified.",
        "Error describing node(s)";
    ListConfigMaps => "list_configmaps", NamespaceArgs,
        "List all configmaps in a namespace, or all namespaces if none specified.",
        "Error fetching configmaps";
    GetConfigMap => "get_configmap", ConfigMapArgs,
        "Get a specific configmap, or all configmaps if not specified.",
        "Error fetching configmap(s)";
    ListSecrets => "list_secrets", NamespaceArgs,
        "List all secrets in a namespace, or all namespaces if none specified.",
        "Error fetching secrets";
    GetSecret => "get_secret", SecretArgs,
        "Get a specific secret, or all secrets if not specified.",
        "Error fetching secret(s)";
    ListPersistentVolumes => "list_persistent_volumes", NoArgs,
        "List all persistent volumes.",
        "Error fetching persistent volumes";
    ListPersistentVolumeClaims => "list_persistent_volume_claims", NamespaceArgs,
        "List all persistent volume claims in a namespace, or all namespaces if none specified.",
        "Error fetching PVCs";
    GetPvc => "get_pvc", PvcArgs,
        "Get a specific persistent volume claim, or all PVCs if not specified.",
        "Error fetching PVC(s)";
    ListJobs => "list_jobs", NamespaceArgs,
        "List all jobs in a namespace, or all namespaces if none specified.",
        "Error fetching jobs";
    GetJob => "get_job", JobArgs,
        "Get a specific job, or all jobs if not specified.",
        "Error fetching job(s)";
    ListCronJobs => "list_cronjobs", NamespaceArgs,
        "List all cronjobs in a namespace, or all namespaces if none specified.",
        "Error fetching cronjobs";
    GetCronJob => "get_cronjob", CronJobArgs,
        "Get a specific cronjob, or all cronjobs if not specified.",
        "Error fetching cronjob(s)";
    ListIngresses => "list_ingresses", NamespaceArgs,
        "List all ingresses in a namespace, or all namespaces if none specified.",
        "Error fetching ingresses";
    GetIngress => "get_ingress", IngressArgs,
        "Get a specific ingress, or all ingresses if not specified.",
        "Error fetching ingress(es)";
    ListDaemonSets => "list_daemonsets", NamespaceArgs,
        "List all daemonsets in a namespace, or all namespaces if none specified.",
        "Error fetching daemonsets";
    GetDaemonSet => "get_daemonset", DaemonSetArgs,
        "Get a specific daemonset, or all daemonsets if not specified.",
        "Error fetching daemonset(s)";
    ListStatefulSets => "list_statefulsets", NamespaceArgs,
        "List all statefulsets in a namespace, or all namespaces if none specified.",
        "Error fetching statefulsets";
    GetStatefulSet => "get_statefulset", StatefulSetArgs,
        "Get a specific statefulset, or all statefulsets if not specified.",
        "Error fetching statefulset(s)";
    ListEvents => "list_events", NamespaceArgs,
        "List all events in a namespace, or all namespaces if none specified.",
        "Error fetching events";
    GetEvent => "get_event", EventArgs,
        "Get a specific event, or all events if not specified.",
        "Error fetching event(s)";
    ListReplicaSets => "list_replicasets", NamespaceArgs,
        "List all replicasets in a namespace, or all namespaces if none specified.",
        "Error fetching replicasets";
    GetReplicaSet => "get_replicaset", ReplicaSetArgs,
        "Get a specific replicaset, or all replicasets if not specified.",
        "Error fetching replicaset(s)";
}

impl Tool {
    pub fn from_name(name: &str) -> Option<Tool> {
        Tool::ALL.iter().copied().find(|t| t.name() == name)
    }
}
