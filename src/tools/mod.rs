// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The Kubernetes tool catalog and its dispatcher.
//!
//! Every tool resolves a client, makes one or a few API calls and returns
//! text. Cluster failures never escape as errors: they become the tool's
//! output, prefixed with the tool's error prefix.

pub mod args;
pub mod batch;
pub mod catalog;
pub mod configuration;
pub mod events;
pub mod namespaces;
pub mod nodes;
pub mod pods;
pub mod services;
pub mod shared;
pub mod storage;
pub mod workloads;

pub use catalog::Tool;

use crate::error::Result;
use crate::kubernetes::ClusterConnector;
use kube::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use tracing::{debug, warn};

/// Text produced by a tool call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub text: String,
    pub is_error: bool,
}

/// Runs catalog tools against the cluster
#[derive(Clone)]
pub struct Toolbox {
    connector: ClusterConnector,
    log_tail_lines: i64,
}

impl Toolbox {
    pub fn new(connector: ClusterConnector, log_tail_lines: i64) -> Self {
        Self {
            connector,
            log_tail_lines,
        }
    }

    /// Run a tool. Only arguments that do not fit the tool's schema are
    /// reported as `Err`; everything that goes wrong afterwards is part of
    /// the returned text.
    pub async fn call(&self, tool: Tool, arguments: Value) -> serde_json::Result<ToolOutput> {
        let tail_lines = self.log_tail_lines;
        let output = match tool {
            Tool::ListPods => {
                let args = parse(arguments)?;
                self.run(tool, move |c| pods::list_pods(c, args)).await
            }
            Tool::GetPodLogs => {
                let args = parse(arguments)?;
                self.run(tool, move |c| pods::get_pod_logs(c, args, tail_lines)).await
            }
            Tool::DescribePod => {
                let args = parse(arguments)?;
                self.run(tool, move |c| pods::describe_pod(c, args)).await
            }
            Tool::ListDeployments => {
                let args = parse(arguments)?;
                self.run(tool, move |c| workloads::list_deployments(c, args)).await
            }
            Tool::ScaleDeployment => {
                let args = parse(arguments)?;
                self.run(tool, move |c| workloads::scale_deployment(c, args)).await
            }
            Tool::ListServices => {
                let args = parse(arguments)?;
                self.run(tool, move |c| services::list_services(c, args)).await
            }
            Tool::GetService => {
                let args = parse(arguments)?;
                self.run(tool, move |c| services::get_service(c, args)).await
            }
            Tool::ListNamespaces => {
                let args = parse(arguments)?;
                self.run(tool, move |c| namespaces::list_namespaces(c, args)).await
            }
            Tool::CreateNamespace => {
                let args = parse(arguments)?;
                self.run(tool, move |c| namespaces::create_namespace(c, args)).await
            }
            Tool::DeleteNamespace => {
                let args = parse(arguments)?;
                self.run(tool, move |c| namespaces::delete_namespace(c, args)).await
            }
            Tool::ListNodes => {
                let args = parse(arguments)?;
                self.run(tool, move |c| nodes::list_nodes(c, args)).await
            }
            Tool::DescribeNode => {
                let args = parse(arguments)?;
                self.run(tool, move |c| nodes::describe_node(c, args)).await
            }
            Tool::ListConfigMaps => {
                let args = parse(arguments)?;
                self.run(tool, move |c| configuration::list_configmaps(c, args)).await
            }
            Tool::GetConfigMap => {
                let args = parse(arguments)?;
                self.run(tool, move |c| configuration::get_configmap(c, args)).await
            }
            Tool::ListSecrets => {
                let args = parse(arguments)?;
                self.run(tool, move |c| configuration::list_secrets(c, args)).await
            }
            Tool::GetSecret => {
                let args = parse(arguments)?;
                self.run(tool, move |c| configuration::get_secret(c, args)).await
            }
            Tool::ListPersistentVolumes => {
                let args = parse(arguments)?;
                self.run(tool, move |c| storage::list_persistent_volumes(c, args)).await
            }
            Tool::ListPersistentVolumeClaims => {
                let args = parse(arguments)?;
                self.run(tool, move |c| storage::list_persistent_volume_claims(c, args)).await
            }
            Tool::GetPvc => {
                let args = parse(arguments)?;
                self.run(tool, move |c| storage::get_pvc(c, args)).await
            }
            Tool::ListJobs => {
                let args = parse(arguments)?;
                self.run(tool, move |c| batch::list_jobs(c, args)).await
            }
            Tool::GetJob => {
                let args = parse(arguments)?;
                self.run(tool, move |c| batch::get_job(c, args)).await
            }
            Tool::ListCronJobs => {
                let args = parse(arguments)?;
                self.run(tool, move |c| batch::list_cronjobs(c, args)).await
            }
            Tool::GetCronJob => {
                let args = parse(arguments)?;
                self.run(tool, move |c| batch::get_cronjob(c, args)).await
            }
            Tool::ListIngresses => {
                let args = parse(arguments)?;
                self.run(tool, move |c| services::list_ingresses(c, args)).await
            }
            Tool::GetIngress => {
                let args = parse(arguments)?;
                self.run(tool, move |c| services::get_ingress(c, args)).await
            }
            Tool::ListDaemonSets => {
                let args = parse(arguments)?;
                self.run(tool, move |c| workloads::list_daemonsets(c, args)).await
            }
            Tool::GetDaemonSet => {
                let args = parse(arguments)?;
                self.run(tool, move |c| workloads::get_daemonset(c, args)).await
            }
            Tool::ListStatefulSets => {
                let args = parse(arguments)?;
                self.run(tool, move |c| workloads::list_statefulsets(c, args)).await
            }
            Tool::GetStatefulSet => {
                let args = parse(arguments)?;
                self.run(tool, move |c| workloads::get_statefulset(c, args)).await
            }
            Tool::ListEvents => {
                let args = parse(arguments)?;
                self.run(tool, move |c| events::list_events(c, args)).await
            }
            Tool::GetEvent => {
                let args = parse(arguments)?;
                self.run(tool, move |c| events::get_event(c, args)).await
            }
            Tool::ListReplicaSets => {
                let args = parse(arguments)?;
                self.run(tool, move |c| workloads::list_replicasets(c, args)).await
            }
            Tool::GetReplicaSet => {
                let args = parse(arguments)?;
                self.run(tool, move |c| workloads::get_replicaset(c, args)).await
            }
        };
        Ok(output)
    }

    async fn run<F, Fut>(&self, tool: Tool, operation: F) -> ToolOutput
    where
        F: FnOnce(Client) -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let outcome = match self.connector.connect().await {
            Ok(client) => operation(client).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(text) => {
                debug!("Tool {} succeeded", tool.name());
                ToolOutput {
                    text,
                    is_error: false,
                }
            }
            Err(e) => {
                warn!("Tool {} failed: {}", tool.name(), e);
                ToolOutput {
                    text: format!("{}: {}", tool.error_prefix(), e),
                    is_error: true,
                }
            }
        }
    }
}

/// Missing or `null` arguments count as an empty object
fn parse<T: DeserializeOwned>(arguments: Value) -> serde_json::Result<T> {
    match arguments {
        Value::Null => serde_json::from_value(Value::Object(Default::default())),
        other => serde_json::from_value(other),
    }
}
