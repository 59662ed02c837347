// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from local or in-cluster credentials

use crate::error::{KubeMcpError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig, KubeconfigError};
use kube::{Client, Config as KConfig};
use std::fmt::Display;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Hands out a Kubernetes client for each tool invocation.
///
/// Credentials are resolved again on every call, so edits to the kubeconfig
/// are picked up without restarting the server.
#[derive(Clone)]
pub struct ClusterConnector {
    source: ClientSource,
}

#[derive(Clone)]
enum ClientSource {
    /// Kubeconfig first, then the in-cluster service account
    Resolve { context: Option<String> },
    /// Only the given kubeconfig file
    File { path: PathBuf, context: Option<String> },
    /// A client built by the caller
    Fixed(Client),
}

impl ClusterConnector {
    /// Resolve credentials on demand, optionally pinning a kubeconfig context
    pub fn resolving(context: Option<String>) -> Self {
        Self {
            source: ClientSource::Resolve { context },
        }
    }

    /// Read credentials from one kubeconfig file on demand, with no in-cluster fallback
    pub fn from_kubeconfig_file(path: PathBuf, context: Option<String>) -> Self {
        Self {
            source: ClientSource::File { path, context },
        }
    }

    /// Always hand out the given client
    pub fn fixed(client: Client) -> Self {
        Self {
            source: ClientSource::Fixed(client),
        }
    }

    pub async fn connect(&self) -> Result<Client> {
        match &self.source {
            ClientSource::Fixed(client) => Ok(client.clone()),
            ClientSource::Resolve { context } => resolve_client(context.clone()).await,
            ClientSource::File { path, context } => {
                let config = load_kubeconfig(Kubeconfig::read_from(path), &options(context.clone()))
                    .await
                    .map_err(|e| {
                        KubeMcpError::CredentialsError(format!("kubeconfig {}: {}", path.display(), e))
                    })?;
                build_client(config)
            }
        }
    }
}

fn options(context: Option<String>) -> KubeConfigOptions {
    KubeConfigOptions {
        context,
        ..Default::default()
    }
}

/// Load the local kubeconfig, falling back to the in-cluster service account
#[instrument]
async fn resolve_client(context: Option<String>) -> Result<Client> {
    let config = select_config(Kubeconfig::read(), &options(context), KConfig::incluster).await?;
    build_client(config)
}

async fn load_kubeconfig(
    kubeconfig: std::result::Result<Kubeconfig, KubeconfigError>,
    options: &KubeConfigOptions,
) -> std::result::Result<KConfig, KubeconfigError> {
    KConfig::from_custom_kubeconfig(kubeconfig?, options).await
}

/// The kubeconfig configuration when it loads, otherwise the in-cluster one.
/// When neither works the error names both causes.
async fn select_config<F, E>(
    kubeconfig: std::result::Result<Kubeconfig, KubeconfigError>,
    options: &KubeConfigOptions,
    incluster: F,
) -> Result<KConfig>
where
    F: FnOnce() -> std::result::Result<KConfig, E>,
    E: Display,
{
    match load_kubeconfig(kubeconfig, options).await {
        Ok(config) => {
            debug!("Using kubeconfig credentials for {}", config.cluster_url);
            Ok(config)
        }
        Err(kubeconfig_err) => match incluster() {
            Ok(config) => {
                debug!(
                    "Kubeconfig unavailable ({}), using in-cluster credentials",
                    kubeconfig_err
                );
                Ok(config)
            }
            Err(incluster_err) => Err(KubeMcpError::CredentialsError(format!(
                "kubeconfig: {}; in-cluster: {}",
                kubeconfig_err, incluster_err
            ))),
        },
    }
}

fn build_client(config: KConfig) -> Result<Client> {
    Client::try_from(config)
        .map_err(|e| KubeMcpError::CredentialsError(format!("Failed to create client: {}", e)))
}
