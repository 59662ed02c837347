// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kube_mcp::config::{Config, Transport};
use kube_mcp::kubernetes::ClusterConnector;
use kube_mcp::mcp::{http, stdio, McpServer};
use kube_mcp::tools::Toolbox;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays free for the stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting kube-mcp {}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: transport={:?}, context={}, log_tail_lines={}",
        config.transport,
        config.kube_context.as_deref().unwrap_or("<current>"),
        config.log_tail_lines
    );

    // Credentials are resolved on every tool call, not here
    let connector = match &config.kubeconfig {
        Some(path) => ClusterConnector::from_kubeconfig_file(path.clone(), config.kube_context.clone()),
        None => ClusterConnector::resolving(config.kube_context.clone()),
    };
    let server = McpServer::new(Toolbox::new(connector, config.log_tail_lines));

    match config.transport {
        Transport::Http => http::serve(&config, server).await,
        Transport::Stdio => stdio::serve_stdio(server).await,
    }
}
