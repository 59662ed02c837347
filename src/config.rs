// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Context, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::constants::defaults;

/// How the tool catalog is exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// JSON-RPC over HTTP POST
    Http,
    /// Newline-delimited JSON-RPC over stdin/stdout
    Stdio,
}

impl std::str::FromStr for Transport {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Transport::Http),
            "stdio" => Ok(Transport::Stdio),
            other => bail!("unknown transport '{}', expected 'http' or 'stdio'", other),
        }
    }
}

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub transport: Transport,
    pub host: String,
    pub port: u16,
    /// Path the JSON-RPC endpoint is mounted on
    pub path: String,
    /// Kubeconfig context to use instead of the current one
    pub kube_context: Option<String>,
    /// Kubeconfig file to use exclusively, skipping the in-cluster fallback
    pub kubeconfig: Option<PathBuf>,
    /// Lines of log kept per pod when fetching logs for every pod
    pub log_tail_lines: i64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            transport: Transport::Http,
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            path: defaults::PATH.to_string(),
            kube_context: None,
            kubeconfig: None,
            log_tail_lines: defaults::LOG_TAIL_LINES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(transport) = lookup("KUBE_MCP_TRANSPORT") {
            config.transport = transport.parse()?;
        }
        if let Some(host) = lookup("KUBE_MCP_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("KUBE_MCP_PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("KUBE_MCP_PORT is not a valid port: {}", port))?;
        }
        if let Some(path) = lookup("KUBE_MCP_PATH") {
            config.path = if path.starts_with('/') {
                path
            } else {
                format!("/{}", path)
            };
            if config.path == defaults::HEALTH_PATH {
                bail!("KUBE_MCP_PATH cannot be {}, it is reserved for health checks", defaults::HEALTH_PATH);
            }
        }
        config.kube_context = lookup("KUBE_MCP_CONTEXT").filter(|c| !c.is_empty());
        config.kubeconfig = lookup("KUBE_MCP_KUBECONFIG")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        if let Some(lines) = lookup("KUBE_MCP_LOG_TAIL_LINES") {
            config.log_tail_lines = lines.parse().with_context(|| {
                format!("KUBE_MCP_LOG_TAIL_LINES is not a number: {}", lines)
            })?;
            if config.log_tail_lines < 1 {
                bail!("KUBE_MCP_LOG_TAIL_LINES must be at least 1, got {}", config.log_tail_lines);
            }
        }

        Ok(config)
    }

    /// Socket address the HTTP transport binds to
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}
