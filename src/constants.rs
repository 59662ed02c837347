// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Name reported to MCP clients in `serverInfo`
pub const SERVER_NAME: &str = "kube-mcp";

/// Configuration defaults
pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 8000;
    pub const PATH: &str = "/mcp";
    /// Liveness probe route, not available as the JSON-RPC path
    pub const HEALTH_PATH: &str = "/healthz";
    /// Lines of log kept per pod when fetching logs for every pod
    pub const LOG_TAIL_LINES: i64 = 10;
}

/// MCP protocol revisions
pub mod protocol {
    /// Revisions this server can speak, newest first
    pub const SUPPORTED_VERSIONS: &[&str] = &["2025-06-18", "2025-03-26", "2024-11-05"];
    pub const LATEST_VERSION: &str = SUPPORTED_VERSIONS[0];
}

/// Placeholder rendered for fields the API server left unset
pub const NONE: &str = "<none>";
