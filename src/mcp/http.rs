// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Streamable-HTTP style transport: one JSON-RPC message per POST

use crate::config::Config;
use crate::constants::defaults;
use crate::mcp::McpServer;
use anyhow::Context;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use http::StatusCode;
use std::sync::Arc;
use tracing::info;

/// Build the router serving JSON-RPC on `path` and a liveness probe on `/healthz`
pub fn router(server: McpServer, path: &str) -> Router {
    Router::new()
        .route(path, post(handle_rpc))
        .route(defaults::HEALTH_PATH, get(health))
        .with_state(Arc::new(server))
}

async fn handle_rpc(State(server): State<Arc<McpServer>>, body: String) -> Response {
    match server.handle_payload(&body).await {
        Some(reply) => (StatusCode::OK, Json(reply)).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

async fn health() -> &'static str {
    "ok"
}

/// Serve until ctrl-c
pub async fn serve(config: &Config, server: McpServer) -> anyhow::Result<()> {
    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Serving MCP over HTTP on http://{}{}", addr, config.path);

    axum::serve(listener, router(server, &config.path))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
