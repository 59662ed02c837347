// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! MCP method dispatch on top of the tool catalog

use crate::constants::{protocol, SERVER_NAME};
use crate::mcp::protocol::{
    JsonRpcReply, JsonRpcRequest, JsonRpcResponse, INVALID_PARAMS, INVALID_REQUEST, JSONRPC_VERSION,
    METHOD_NOT_FOUND, PARSE_ERROR,
};
use crate::tools::{Tool, Toolbox};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

/// Answers MCP requests by running catalog tools
#[derive(Clone)]
pub struct McpServer {
    toolbox: Toolbox,
}

impl McpServer {
    pub fn new(toolbox: Toolbox) -> Self {
        Self { toolbox }
    }

    /// Handle one raw payload: a single message or a batch of them.
    /// Returns `None` when nothing in it expects an answer.
    pub async fn handle_payload(&self, raw: &str) -> Option<JsonRpcReply> {
        let value: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => {
                warn!("Failed to parse request: {}", e);
                return Some(JsonRpcReply::Single(JsonRpcResponse::error(
                    None,
                    PARSE_ERROR,
                    format!("Parse error: {}", e),
                )));
            }
        };

        match value {
            Value::Array(messages) if messages.is_empty() => Some(JsonRpcReply::Single(
                JsonRpcResponse::error(None, INVALID_REQUEST, "Invalid request: empty batch"),
            )),
            Value::Array(messages) => {
                debug!("Handling batch of {} messages", messages.len());
                let mut responses = Vec::with_capacity(messages.len());
                for message in messages {
                    responses.extend(self.handle_value(message).await);
                }
                (!responses.is_empty()).then_some(JsonRpcReply::Batch(responses))
            }
            message => self.handle_value(message).await.map(JsonRpcReply::Single),
        }
    }

    /// Handle one decoded message. Returns `None` for notifications.
    pub async fn handle_value(&self, value: Value) -> Option<JsonRpcResponse> {
        let id = value.get("id").cloned().filter(|id| !id.is_null());
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => Some(JsonRpcResponse::error(
                id,
                INVALID_REQUEST,
                format!("Invalid request: {}", e),
            )),
        }
    }

    /// Handle a decoded JSON-RPC request. Returns `None` for notifications.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(method = %request.method, "Handling MCP request");

        // Notifications are never answered, not even with an error
        if request.is_notification() {
            debug!(method = %request.method, "Received notification");
            return None;
        }

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::error(
                request.id,
                INVALID_REQUEST,
                format!("Unsupported jsonrpc version: {}", request.jsonrpc),
            ));
        }

        let id = request.id;
        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id, request.params),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, request.params).await,
            other => {
                warn!(method = %other, "Unknown method");
                JsonRpcResponse::error(id, METHOD_NOT_FOUND, format!("Method not found: {}", other))
            }
        };
        Some(response)
    }

    fn handle_initialize(&self, id: Option<Value>, params: Value) -> JsonRpcResponse {
        #[derive(Debug, Default, Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct InitializeParams {
            #[serde(default)]
            protocol_version: Option<String>,
        }

        let params: InitializeParams = serde_json::from_value(params).unwrap_or_default();
        let version = negotiate_version(params.protocol_version.as_deref());
        info!("MCP session initialized with protocol {}", version);

        JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": version,
                "capabilities": {
                    "tools": { "listChanged": false }
                },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        )
    }

    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let tools: Vec<Value> = Tool::ALL
            .iter()
            .map(|t| {
                json!({
                    "name": t.name(),
                    "description": t.description(),
                    "inputSchema": t.input_schema()
                })
            })
            .collect();

        JsonRpcResponse::success(id, json!({ "tools": tools }))
    }

    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> JsonRpcResponse {
        #[derive(Debug, Deserialize)]
        struct ToolCallParams {
            name: String,
            #[serde(default)]
            arguments: Value,
        }

        let params: ToolCallParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => {
                return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Invalid params: {}", e));
            }
        };

        let Some(tool) = Tool::from_name(&params.name) else {
            return JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Unknown tool: {}", params.name),
            );
        };

        debug!(tool = %params.name, "Calling tool");
        match self.toolbox.call(tool, params.arguments).await {
            Ok(output) => JsonRpcResponse::success(
                id,
                json!({
                    "content": [{ "type": "text", "text": output.text }],
                    "isError": output.is_error
                }),
            ),
            Err(e) => JsonRpcResponse::error(
                id,
                INVALID_PARAMS,
                format!("Invalid arguments for {}: {}", params.name, e),
            ),
        }
    }
}

/// The client's requested revision when supported, otherwise the newest one
fn negotiate_version(requested: Option<&str>) -> &'static str {
    requested
        .and_then(|r| protocol::SUPPORTED_VERSIONS.iter().copied().find(|v| *v == r))
        .unwrap_or(protocol::LATEST_VERSION)
}
