// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Model Context Protocol front end: JSON-RPC 2.0 handling and the
//! transports that carry it.

pub mod http;
pub mod protocol;
pub mod server;
pub mod stdio;

pub use protocol::{JsonRpcError, JsonRpcReply, JsonRpcRequest, JsonRpcResponse};
pub use server::McpServer;
