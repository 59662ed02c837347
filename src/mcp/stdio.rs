// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Newline-delimited JSON-RPC over stdin/stdout

use crate::mcp::McpServer;
use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

/// Serve on the process' stdin/stdout until stdin closes
pub async fn serve_stdio(server: McpServer) -> anyhow::Result<()> {
    info!("Serving MCP on stdio");
    serve_lines(&server, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
    info!("stdin closed, shutting down");
    Ok(())
}

/// Read one message per line from `reader`, writing one response per line to `writer`
pub async fn serve_lines<R, W>(server: &McpServer, reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await.context("Failed to read from stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        debug!(request = %line, "Received message");

        let Some(reply) = server.handle_payload(line).await else {
            continue;
        };
        let response_json = serde_json::to_string(&reply)?;

        debug!(response = %response_json, "Sending response");

        writer.write_all(response_json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockService;
    use crate::tools::Toolbox;
    use serde_json::Value;

    #[tokio::test]
    async fn test_serve_lines_answers_requests_only() {
        let server = McpServer::new(Toolbox::new(MockService::new().connector(), 10));
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05"}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#,
            "\n",
            "garbage\n",
            r#"[{"jsonrpc":"2.0","id":3,"method":"ping"},{"jsonrpc":"1.0","method":"notifications/cancelled"}]"#,
            "\n",
        );
        let mut output = Vec::new();

        serve_lines(&server, input.as_bytes(), &mut output).await.unwrap();

        let responses: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(responses.len(), 4);
        assert_eq!(responses[0]["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(responses[1]["id"], 2);
        assert_eq!(responses[2]["error"]["code"], -32700);
        assert_eq!(responses[2]["id"], Value::Null);
        assert_eq!(responses[3].as_array().unwrap().len(), 1);
        assert_eq!(responses[3][0]["id"], 3);
    }
}
