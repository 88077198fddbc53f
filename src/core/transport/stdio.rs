//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the default and only mode.
//! One JSON-RPC message per line in, one response per line out.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use super::TransportResult;
use crate::core::McpServer;
use crate::core::protocol::JsonRpcResponse;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until stdin is closed.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        serve(&server, tokio::io::stdin(), tokio::io::stdout()).await?;

        info!("STDIO transport finished");
        Ok(())
    }
}

/// Serve newline-delimited JSON-RPC messages from `reader` to `writer`.
///
/// Blank lines are skipped. A line that is not UTF-8 is answered like any
/// other malformed message. Returns when the reader reaches EOF.
pub async fn serve<R, W>(server: &McpServer, reader: R, mut writer: W) -> TransportResult<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!("<- {}", line);
                server.handle_message(line)
            }
            Err(e) => {
                warn!("Rejecting non UTF-8 message: {}", e);
                Some(JsonRpcResponse::internal_error(
                    None,
                    format!("invalid message: {}", e),
                ))
            }
        };

        let Some(response) = response else {
            continue;
        };

        let encoded = serde_json::to_string(&response)?;
        debug!("-> {}", encoded);
        writer.write_all(encoded.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use serde_json::Value;

    async fn run_lines(input: &str) -> Vec<Value> {
        run_bytes(input.as_bytes()).await
    }

    async fn run_bytes(input: &[u8]) -> Vec<Value> {
        let server = McpServer::new(Config::default());
        let mut output = Vec::new();
        serve(&server, input, &mut output).await.unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_one_response_per_request() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
            "\n",
        );

        let responses = run_lines(input).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[1]["id"], 2);
        assert!(responses[1]["result"]["tools"].is_array());
    }

    #[tokio::test]
    async fn test_bad_line_does_not_stop_the_loop() {
        let input = "garbage\n{\"jsonrpc\":\"2.0\",\"id\":9,\"method\":\"ping\"}\n";

        let responses = run_lines(input).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], -32603);
        assert_eq!(responses[1]["id"], 9);
        assert_eq!(responses[1]["result"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_non_utf8_line_does_not_stop_the_loop() {
        let mut input = b"\xff\xfe bad\n".to_vec();
        input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"ping\"}\n");

        let responses = run_bytes(&input).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], Value::Null);
        assert_eq!(responses[0]["error"]["code"], -32603);
        assert!(
            responses[0]["error"]["message"]
                .as_str()
                .unwrap()
                .starts_with("Internal error: invalid message")
        );
        assert_eq!(responses[1]["id"], 3);
    }

    #[tokio::test]
    async fn test_last_line_without_newline() {
        let responses = run_lines(r#"{"jsonrpc":"2.0","id":4,"method":"ping"}"#).await;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], 4);
    }

    #[tokio::test]
    async fn test_empty_input() {
        assert!(run_lines("").await.is_empty());
    }
}
