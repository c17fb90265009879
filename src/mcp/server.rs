//! MCP server implementation.

use super::protocol::*;
use super::tools::{call_tool, get_tools};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "airfreight";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
const INTERNAL_ERROR: i32 = -32603;

/// MCP server exposing the travel-time tool.
#[derive(Debug, Default)]
pub struct McpServer {
    initialized: bool,
}

impl McpServer {
    /// Create a new MCP server.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the MCP server (reads from stdin, writes to stdout).
    pub async fn run(&mut self) -> anyhow::Result<()> {
        tracing::info!("airfreight MCP server starting");
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Serve line-delimited JSON-RPC until the reader is exhausted.
    pub async fn serve<R, W>(&mut self, reader: R, mut writer: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<JsonRpcRequest>(line) {
                Ok(request) => self.handle_request(request),
                Err(e) => {
                    tracing::warn!("Failed to parse request: {}", e);
                    Some(JsonRpcResponse::error(None, PARSE_ERROR, "Parse error"))
                }
            };

            if let Some(response) = response {
                let mut out = serde_json::to_vec(&response)?;
                out.push(b'\n');
                writer.write_all(&out).await?;
                writer.flush().await?;
            }
        }

        tracing::info!("stdin closed, MCP server stopping");
        Ok(())
    }

    /// Handle a single JSON-RPC request. Notifications get no response.
    fn handle_request(&mut self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        tracing::debug!(method = %request.method, "MCP request");

        if request.is_notification() {
            if request.method == "notifications/initialized" || request.method == "initialized" {
                self.initialized = true;
            }
            return None;
        }

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id),
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params),
            _ => JsonRpcResponse::error(
                request.id,
                METHOD_NOT_FOUND,
                &format!("Method not found: {}", request.method),
            ),
        };
        Some(response)
    }

    /// Handle initialize request.
    fn handle_initialize(&mut self, id: Option<Value>) -> JsonRpcResponse {
        self.initialized = true;

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        };

        respond(id, &result)
    }

    /// Handle tools/list request.
    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        respond(id, &ToolsListResult { tools: get_tools() })
    }

    /// Handle tools/call request.
    fn handle_tools_call(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let params: ToolCallParams = match params {
            Some(p) => match serde_json::from_value(p) {
                Ok(params) => params,
                Err(e) => {
                    return JsonRpcResponse::error(
                        id,
                        INVALID_PARAMS,
                        &format!("Invalid params: {}", e),
                    )
                }
            },
            None => return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing params"),
        };

        if !self.initialized {
            tracing::warn!(tool = %params.name, "tools/call before initialize");
        }

        let result = call_tool(&params.name, params.arguments);
        if result.is_error == Some(true) {
            tracing::debug!(tool = %params.name, "tool call rejected");
        }
        respond(id, &result)
    }
}

fn respond<T: Serialize>(id: Option<Value>, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, &e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn exchange(input: &str) -> Vec<Value> {
        let mut server = McpServer::new();
        let mut output = Vec::new();
        server.serve(input.as_bytes(), &mut output).await.unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_initialize_and_list() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test","version":"0"}}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
            "\n",
        );

        let responses = exchange(input).await;
        assert_eq!(responses.len(), 2);

        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[0]["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(responses[0]["result"]["serverInfo"]["name"], "airfreight");
        assert_eq!(
            responses[0]["result"]["capabilities"]["tools"]["listChanged"],
            false
        );

        assert_eq!(responses[1]["id"], 2);
        assert_eq!(
            responses[1]["result"]["tools"][0]["name"],
            "calculate_cargo_travel_time"
        );
        assert!(responses[1]["result"]["tools"][0]["inputSchema"].is_object());
    }

    #[tokio::test]
    async fn test_tools_call() {
        let input = r#"{"jsonrpc":"2.0","id":"a","method":"tools/call","params":{"name":"calculate_cargo_travel_time","arguments":{"origin_coords":[40.7128,-74.006],"destination_coords":[51.5074,-0.1278],"cruising_speed_kmh":750}}}"#;

        let responses = exchange(input).await;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], "a");
        assert_eq!(responses[0]["result"]["content"][0]["type"], "text");
        assert_eq!(
            responses[0]["result"]["content"][0]["text"],
            "Travel time from (40.7128, -74.006) to (51.5074, -0.1278): 9.17 hours"
        );
        assert!(responses[0]["result"].get("isError").is_none());
    }

    #[tokio::test]
    async fn test_tool_error_is_not_protocol_error() {
        let input = r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"calculate_cargo_travel_time","arguments":{"origin_coords":[0,0],"destination_coords":[1,1],"cruising_speed_kmh":-10}}}"#;

        let responses = exchange(input).await;
        assert!(responses[0].get("error").is_none());
        assert_eq!(responses[0]["result"]["isError"], true);
    }

    #[tokio::test]
    async fn test_protocol_errors() {
        let input = concat!(
            "not json\n",
            "\n",
            r#"{"jsonrpc":"2.0","id":4,"method":"resources/list"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":5,"method":"tools/call"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{"arguments":{}}}"#,
            "\n",
        );

        let responses = exchange(input).await;
        assert_eq!(responses.len(), 4);
        assert_eq!(responses[0]["error"]["code"], PARSE_ERROR);
        assert!(responses[0]["id"].is_null());
        assert_eq!(responses[1]["error"]["code"], METHOD_NOT_FOUND);
        assert_eq!(responses[2]["error"]["code"], INVALID_PARAMS);
        assert_eq!(responses[3]["error"]["code"], INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_request_split_across_reads() {
        let reader = tokio_test::io::Builder::new()
            .read(br#"{"jsonrpc":"2.0","id":7,"#)
            .read(b"\"method\":\"ping\"}\n")
            .build();

        let mut server = McpServer::new();
        let mut output = Vec::new();
        server
            .serve(BufReader::new(reader), &mut output)
            .await
            .unwrap();

        let response: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(response["id"], 7);
        assert_eq!(response["result"], json!({}));
    }
}
