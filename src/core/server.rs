//! MCP Server implementation - the protocol dispatcher.
//!
//! Routes decoded JSON-RPC messages to handlers and wraps every outcome in
//! the response envelope. Only unknown methods, unknown tools and internal
//! faults become protocol errors; failures reported by a tool travel inside a
//! successful response as tool output.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and dispatched through the `ToolRegistry`.
//! **Adding a new tool does NOT require modifying this file!**

use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use super::config::Config;
use super::protocol::{JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION};
use crate::domains::tools::ToolRegistry;

const INSTRUCTIONS: &str = "Stores development specs as markdown files under <projectRoot>/.spec. \
Use list_specs to discover specs, get_development_spec to read one, \
create_development_spec for new specs and edit_development_spec to change existing ones.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry dispatching tool calls.
    tools: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let tools = ToolRegistry::new(config.clone());
        info!("Registered tools: {}", tools.tool_names().join(", "));

        Self {
            tools: Arc::new(tools),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Handle one raw message. Returns `None` when no response is due.
    pub fn handle_message(&self, raw: &str) -> Option<JsonRpcResponse> {
        match serde_json::from_str::<JsonRpcRequest>(raw) {
            Ok(request) => self.handle_request(request),
            Err(e) => {
                warn!("Rejecting malformed message: {}", e);
                Some(JsonRpcResponse::internal_error(
                    None,
                    format!("invalid message: {}", e),
                ))
            }
        }
    }

    /// Process a JSON-RPC request and return the response.
    #[instrument(skip_all, fields(method = %request.method))]
    pub fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            debug!("Received notification: {}", request.method);
            return None;
        }

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request),
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request),
            "tools/call" => self.handle_tools_call(request),
            _ => {
                warn!("Unknown method: {}", request.method);
                JsonRpcResponse::method_not_found(request.id, &request.method)
            }
        };
        Some(response)
    }

    fn handle_initialize(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        info!("Processing initialize request");

        let result = json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.name(),
                "version": self.version()
            },
            "instructions": INSTRUCTIONS
        });

        JsonRpcResponse::success(request.id, result)
    }

    fn handle_tools_list(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        info!("Processing tools/list request");

        match serde_json::to_value(self.tools.get_all_tools()) {
            Ok(tools) => JsonRpcResponse::success(request.id, json!({ "tools": tools })),
            Err(e) => {
                error!("Failed to serialize tool list: {}", e);
                JsonRpcResponse::internal_error(request.id, e)
            }
        }
    }

    fn handle_tools_call(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let params = request.params.unwrap_or(Value::Null);
        let name = params.get("name").and_then(Value::as_str).unwrap_or_default();
        let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);

        info!("Processing tools/call request: {}", name);
        debug!("Tool arguments: {}", arguments);

        let result = match self.tools.call_tool(name, arguments) {
            Ok(result) => result,
            Err(e) => {
                if e.code() == super::protocol::INTERNAL_ERROR {
                    error!("Tool call failed: {}", e);
                }
                return JsonRpcResponse::error(request.id, e.code(), e.to_string());
            }
        };

        match serde_json::to_value(&result) {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => {
                error!("Failed to serialize tool result: {}", e);
                JsonRpcResponse::internal_error(request.id, e)
            }
        }
    }
}
