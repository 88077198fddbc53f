//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Dispatch of `tools/call` by tool name
//! - Tool metadata for `tools/list`

use std::sync::Arc;
use tracing::warn;

use rmcp::model::{CallToolResult, Tool};

use crate::core::config::Config;
use crate::domains::specs::SpecService;

use super::ToolError;
use super::definitions::{CreateSpecTool, DeleteSpecTool, EditSpecTool, GetSpecTool, ListSpecsTool};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    config: Arc<Config>,
    service: SpecService,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            service: SpecService::new(config.clone()),
            config,
        }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetSpecTool::NAME,
            ListSpecsTool::NAME,
            CreateSpecTool::NAME,
            EditSpecTool::NAME,
            DeleteSpecTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for `tools/list`.
    pub fn get_all_tools(&self) -> Vec<Tool> {
        vec![
            GetSpecTool::to_tool(&self.config),
            ListSpecsTool::to_tool(&self.config),
            CreateSpecTool::to_tool(&self.config),
            EditSpecTool::to_tool(&self.config),
            DeleteSpecTool::to_tool(&self.config),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        match name {
            GetSpecTool::NAME => GetSpecTool::handler(arguments, &self.service),
            ListSpecsTool::NAME => ListSpecsTool::handler(arguments, &self.service),
            CreateSpecTool::NAME => CreateSpecTool::handler(arguments, &self.service),
            EditSpecTool::NAME => EditSpecTool::handler(arguments, &self.service),
            DeleteSpecTool::NAME => DeleteSpecTool::handler(arguments, &self.service),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_config());
        let names = registry.tool_names();
        assert_eq!(names.len(), 5);
        assert!(names.contains(&"get_development_spec"));
        assert!(names.contains(&"list_specs"));
        assert!(names.contains(&"create_development_spec"));
        assert!(names.contains(&"edit_development_spec"));
        assert!(names.contains(&"delete_development_spec"));
    }

    #[test]
    fn test_registry_names_match_tools() {
        let registry = ToolRegistry::new(test_config());
        let tools = registry.get_all_tools();
        let tool_names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(tool_names, registry.tool_names());
    }

    #[test]
    fn test_category_enum_in_schemas() {
        let registry = ToolRegistry::new(test_config());
        for tool in registry.get_all_tools() {
            let schema = serde_json::to_string(tool.input_schema.as_ref()).unwrap();
            assert!(schema.contains("projectRoot"), "{}", tool.name);
            if tool.name != "list_specs" {
                for category in ["frontend", "backend", "mobile", "design"] {
                    assert!(schema.contains(category), "{} lacks {}", tool.name, category);
                }
            }
        }
    }

    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_config());
        let result = registry.call_tool("unknown_tool", serde_json::json!({}));
        assert!(matches!(result, Err(ToolError::NotFound(name)) if name == "unknown_tool"));
    }

    #[test]
    fn test_registry_call_known_with_bad_arguments() {
        let registry = ToolRegistry::new(test_config());
        let result = registry
            .call_tool("get_development_spec", serde_json::json!({}))
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }
}
