//! Get tool definition.
//!
//! Reads one development spec and returns its markdown content.

use rmcp::{
    handler::server::tool::schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::core::config::Config;
use crate::domains::specs::{Category, SpecDocument, SpecService};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    category_or_default, decode_arguments, input_schema, spec_error_result, structured_result,
};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the get tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSpecParams {
    /// Spec name, e.g. `spttable` or `sptdrawer`.
    pub spec_name: String,

    /// Spec category.
    #[serde(default, deserialize_with = "category_or_default")]
    #[schemars(with = "Category")]
    pub category: Category,

    /// Project root directory; specs are stored under `{projectRoot}/.spec`.
    #[serde(rename = "projectRoot", alias = "root")]
    pub project_root: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Get tool - reads a development spec.
pub struct GetSpecTool;

impl GetSpecTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_development_spec";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a development spec by name and category.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(spec_name = %params.spec_name, category = %params.category))]
    pub fn execute(
        params: &GetSpecParams,
        service: &SpecService,
    ) -> Result<CallToolResult, ToolError> {
        let doc = match service.get(&params.spec_name, params.category, &params.project_root) {
            Ok(doc) => doc,
            Err(e) => return Ok(spec_error_result("get", &e)),
        };

        let summary = format!(
            "# {} development spec\n\nCategory: {}\n\n{}",
            doc.spec_name, doc.category, doc.content
        );
        structured_result(summary, &doc, false)
    }

    /// Decode raw arguments and execute.
    pub fn handler(arguments: Value, service: &SpecService) -> Result<CallToolResult, ToolError> {
        match decode_arguments::<GetSpecParams>(Self::NAME, arguments, service.config()) {
            Ok(params) => Self::execute(&params, service),
            Err(result) => Ok(result),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(config: &Config) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: input_schema::<GetSpecParams>(config),
            annotations: None,
            output_schema: Some(schema_for_type::<SpecDocument>().into()),
            icons: None,
            meta: None,
            title: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn setup() -> (TempDir, SpecService) {
        let temp_dir = TempDir::new().unwrap();
        let service = SpecService::new(Arc::new(Config::default()));
        (temp_dir, service)
    }

    #[test]
    fn test_get_existing_spec() {
        let (temp_dir, service) = setup();
        let root = temp_dir.path().to_string_lossy().to_string();
        service
            .create("spttable", "Use SptTable.", Category::Frontend, &root)
            .unwrap();

        let result = GetSpecTool::handler(
            serde_json::json!({ "spec_name": "spttable", "projectRoot": root }),
            &service,
        )
        .unwrap();

        assert_eq!(result.is_error, Some(false));
        let text = result_text(&result);
        assert!(text.starts_with("# spttable development spec"));
        assert!(text.contains("Category: frontend"));
        assert!(text.ends_with("Use SptTable."));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["content"], "Use SptTable.");
        assert_eq!(structured["category"], "frontend");
    }

    #[test]
    fn test_get_missing_spec() {
        let (temp_dir, service) = setup();

        let params = GetSpecParams {
            spec_name: "ghost".to_string(),
            category: Category::Design,
            project_root: temp_dir.path().to_string_lossy().to_string(),
        };
        let result = GetSpecTool::execute(&params, &service).unwrap();

        assert_eq!(result.is_error, Some(true));
        let text = result_text(&result);
        assert!(text.starts_with("❌"));
        assert!(text.contains("does not exist"));
    }

    #[test]
    fn test_get_unknown_category() {
        let (temp_dir, service) = setup();

        let result = GetSpecTool::handler(
            serde_json::json!({
                "spec_name": "a",
                "category": "ops",
                "projectRoot": temp_dir.path().to_string_lossy(),
            }),
            &service,
        )
        .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("Invalid arguments"));
    }

    #[test]
    fn test_tool_metadata() {
        let tool = GetSpecTool::to_tool(&Config::default());
        assert_eq!(tool.name, GetSpecTool::NAME);
        let required = tool.input_schema["required"].as_array().unwrap();
        assert!(required.contains(&serde_json::json!("spec_name")));
        assert!(required.contains(&serde_json::json!("projectRoot")));
        assert!(!required.contains(&serde_json::json!("category")));
    }
}
