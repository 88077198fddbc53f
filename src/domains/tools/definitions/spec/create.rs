//! Create tool definition.
//!
//! Creates a new development spec. Existing specs are never overwritten.

use rmcp::{
    handler::server::tool::schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::core::config::Config;
use crate::domains::specs::{Category, SpecOperation, SpecService};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    OperationText, category_or_default, decode_arguments, input_schema, operation_result,
    spec_error_result,
};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the create tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateSpecParams {
    /// Spec name, e.g. `newcomponent` or `newpattern`.
    pub spec_name: String,

    /// Full spec content (markdown).
    pub content: String,

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

/// Create tool - adds a new development spec.
pub struct CreateSpecTool;

impl CreateSpecTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_development_spec";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Create a new development spec. Existing specs are never overwritten; use edit_development_spec to change one.";

    const TEXT: OperationText<'static> = OperationText {
        done: "Created",
        operation: "create",
        status: "saved",
        tip: "use get_development_spec to view the new spec.",
        suggestions: "1. Check whether a spec with this name already exists (create never overwrites)\n\
                      2. Make sure the content is valid markdown\n\
                      3. To change an existing spec, use edit_development_spec",
    };

    /// Execute the tool logic.
    #[instrument(skip_all, fields(spec_name = %params.spec_name, category = %params.category))]
    pub fn execute(
        params: &CreateSpecParams,
        service: &SpecService,
    ) -> Result<CallToolResult, ToolError> {
        match service.create(
            &params.spec_name,
            &params.content,
            params.category,
            &params.project_root,
        ) {
            Ok(op) => operation_result(&op, &Self::TEXT),
            Err(e) => Ok(spec_error_result("create", &e)),
        }
    }

    /// Decode raw arguments and execute.
    pub fn handler(arguments: Value, service: &SpecService) -> Result<CallToolResult, ToolError> {
        match decode_arguments::<CreateSpecParams>(Self::NAME, arguments, service.config()) {
            Ok(params) => Self::execute(&params, service),
            Err(result) => Ok(result),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(config: &Config) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: input_schema::<CreateSpecParams>(config),
            annotations: None,
            output_schema: Some(schema_for_type::<SpecOperation>().into()),
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

    fn params(root: &TempDir, content: &str) -> CreateSpecParams {
        CreateSpecParams {
            spec_name: "newcomponent".to_string(),
            content: content.to_string(),
            category: Category::Frontend,
            project_root: root.path().to_string_lossy().to_string(),
        }
    }

    #[test]
    fn test_create_success() {
        let temp_dir = TempDir::new().unwrap();
        let service = SpecService::new(Arc::new(Config::default()));

        let result = CreateSpecTool::execute(&params(&temp_dir, "# New"), &service).unwrap();

        assert_eq!(result.is_error, Some(false));
        let text = result_text(&result);
        assert!(text.starts_with("✅ Created spec: newcomponent"));
        assert!(text.contains("- Category: frontend"));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["success"], true);
        assert!(
            temp_dir
                .path()
                .join(".spec/newcomponent_frontend_spec.md")
                .exists()
        );
    }

    #[test]
    fn test_create_existing_is_refused() {
        let temp_dir = TempDir::new().unwrap();
        let service = SpecService::new(Arc::new(Config::default()));

        CreateSpecTool::execute(&params(&temp_dir, "# First"), &service).unwrap();
        let result = CreateSpecTool::execute(&params(&temp_dir, "# Second"), &service).unwrap();

        assert_eq!(result.is_error, Some(true));
        let text = result_text(&result);
        assert!(text.starts_with("❌"));
        assert!(text.contains("already exists"));
        assert!(text.contains("edit_development_spec"));
        assert_eq!(result.structured_content.unwrap()["success"], false);
    }

    #[test]
    fn test_create_empty_content() {
        let temp_dir = TempDir::new().unwrap();
        let service = SpecService::new(Arc::new(Config::default()));

        let result = CreateSpecTool::execute(&params(&temp_dir, "   "), &service).unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("content must not be empty"));
        assert!(!temp_dir.path().join(".spec").exists());
    }

    #[test]
    fn test_create_missing_content_argument() {
        let temp_dir = TempDir::new().unwrap();
        let service = SpecService::new(Arc::new(Config::default()));

        let result = CreateSpecTool::handler(
            serde_json::json!({
                "spec_name": "x",
                "projectRoot": temp_dir.path().to_string_lossy(),
            }),
            &service,
        )
        .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("content"));
    }
}
