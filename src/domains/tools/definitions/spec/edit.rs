//! Edit tool definition.
//!
//! Replaces the content of an existing development spec. Never creates one.

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

/// Parameters for the edit tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EditSpecParams {
    /// Spec name; the spec must already exist.
    pub spec_name: String,

    /// New spec content (markdown).
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

/// Edit tool - updates an existing development spec.
pub struct EditSpecTool;

impl EditSpecTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "edit_development_spec";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Edit an existing development spec. Only existing specs can be changed; use create_development_spec for new ones.";

    const TEXT: OperationText<'static> = OperationText {
        done: "Edited",
        operation: "edit",
        status: "updated",
        tip: "use get_development_spec to view the updated spec.",
        suggestions: "1. Check that the spec exists (edit only changes existing specs)\n\
                      2. Make sure the content is valid markdown\n\
                      3. To add a new spec, use create_development_spec",
    };

    /// Execute the tool logic.
    #[instrument(skip_all, fields(spec_name = %params.spec_name, category = %params.category))]
    pub fn execute(
        params: &EditSpecParams,
        service: &SpecService,
    ) -> Result<CallToolResult, ToolError> {
        match service.edit(
            &params.spec_name,
            &params.content,
            params.category,
            &params.project_root,
        ) {
            Ok(op) => operation_result(&op, &Self::TEXT),
            Err(e) => Ok(spec_error_result("edit", &e)),
        }
    }

    /// Decode raw arguments and execute.
    pub fn handler(arguments: Value, service: &SpecService) -> Result<CallToolResult, ToolError> {
        match decode_arguments::<EditSpecParams>(Self::NAME, arguments, service.config()) {
            Ok(params) => Self::execute(&params, service),
            Err(result) => Ok(result),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(config: &Config) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: input_schema::<EditSpecParams>(config),
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
