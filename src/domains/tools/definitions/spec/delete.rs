//! Delete tool definition.

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

/// Parameters for the delete tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteSpecParams {
    /// Name of the spec to delete.
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

/// Delete tool - removes a development spec.
pub struct DeleteSpecTool;

impl DeleteSpecTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_development_spec";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete an existing development spec.";

    const TEXT: OperationText<'static> = OperationText {
        done: "Deleted",
        operation: "delete",
        status: "removed",
        tip: "use list_specs to see the remaining specs.",
        suggestions: "1. Check that the spec name and category are correct\n\
                      2. Run list_specs to see which specs exist",
    };

    /// Execute the tool logic.
    #[instrument(skip_all, fields(spec_name = %params.spec_name, category = %params.category))]
    pub fn execute(
        params: &DeleteSpecParams,
        service: &SpecService,
    ) -> Result<CallToolResult, ToolError> {
        match service.delete(&params.spec_name, params.category, &params.project_root) {
            Ok(op) => operation_result(&op, &Self::TEXT),
            Err(e) => Ok(spec_error_result("delete", &e)),
        }
    }

    /// Decode raw arguments and execute.
    pub fn handler(arguments: Value, service: &SpecService) -> Result<CallToolResult, ToolError> {
        match decode_arguments::<DeleteSpecParams>(Self::NAME, arguments, service.config()) {
            Ok(params) => Self::execute(&params, service),
            Err(result) => Ok(result),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(config: &Config) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: input_schema::<DeleteSpecParams>(config),
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
