//! List tool definition.

use rmcp::{
    handler::server::tool::schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::core::config::Config;
use crate::domains::specs::{SpecListing, SpecService};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    decode_arguments, input_schema, spec_error_result, structured_result,
};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the list tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListSpecsParams {
    /// Project root directory; specs are stored under `{projectRoot}/.spec`.
    #[serde(rename = "projectRoot", alias = "root")]
    pub project_root: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List tool - lists every development spec of a project.
pub struct ListSpecsTool;

impl ListSpecsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_specs";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all available development specs.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(project_root = %params.project_root))]
    pub fn execute(
        params: &ListSpecsParams,
        service: &SpecService,
    ) -> Result<CallToolResult, ToolError> {
        let listing = match service.list(&params.project_root) {
            Ok(listing) => listing,
            Err(e) => return Ok(spec_error_result("list", &e)),
        };

        let entries = if listing.specs.is_empty() {
            "(no specs yet)".to_string()
        } else {
            listing
                .specs
                .iter()
                .map(|spec| format!("- {} ({})", spec.name, spec.category))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let summary = format!(
            "# Available development specs\n\nTotal: {}\n\n{}\n\nUse get_development_spec to read a spec.",
            listing.total, entries
        );
        structured_result(summary, &listing, false)
    }

    /// Decode raw arguments and execute.
    pub fn handler(arguments: Value, service: &SpecService) -> Result<CallToolResult, ToolError> {
        match decode_arguments::<ListSpecsParams>(Self::NAME, arguments, service.config()) {
            Ok(params) => Self::execute(&params, service),
            Err(result) => Ok(result),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(config: &Config) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: input_schema::<ListSpecsParams>(config),
            annotations: None,
            output_schema: Some(schema_for_type::<SpecListing>().into()),
            icons: None,
            meta: None,
            title: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
