//! Common utilities shared across the spec tools.
//!
//! Argument decoding, schema generation, and the text rendering of failures.
//! Every failure a tool can hit (bad arguments, validation, missing spec,
//! I/O) becomes a tool result with `is_error: true`, never a protocol error.

use rmcp::{
    handler::server::tool::schema_for_type,
    model::{CallToolResult, Content, JsonObject},
};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, de, de::DeserializeOwned};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, warn};

use crate::core::config::Config;
use crate::domains::specs::{Category, SpecError, SpecOperation};
use crate::domains::tools::ToolError;

/// Prefix of every failure text.
pub const FAILURE_MARKER: &str = "❌";

/// Prefix of every success text.
pub const SUCCESS_MARKER: &str = "✅";

/// Wire name of the project root argument.
pub const PROJECT_ROOT_ARG: &str = "projectRoot";

/// Accepted alias for [`PROJECT_ROOT_ARG`].
pub const PROJECT_ROOT_ALIAS: &str = "root";

/// Decode tool arguments into typed params.
///
/// A missing or null argument object is treated as `{}`. When a default
/// project root is configured and the caller gave none, it is filled in.
pub fn decode_arguments<P: DeserializeOwned>(
    tool: &str,
    arguments: Value,
    config: &Config,
) -> Result<P, CallToolResult> {
    let mut arguments = match arguments {
        Value::Null => serde_json::Map::new(),
        Value::Object(map) => map,
        other => {
            return Err(invalid_arguments(
                tool,
                &format!("arguments must be an object, got {}", other),
            ));
        }
    };

    if let Some(root) = &config.specs.default_project_root {
        let has_root = arguments.contains_key(PROJECT_ROOT_ARG)
            || arguments.contains_key(PROJECT_ROOT_ALIAS);
        if !has_root {
            arguments.insert(
                PROJECT_ROOT_ARG.to_string(),
                Value::String(root.to_string_lossy().to_string()),
            );
        }
    }

    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| invalid_arguments(tool, &e.to_string()))
}

/// Deserialize an optional category. `null` and `""` mean the default.
pub fn category_or_default<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(Category::default()),
        Some(name) => name.parse().map_err(de::Error::custom),
    }
}

/// Input schema for a params type.
///
/// With a default project root configured, `projectRoot` is no longer required.
pub fn input_schema<P: JsonSchema + 'static>(config: &Config) -> Arc<JsonObject> {
    let schema = Arc::new(schema_for_type::<P>());
    if config.specs.default_project_root.is_none() {
        return schema;
    }

    let mut schema = (*schema).clone();
    if let Some(Value::Array(required)) = schema.get_mut("required") {
        required.retain(|field| field != PROJECT_ROOT_ARG);
    }
    Arc::new(schema)
}

/// Build a result with a text summary plus structured content.
pub fn structured_result<T: Serialize>(
    summary: String,
    value: &T,
    is_error: bool,
) -> Result<CallToolResult, ToolError> {
    let structured = serde_json::to_value(value)
        .map_err(|e| ToolError::internal(format!("Failed to serialize tool output: {}", e)))?;

    Ok(CallToolResult {
        content: vec![Content::text(summary)],
        structured_content: Some(structured),
        is_error: Some(is_error),
        meta: None,
    })
}

/// Wording used to render a create/edit/delete outcome.
pub struct OperationText<'a> {
    /// Past-tense verb for the headline ("Created").
    pub done: &'a str,
    /// Operation name for the details list ("create").
    pub operation: &'a str,
    /// Resulting state for the details list ("saved").
    pub status: &'a str,
    /// Hint appended to a successful result.
    pub tip: &'a str,
    /// Numbered suggestions appended when the operation was refused.
    pub suggestions: &'a str,
}

/// Render a create/edit/delete outcome. `success: false` becomes an error result.
pub fn operation_result(
    op: &SpecOperation,
    text: &OperationText<'_>,
) -> Result<CallToolResult, ToolError> {
    if !op.success {
        warn!("{} refused: {}", text.operation, op.message);
        let summary = format!(
            "{} {}\n\n💡 Suggestions:\n{}",
            FAILURE_MARKER, op.message, text.suggestions
        );
        return structured_result(summary, op, true);
    }

    let summary = format!(
        "{} {} spec: {}\n\n📋 Spec details:\n- Name: {}\n- Category: {}\n- Operation: {}\n- Status: {}\n\n💡 Tip: {}",
        SUCCESS_MARKER,
        text.done,
        op.spec_name,
        op.spec_name,
        op.category,
        text.operation,
        text.status,
        text.tip
    );
    structured_result(summary, op, false)
}

/// Render a service error as a failed tool result.
///
/// `action` is the verb shown to the user ("get", "create", ...).
pub fn spec_error_result(action: &str, err: &SpecError) -> CallToolResult {
    if err.is_fault() {
        error!("Failed to {} spec: {}", action, err);
    } else {
        warn!("Failed to {} spec: {}", action, err);
    }

    let suggestions = match err {
        SpecError::NotFound { .. } => {
            "1. Check that the spec name is spelled correctly\n\
             2. Run list_specs to see which specs exist\n\
             3. Check that the category is correct"
        }
        SpecError::InvalidArgument(_) => {
            "1. Make sure spec_name, content and projectRoot are not empty\n\
             2. Use a plain name without path separators\n\
             3. Check the argument format against the tool schema"
        }
        SpecError::PathSecurity(_) => {
            "1. Use a projectRoot inside the directory the server allows\n\
             2. Make sure the project directory exists"
        }
        SpecError::Io { .. } => {
            "1. Check file permissions for the project's .spec directory\n\
             2. Make sure the disk is writable\n\
             3. Retry the operation"
        }
    };

    CallToolResult::error(vec![Content::text(format!(
        "{} Failed to {} development spec: {}\n\n💡 Suggestions:\n{}",
        FAILURE_MARKER, action, err, suggestions
    ))])
}

/// Render an argument decoding failure.
pub fn invalid_arguments(tool: &str, detail: &str) -> CallToolResult {
    warn!("Invalid arguments for {}: {}", tool, detail);
    CallToolResult::error(vec![Content::text(format!(
        "{} Invalid arguments for {}: {}\n\n💡 Suggestions:\n\
         1. Check the argument names against the tool schema (tools/list)\n\
         2. category must be one of: frontend, backend, mobile, design",
        FAILURE_MARKER, tool, detail
    ))])
}

/// Extract the first text block of a tool result.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}
