use serde_json::Value;

use crate::protocol::{JsonRpcError, ToolCallParams, ToolResult};
use crate::tools::ToolRegistry;

/// Handle `tools/call`.
///
/// Malformed params and bad arguments are invalid-params errors, an unknown
/// tool is method-not-found. A tool that runs but finds nothing comes back as
/// `Ok` with `is_error` set.
pub fn handle(params: Option<&Value>, registry: &ToolRegistry) -> Result<ToolResult, JsonRpcError> {
    let params: ToolCallParams = match params {
        Some(v) if !v.is_object() => {
            return Err(JsonRpcError::invalid_params("tools/call params must be an object"))
        }
        Some(v) => serde_json::from_value(v.clone())
            .map_err(|e| JsonRpcError::invalid_params(format!("Invalid tools/call params: {e}")))?,
        None => return Err(JsonRpcError::invalid_params("Missing params for tools/call")),
    };

    let result = registry.invoke(&params.name, params.arguments).map_err(|e| {
        tracing::debug!(tool = %params.name, "tool call rejected: {e}");
        JsonRpcError::from(e)
    })?;

    Ok(result)
}
