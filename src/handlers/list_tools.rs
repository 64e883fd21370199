use serde::Serialize;

use crate::tools::{ToolDefinition, ToolRegistry};

#[derive(Debug, Clone, Serialize)]
pub struct ListToolsResult {
    pub tools: Vec<ToolDefinition>,
    /// Always absent: the catalog is small and served in one page.
    #[serde(rename = "nextCursor", skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

/// Handle `tools/list`. Params, if any, are ignored.
pub fn handle(registry: &ToolRegistry) -> ListToolsResult {
    ListToolsResult {
        tools: registry.list(),
        next_cursor: None,
    }
}
