use serde::Serialize;
use serde_json::{json, Value};

use crate::protocol::InitializeParams;

/// Protocol revision this server speaks, independent of what the client asks for.
pub const PROTOCOL_VERSION: &str = "2025-03-26";

pub const SERVER_NAME: &str = "two-sum-mcp";

const INSTRUCTIONS: &str = "This server provides a two-sum tool: given an integer array and a \
target value, it returns the two indices whose values sum to the target.";

#[derive(Debug, Clone, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: Value,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub instructions: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

/// Handle `initialize`. Always succeeds; unparseable params fall back to defaults.
pub fn handle(params: Option<&Value>) -> InitializeResult {
    let params: InitializeParams = params
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_default();

    let client = params.client_info.unwrap_or_default();
    let capabilities = params
        .capabilities
        .as_ref()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "{}".to_string());
    tracing::info!(
        client_name = client.name.as_deref().unwrap_or("unknown"),
        client_version = client.version.as_deref().unwrap_or("unknown"),
        requested_version = params.protocol_version.as_deref().unwrap_or("none"),
        client_capabilities = %capabilities,
        "client initializing"
    );

    InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: json!({
            "tools": { "listChanged": true }
        }),
        server_info: ServerInfo {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        instructions: INSTRUCTIONS.to_string(),
    }
}
