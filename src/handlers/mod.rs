pub mod call_tool;
pub mod initialize;
pub mod list_tools;

use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::tools::ToolRegistry;

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Every request gets a response, including ones without an id. No
/// handshake ordering is enforced: `tools/*` is served before `initialize`.
pub fn dispatch(req: &JsonRpcRequest, registry: &ToolRegistry) -> JsonRpcResponse {
    tracing::debug!(method = %req.method, id = ?req.id, "dispatching request");

    match req.method.as_str() {
        "initialize" => {
            let result = initialize::handle(req.params.as_ref());
            JsonRpcResponse::from_result(req.id.clone(), &result)
        }

        "tools/list" => {
            let result = list_tools::handle(registry);
            JsonRpcResponse::from_result(req.id.clone(), &result)
        }

        "tools/call" => match call_tool::handle(req.params.as_ref(), registry) {
            Ok(result) => JsonRpcResponse::from_result(req.id.clone(), &result),
            Err(err) => JsonRpcResponse::error(req.id.clone(), err),
        },

        _ => JsonRpcResponse::error(req.id.clone(), JsonRpcError::method_not_found(&req.method)),
    }
}
