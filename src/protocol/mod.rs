pub mod codec;
pub mod request;
pub mod response;

pub use codec::{decode, encode, DecodeError};
pub use request::{ClientInfo, InitializeParams, JsonRpcRequest, RpcId, ToolCallParams};
pub use response::{
    JsonRpcError, JsonRpcResponse, ToolResult, ToolResultContent, INTERNAL_ERROR, INVALID_PARAMS,
    METHOD_NOT_FOUND,
};
