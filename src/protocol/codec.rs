//! Line codec for single JSON-RPC envelopes.

use super::request::JsonRpcRequest;
use super::response::{JsonRpcResponse, INTERNAL_ERROR};

/// A record that is not a JSON-RPC request envelope.
///
/// Callers skip the record; there is no id to answer.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("empty record")]
    Empty,
    #[error("malformed envelope: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("envelope is not a JSON object")]
    NotAnObject,
}

/// Decode one framed record (newline already removed or not) into a request.
pub fn decode(record: &[u8]) -> Result<JsonRpcRequest, DecodeError> {
    let trimmed = record.trim_ascii();
    if trimmed.is_empty() {
        return Err(DecodeError::Empty);
    }
    // Derived struct decoding also takes arrays positionally; envelopes are objects only.
    let value: serde_json::Value = serde_json::from_slice(trimmed)?;
    if !value.is_object() {
        return Err(DecodeError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}

/// Encode a response as a single JSON line, without the trailing newline.
///
/// Never fails: if the envelope cannot be serialized, an internal-error frame
/// carrying the same id is produced instead.
pub fn encode(resp: &JsonRpcResponse) -> String {
    match serde_json::to_string(resp) {
        Ok(out) => out,
        Err(e) => {
            tracing::error!("Response serialization failed: {e}");
            let mut frame = serde_json::json!({
                "jsonrpc": "2.0",
                "error": {
                    "code": INTERNAL_ERROR,
                    "message": "Internal error: marshal response failed"
                }
            });
            if let Some(id) = resp.id.as_ref().and_then(|id| serde_json::to_value(id).ok()) {
                frame["id"] = id;
            }
            frame.to_string()
        }
    }
}
