use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{json, Value};

use super::registry::{InvocationError, Tool, ToolDefinition};
use crate::protocol::ToolResult;

pub const NAME: &str = "two_sum";

/// Arguments accepted by `two_sum`, matching its input schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TwoSumArgs {
    pub nums: Vec<i64>,
    pub target: i64,
}

/// Find the pair of positions whose values sum to `target`.
///
/// Single pass over `nums` keeping value -> index of values already seen.
/// The returned pair has the smallest possible second index, and an element
/// never pairs with itself since it is recorded only after its lookup.
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    for (i, &v) in nums.iter().enumerate() {
        // An overflowing complement cannot be in the input.
        if let Some(j) = target.checked_sub(v).and_then(|want| seen.get(&want)) {
            return Some((*j, i));
        }
        seen.entry(v).or_insert(i);
    }
    None
}

/// The bundled `two_sum` tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoSumTool;

impl TwoSumTool {
    pub fn input_schema() -> Value {
        json!({
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "nums": {
                    "type": "array",
                    "items": { "type": "integer" },
                    "description": "Integer array to search"
                },
                "target": {
                    "type": "integer",
                    "description": "Target sum"
                }
            },
            "required": ["nums", "target"]
        })
    }

    pub fn output_schema() -> Value {
        json!({
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "indices": {
                    "type": "array",
                    "items": { "type": "integer" },
                    "minItems": 2,
                    "maxItems": 2,
                    "description": "The two indices whose values sum to the target"
                }
            },
            "required": ["indices"]
        })
    }
}

impl Tool for TwoSumTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: NAME.to_string(),
            title: Some("Two Sum".to_string()),
            description: Some(
                "Return the indices of two array elements whose values sum to the target".to_string(),
            ),
            input_schema: Self::input_schema(),
            output_schema: Some(Self::output_schema()),
        }
    }

    fn call(&self, arguments: Value) -> Result<ToolResult, InvocationError> {
        let args: TwoSumArgs = serde_json::from_value(arguments)
            .map_err(|e| InvocationError::invalid_arguments(NAME, e))?;

        match two_sum(&args.nums, args.target) {
            Some((i, j)) => Ok(ToolResult::structured(
                format!("indices: [{i},{j}]"),
                json!({ "indices": [i, j] }),
            )),
            None => {
                tracing::debug!(len = args.nums.len(), target = args.target, "two_sum found no pair");
                Ok(ToolResult::error("No two indices have values summing to the target"))
            }
        }
    }
}
