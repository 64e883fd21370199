use jsonschema::Validator;
use serde::Serialize;
use serde_json::Value;

use crate::protocol::{JsonRpcError, ToolResult};
use crate::schema::{self, SchemaError};

/// Published description of a tool, as returned by `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
    #[serde(rename = "outputSchema", skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<Value>,
}

/// A server-side computation invocable through `tools/call`.
pub trait Tool {
    fn definition(&self) -> ToolDefinition;

    /// Run the tool on arguments that already satisfy its input schema.
    fn call(&self, arguments: Value) -> Result<ToolResult, InvocationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    #[error("unknown tool {0}")]
    ToolNotFound(String),
    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },
}

impl InvocationError {
    pub fn invalid_arguments(tool: &str, reason: impl ToString) -> Self {
        Self::InvalidArguments {
            tool: tool.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Unknown tools map to method-not-found, bad arguments to invalid-params.
impl From<InvocationError> for JsonRpcError {
    fn from(err: InvocationError) -> Self {
        match err {
            InvocationError::ToolNotFound(name) => JsonRpcError::unknown_tool(&name),
            invalid @ InvocationError::InvalidArguments { .. } => {
                JsonRpcError::invalid_params(invalid.to_string())
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("tool {0} is already registered")]
    DuplicateTool(String),
    #[error("input schema for {tool} is invalid: {source}")]
    Schema {
        tool: String,
        #[source]
        source: SchemaError,
    },
}

struct Entry {
    definition: ToolDefinition,
    input_validator: Validator,
    tool: Box<dyn Tool>,
}

/// Immutable-after-startup catalog of tools, in registration order.
#[derive(Default)]
pub struct ToolRegistry {
    entries: Vec<Entry>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog this server ships with.
    pub fn with_builtin_tools() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register(Box::new(super::TwoSumTool))?;
        Ok(registry)
    }

    /// Register a tool, compiling its input schema once.
    pub fn register(&mut self, tool: Box<dyn Tool>) -> Result<(), RegistryError> {
        let definition = tool.definition();
        if self.get(&definition.name).is_some() {
            return Err(RegistryError::DuplicateTool(definition.name));
        }

        let input_validator =
            schema::compile(&definition.input_schema).map_err(|source| RegistryError::Schema {
                tool: definition.name.clone(),
                source,
            })?;

        self.entries.push(Entry {
            definition,
            input_validator,
            tool,
        });
        Ok(())
    }

    /// All tool definitions, in registration order.
    pub fn list(&self) -> Vec<ToolDefinition> {
        self.entries.iter().map(|e| e.definition.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.definition.name == name)
    }

    /// Resolve `name`, check `arguments` against its input schema, then run it.
    pub fn invoke(&self, name: &str, arguments: Option<Value>) -> Result<ToolResult, InvocationError> {
        let entry = self
            .get(name)
            .ok_or_else(|| InvocationError::ToolNotFound(name.to_string()))?;

        let arguments =
            arguments.ok_or_else(|| InvocationError::invalid_arguments(name, "missing arguments"))?;

        schema::check(&entry.input_validator, &arguments)
            .map_err(|e| InvocationError::invalid_arguments(name, e))?;

        entry.tool.call(arguments)
    }
}
