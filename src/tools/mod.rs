pub mod registry;
pub mod two_sum;

pub use registry::{InvocationError, RegistryError, Tool, ToolDefinition, ToolRegistry};
pub use two_sum::TwoSumTool;
