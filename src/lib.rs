//! Minimal MCP server exposing a single `two_sum` tool.
//!
//! Speaks newline-delimited JSON-RPC 2.0 over stdio: `initialize`,
//! `tools/list`, and `tools/call`, one request at a time in arrival order.

pub mod config;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

pub mod schema;
