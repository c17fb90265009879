//! MCP (Model Context Protocol) server for airfreight.
//!
//! Lets AI assistants call the travel-time estimator as a tool.
//! Implements JSON-RPC 2.0 over stdio.

mod protocol;
mod server;
mod tools;

pub use server::McpServer;
pub use tools::{CargoTravelArgs, CARGO_TRAVEL_TOOL};
