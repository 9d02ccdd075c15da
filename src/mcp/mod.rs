//! Model Context Protocol (MCP) server implementation.
//!
//! This module provides an MCP server that exposes glossa functionality to AI assistants
//! like Claude Desktop. The server implements the MCP specification for tool calling.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific type definitions

mod server;
pub mod types;

pub use server::{GlossaMcpServer, run_server};
