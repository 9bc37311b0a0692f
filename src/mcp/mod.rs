//! Model Context Protocol (MCP) server exposing the recipe tools.

pub mod bridge;
pub mod server;
pub mod transport;

pub use server::RecipeMcpServer;
pub use transport::serve_stdio;
