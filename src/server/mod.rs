//! MCP server implementation for WaSend.
//!
//! This module provides the MCP protocol server that exposes message
//! composition, contact lookup, and WhatsApp dispatch to AI assistants
//! through the Model Context Protocol.

pub mod handlers;

pub use handlers::WaSendServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the WaSend MCP server with stdio transport.
///
/// This function starts the MCP server and runs it until completion.
/// It communicates via stdin/stdout using the MCP protocol.
///
/// # Arguments
/// * `server` - The configured WaSendServer instance
///
/// # Returns
/// An error if the server fails to start or encounters a fatal error
pub async fn run_server(server: WaSendServer) -> Result<()> {
    // Serve the server with stdio transport
    let service = server.serve(stdio()).await?;

    // Wait for completion
    service.waiting().await?;

    Ok(())
}
