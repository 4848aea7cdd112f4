//! MCP tool handlers for the WaSend server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::domain;
use crate::services::{ContactLookupService, DispatchService};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The WaSend MCP server: compose a message, look up a recipient, and hand
/// the result off to WhatsApp (native app or wa.me fallback).
#[derive(Clone)]
pub struct WaSendServer {
    contact_service: Arc<dyn ContactLookupService>,
    dispatch_service: Arc<DispatchService>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for WaSendServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "wasend-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for dispatching WhatsApp messages - normalize phone numbers, search the address book for a recipient, preview the hand-off URI, and launch WhatsApp (native app or wa.me fallback).".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct NormalizeNumberParams {
    /// Raw phone string, with or without a + or 00 international prefix
    raw: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchContactsParams {
    /// Free-text filter matched against display names and numbers
    query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct MessageParams {
    /// Country calling code; omit to use the configured default
    #[serde(default)]
    country_code: Option<String>,
    /// National number, or a fully qualified +<code><number>
    phone_number: String,
    /// Message body, sent verbatim
    message: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Tool router implementation
#[tool_router]
impl WaSendServer {
    /// Create a new WaSend MCP server.
    pub fn new(
        contact_service: Arc<dyn ContactLookupService>,
        dispatch_service: Arc<DispatchService>,
    ) -> Self {
        Self {
            contact_service,
            dispatch_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Split a raw phone string into country code and national number.
    #[tool(
        description = "Split a raw phone string into a country calling code and national number. Recognizes + and 00 international prefixes; without one, the whole input is returned as the national number."
    )]
    async fn normalize_number(
        &self,
        params: Parameters<NormalizeNumberParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let parts = domain::split(&params.raw);

        let response = serde_json::json!({
            "input": params.raw,
            "country_code": parts.country_code,
            "national_number": parts.national_number,
            "has_country_code": parts.has_country_code,
        });

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&response).map_err(to_mcp_error)?,
        )]))
    }

    /// Search the address book for contacts matching a free-text query.
    #[tool(
        description = "Search the address book with a free-text query over names and numbers. Returns a deduplicated list ordered by name, each entry with its number already split into country code and national number."
    )]
    async fn search_contacts(
        &self,
        params: Parameters<SearchContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let contacts = self
            .contact_service
            .search(&params.query)
            .await
            .map_err(to_mcp_error)?;

        let response = serde_json::json!({
            "query": params.query,
            "result_count": contacts.len(),
            "contacts": contacts.iter().map(|c| {
                serde_json::json!({
                    "id": c.id,
                    "name": c.name,
                    "phone_number": c.phone_number,
                    "country_code": c.country_code,
                    "national_number": c.national_number,
                })
            }).collect::<Vec<_>>(),
        });

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&response).map_err(to_mcp_error)?,
        )]))
    }

    /// Validate a recipient and message and preview the hand-off URI.
    #[tool(
        description = "Validate a recipient and message and return the WhatsApp URI that would be launched, without launching anything. Use this to preview before send_message."
    )]
    async fn prepare_message(
        &self,
        params: Parameters<MessageParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let target = self
            .dispatch_service
            .prepare(
                params.country_code.as_deref(),
                &params.phone_number,
                &params.message,
            )
            .map_err(to_mcp_error)?;
        let uri = self.dispatch_service.route(&target).map_err(to_mcp_error)?;

        let response = serde_json::json!({
            "full_number": target.full_number,
            "uri": uri.as_str(),
            "native": uri.is_native(),
        });

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&response).map_err(to_mcp_error)?,
        )]))
    }

    /// Validate, route, and launch a WhatsApp message hand-off.
    #[tool(
        description = "Validate a recipient and message, then open WhatsApp (installed app, else wa.me in the browser) with both pre-filled. The hand-off is assumed successful once the platform accepts the URI; delivery is not confirmed."
    )]
    async fn send_message(
        &self,
        params: Parameters<MessageParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: send_message called");
        tracing::debug!(
            "Parameters: country_code={:?}, number_len={}, message_len={}",
            params.country_code,
            params.phone_number.len(),
            params.message.len()
        );

        let uri = self
            .dispatch_service
            .send(
                params.country_code.as_deref(),
                &params.phone_number,
                &params.message,
            )
            .map_err(|e| {
                tracing::error!("Dispatch failed: {:?}", e);
                to_mcp_error(e)
            })?;

        let response = serde_json::json!({
            "status": "launched",
            "uri": uri.as_str(),
            "native": uri.is_native(),
        });

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&response).map_err(to_mcp_error)?,
        )]))
    }
}
