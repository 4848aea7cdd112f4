//! WaSend MCP Server - Main entry point
//!
//! This is the main executable for the WaSend MCP Server, which exposes
//! WhatsApp message composition and dispatch over the Model Context
//! Protocol (MCP).

use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wasend_mcp_server::client::{AsyncAddressBookClient, AsyncAddressBookClientImpl};
use wasend_mcp_server::dispatch::{DesktopEntryProbe, PackageProbe, SystemLauncher, UriLauncher};
use wasend_mcp_server::repositories::{ContactRepository, HttpContactRepository};
use wasend_mcp_server::services::{
    ContactLookupService, ContactLookupServiceImpl, DispatchService,
};
use wasend_mcp_server::{AddressBookClient, Config, WaSendServer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting WaSend MCP Server with address book at: {}",
        config.address_book_url
    );

    // Initialize the address-book client and repository
    let sync_client = AddressBookClient::new(&config);
    let client = Arc::new(AsyncAddressBookClientImpl::new(sync_client))
        as Arc<dyn AsyncAddressBookClient>;
    let contact_repo = Arc::new(HttpContactRepository::new(client)) as Arc<dyn ContactRepository>;

    // Services
    let contact_service = Arc::new(ContactLookupServiceImpl::new(
        contact_repo,
        config.max_contact_results,
    )) as Arc<dyn ContactLookupService>;

    let probe = Arc::new(DesktopEntryProbe::new()) as Arc<dyn PackageProbe>;
    let launcher = Arc::new(SystemLauncher) as Arc<dyn UriLauncher>;
    let dispatch_service = Arc::new(DispatchService::new(probe, launcher, &config));

    let server = WaSendServer::new(contact_service, dispatch_service);

    info!("WaSend MCP Server initialized");
    info!(
        "Defaults: country code {}, minimum digits {}, web fallback {}",
        config.default_country_code, config.min_number_digits, config.web_fallback
    );

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    wasend_mcp_server::server::run_server(server).await?;

    info!("WaSend MCP Server shutdown complete");
    Ok(())
}
