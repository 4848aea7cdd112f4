//! WaSend MCP Server - a Model Context Protocol server for composing and
//! dispatching WhatsApp messages.
//!
//! The library splits a raw phone string into country code and national
//! number, looks recipients up in an external address-book provider, and
//! hands a validated message off to WhatsApp through a native deep link or
//! the wa.me web fallback.
//!
//! # Architecture
//!
//! - **domain**: phone number normalizer and the country calling code table
//! - **models**: address-book contact records and normalized contacts
//! - **dispatch**: validation, URI construction, package probing, hand-off
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **client**: HTTP client for the address-book provider
//! - **repositories**: data access seam over the provider
//! - **services**: contact lookup and dispatch orchestration
//! - **server**: MCP protocol server

// Re-export commonly used types
pub mod client;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use client::AddressBookClient;
pub use config::Config;
pub use dispatch::{
    prepare_target, DesktopEntryProbe, DispatchTarget, PackageProbe, SystemLauncher, UriLauncher,
    WhatsAppUri, WHATSAPP_PACKAGES,
};
pub use domain::{is_valid_country_code, split, PhoneNumberParts, ValidationError};
pub use error::{AddressBookError, ConfigError, DispatchError};
pub use models::{Contact, ContactRecord};
pub use server::WaSendServer;
pub use services::{ContactLookupService, ContactLookupServiceImpl, DispatchService};
