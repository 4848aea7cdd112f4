//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between the
//! repository, the normalizer, and the dispatcher. They provide a clean
//! boundary between the MCP handlers and the data access layer.

mod contact_service;
mod dispatch_service;

pub use contact_service::{ContactLookupService, ContactLookupServiceImpl};
pub use dispatch_service::DispatchService;
