//! Business logic services layer

pub mod audit_service;
pub mod listing_service;

pub use audit_service::AuditService;
pub use listing_service::ListingService;
