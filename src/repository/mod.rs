//! Database repository layer

pub mod audit_repo;
pub mod listing_repo;

pub use audit_repo::*;
pub use listing_repo::*;
