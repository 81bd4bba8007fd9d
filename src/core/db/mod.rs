//! Database module for lead capture
//!
//! This module provides database connectivity, models, and the repository
//! that persists leads to PostgreSQL using SQLx.

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used items
pub use models::{CONTACT_TABLE, ContactSubmission, WAITLIST_TABLE, WaitlistEntry};
pub use pool::{DbConfig, DbError, create_pool, health_check};
pub use repositories::LeadRepository;
