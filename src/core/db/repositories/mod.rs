//! Database repositories for lead capture
//!
//! Repositories encapsulate data access logic behind the `LeadStore` seam
//! the HTTP handlers depend on.

pub mod lead;

pub use lead::LeadRepository;
