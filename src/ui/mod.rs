pub mod common;
pub mod icon;
#[cfg(feature = "hydrate")]
pub mod lead_client;
pub mod lead_form;
pub mod pages;

pub use icon::{Icon, icons};
pub use lead_form::{Honeypot, LeadFormState};
