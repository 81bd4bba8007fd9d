//! Lead-capture domain: payloads, validation, submission flow and storage

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod db;
pub mod leads;
pub mod submission;
pub mod validation;
