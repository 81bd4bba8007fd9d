//! Lead store abstraction
//!
//! Handlers receive the store as an explicit dependency through
//! `LeadApiState`, so tests can swap in a fake without touching the process
//! environment.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::core::config::{Config, StoreBackend};
use crate::core::db::models::{ContactSubmission, WaitlistEntry};
use crate::core::db::pool::{DbError, create_pool, health_check};
use crate::core::db::repositories::LeadRepository;
use crate::core::leads::memory::MemoryLeadStore;
use crate::core::leads::rest::PostgrestStore;

/// Fallback text when a backend fails without saying why
pub const UNKNOWN_STORE_FAILURE: &str = "Store operation failed";

/// Errors reported by a lead store backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The hosted API answered with a non-success status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("{0}")]
    Unavailable(String),
}

impl StoreError {
    /// Human-readable failure text, never empty
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_STORE_FAILURE.to_string()
        } else {
            message
        }
    }
}

/// Persistence for lead-capture records
///
/// Both operations write exactly one record or fail without side effects.
/// Neither retries.
pub trait LeadStore: Send + Sync {
    /// Insert a waitlist entry; an existing entry with the same email is left
    /// untouched and the call still succeeds
    fn upsert_waitlist(&self, entry: WaitlistEntry) -> BoxFuture<'_, Result<(), StoreError>>;

    /// Insert a contact submission
    fn insert_contact(&self, submission: ContactSubmission)
    -> BoxFuture<'_, Result<(), StoreError>>;

    /// Short backend label for logs
    fn backend_name(&self) -> &'static str;
}

/// Construct the store the configuration asks for
///
/// A PostgreSQL store is health-checked before it is handed out.
pub async fn open_store(config: &Config) -> Result<Arc<dyn LeadStore>, DbError> {
    match config.store_backend() {
        StoreBackend::Postgres => {
            let db_config = config.db_config().ok_or(DbError::MissingDatabaseUrl)?;
            let pool = create_pool(&db_config).await?;
            health_check(&pool).await?;
            Ok(Arc::new(LeadRepository::new(pool)))
        }
        StoreBackend::Postgrest => {
            let base_url = config.supabase_url.clone().unwrap_or_default();
            let key = config.supabase_service_role_key.clone().unwrap_or_default();
            Ok(Arc::new(PostgrestStore::new(base_url, key)))
        }
        StoreBackend::Memory => {
            tracing::warn!("No lead store configured, submissions are kept in memory only");
            Ok(Arc::new(MemoryLeadStore::new()))
        }
    }
}
