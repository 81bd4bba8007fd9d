//! In-process lead store
//!
//! Used when no hosted backend is configured (local development) and as the
//! default store in tests. Contents are lost on restart.

use std::sync::Arc;
use std::sync::Mutex;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use futures::future::BoxFuture;

use crate::core::db::models::{ContactSubmission, WaitlistEntry};
use crate::core::leads::store::{LeadStore, StoreError};

#[derive(Clone, Default)]
pub struct MemoryLeadStore {
    waitlist: Arc<DashMap<String, WaitlistEntry>>,
    contacts: Arc<Mutex<Vec<ContactSubmission>>>,
}

impl MemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waitlist_len(&self) -> usize {
        self.waitlist.len()
    }

    pub fn waitlist_entry(&self, email: &str) -> Option<WaitlistEntry> {
        self.waitlist.get(email).map(|entry| entry.clone())
    }

    pub fn contacts(&self) -> Vec<ContactSubmission> {
        self.contacts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl LeadStore for MemoryLeadStore {
    fn upsert_waitlist(&self, entry: WaitlistEntry) -> BoxFuture<'_, Result<(), StoreError>> {
        // First write wins, matching ON CONFLICT DO NOTHING
        if let Entry::Vacant(slot) = self.waitlist.entry(entry.email.clone()) {
            slot.insert(entry);
        }
        Box::pin(async { Ok(()) })
    }

    fn insert_contact(
        &self,
        submission: ContactSubmission,
    ) -> BoxFuture<'_, Result<(), StoreError>> {
        let result = self
            .contacts
            .lock()
            .map(|mut contacts| contacts.push(submission))
            .map_err(|_| StoreError::Unavailable("contact store lock poisoned".into()));
        Box::pin(async move { result })
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
