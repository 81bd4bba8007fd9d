//! Database models for lead capture
//!
//! Records are created once by the server handlers and never updated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::leads::{ContactLead, WaitlistLead};

pub const WAITLIST_TABLE: &str = "waitlist";
pub const CONTACT_TABLE: &str = "contact_submissions";

// ============================================================================
// Waitlist Model
// ============================================================================

/// Row of the `waitlist` table, unique on `email`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub email: String,
    pub source: String,
    pub metadata: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl WaitlistEntry {
    pub fn new(lead: WaitlistLead, created_at: DateTime<Utc>) -> Self {
        Self {
            email: lead.email,
            source: lead.source,
            metadata: lead.metadata,
            created_at,
        }
    }
}

// ============================================================================
// Contact Model
// ============================================================================

/// Row of the `contact_submissions` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub organization: Option<String>,
    pub message: Option<String>,
    pub source: String,
    pub metadata: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn new(lead: ContactLead, created_at: DateTime<Utc>) -> Self {
        Self {
            name: lead.name,
            email: lead.email,
            organization: lead.organization,
            message: lead.message,
            source: lead.source,
            metadata: Map::new(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waitlist_entry_serialization() {
        let created_at = DateTime::parse_from_rfc3339("2025-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let entry = WaitlistEntry::new(
            WaitlistLead {
                email: "ada@example.com".into(),
                source: "landing".into(),
                metadata: Map::new(),
            },
            created_at,
        );

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["source"], "landing");
        assert_eq!(json["metadata"], serde_json::json!({}));
        assert_eq!(json["created_at"], "2025-03-01T12:00:00Z");
    }

    #[test]
    fn test_contact_submission_has_empty_metadata() {
        let submission = ContactSubmission::new(
            ContactLead {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                organization: None,
                message: Some("Hello".into()),
                source: "contact".into(),
            },
            Utc::now(),
        );

        assert!(submission.metadata.is_empty());
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json["organization"].is_null());
        assert_eq!(json["message"], "Hello");
    }
}
