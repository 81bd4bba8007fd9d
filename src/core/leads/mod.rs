//! Lead capture: waitlist signups and contact submissions
//!
//! The wire payloads and their validation live here and compile for both the
//! server and the browser. Server-only parts:
//! - `api` - axum handlers for `POST /api/waitlist` and `POST /api/contact`
//! - `store` - the `LeadStore` abstraction over the hosted data store
//! - `rest` - PostgREST-backed store
//! - `memory` - in-process store for local development and tests

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod memory;
#[cfg(feature = "ssr")]
pub mod rest;
#[cfg(feature = "ssr")]
pub mod store;

#[cfg(feature = "ssr")]
pub use api::{LeadApiError, LeadApiState, leads_router};
#[cfg(feature = "ssr")]
pub use memory::MemoryLeadStore;
#[cfg(feature = "ssr")]
pub use rest::PostgrestStore;
#[cfg(feature = "ssr")]
pub use store::{LeadStore, StoreError, open_store};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::validation::{
    LeadValidationError, MAX_MESSAGE_LENGTH, MAX_ORGANIZATION_LENGTH, is_valid_email,
    optional_text, source_or_default, validate_email, validate_name,
};

pub const WAITLIST_ENDPOINT: &str = "/api/waitlist";
pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Source tag used when a waitlist signup does not name one
pub const DEFAULT_WAITLIST_SOURCE: &str = "landing";
/// Source tag used when a contact submission does not name one
pub const DEFAULT_CONTACT_SOURCE: &str = "contact";

// ============================================================================
// Wire payloads
// ============================================================================

/// Body of `POST /api/waitlist`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaitlistRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// Body of `POST /api/contact`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Success acknowledgment: `{ "ok": true }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Error body returned by the lead endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

// ============================================================================
// Validated leads
// ============================================================================

/// A waitlist signup that passed server-side validation
#[derive(Debug, Clone, PartialEq)]
pub struct WaitlistLead {
    /// Trimmed and lowercased; the uniqueness key
    pub email: String,
    pub source: String,
    pub metadata: Map<String, Value>,
}

/// A contact submission that passed server-side validation
#[derive(Debug, Clone, PartialEq)]
pub struct ContactLead {
    pub name: String,
    pub email: String,
    pub organization: Option<String>,
    pub message: Option<String>,
    pub source: String,
}

impl WaitlistRequest {
    /// Validate and normalize the payload
    pub fn validate(self) -> Result<WaitlistLead, LeadValidationError> {
        let email = validate_email(self.email.as_deref())?.to_lowercase();
        let source = source_or_default(self.source.as_deref(), DEFAULT_WAITLIST_SOURCE)?;

        Ok(WaitlistLead {
            email,
            source,
            metadata: self.metadata.unwrap_or_default(),
        })
    }
}

impl ContactRequest {
    /// Validate and normalize the payload
    ///
    /// Email is checked before name, so a payload missing both reports the email.
    pub fn validate(self) -> Result<ContactLead, LeadValidationError> {
        let email = validate_email(self.email.as_deref())?;
        let name = validate_name(self.name.as_deref())?;

        Ok(ContactLead {
            name,
            email,
            organization: optional_text(
                "Organization",
                self.organization.as_deref(),
                MAX_ORGANIZATION_LENGTH,
            )?,
            message: optional_text("Message", self.message.as_deref(), MAX_MESSAGE_LENGTH)?,
            source: source_or_default(self.source.as_deref(), DEFAULT_CONTACT_SOURCE)?,
        })
    }
}

// ============================================================================
// Client-side preparation
// ============================================================================

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const MISSING_NAME_MESSAGE: &str = "Please enter your name.";

/// Why a form refused to submit before touching the network
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// The honeypot field was filled in
    Bot,
    /// A field failed validation; the message is shown next to the input
    Field(String),
}

/// Whether the waitlist form has enough input to enable its submit button
pub fn waitlist_submittable(email: &str) -> bool {
    is_valid_email(email.trim())
}

/// Whether the contact form has enough input to enable its submit button
pub fn contact_submittable(name: &str, email: &str) -> bool {
    is_valid_email(email.trim()) && !name.trim().is_empty()
}

/// Build the waitlist payload from raw form input
pub fn prepare_waitlist(email: &str, honeypot: &str) -> Result<WaitlistRequest, FormError> {
    if !honeypot.is_empty() {
        return Err(FormError::Bot);
    }

    let email = email.trim();
    if !is_valid_email(email) {
        return Err(FormError::Field(INVALID_EMAIL_MESSAGE.to_string()));
    }

    Ok(WaitlistRequest {
        email: Some(email.to_string()),
        source: Some(DEFAULT_WAITLIST_SOURCE.to_string()),
        metadata: None,
    })
}

/// Raw contact form input
#[derive(Debug, Clone, Default)]
pub struct ContactInput<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub organization: &'a str,
    pub message: &'a str,
    pub honeypot: &'a str,
}

/// Build the contact payload from raw form input
pub fn prepare_contact(input: ContactInput<'_>) -> Result<ContactRequest, FormError> {
    if !input.honeypot.is_empty() {
        return Err(FormError::Bot);
    }

    let email = input.email.trim();
    let name = input.name.trim();

    if !is_valid_email(email) {
        return Err(FormError::Field(INVALID_EMAIL_MESSAGE.to_string()));
    }
    if name.is_empty() {
        return Err(FormError::Field(MISSING_NAME_MESSAGE.to_string()));
    }

    let non_empty = |value: &str| {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    };

    Ok(ContactRequest {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        organization: non_empty(input.organization),
        message: non_empty(input.message),
        source: Some(DEFAULT_CONTACT_SOURCE.to_string()),
    })
}
