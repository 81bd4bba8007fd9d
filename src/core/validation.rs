//! Validation rules for lead-capture input (emails, names, free-text fields)
//!
//! Shared by the browser form and the server handlers, so the same pattern
//! decides what counts as an email on both sides of the wire.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum length of an email address
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length of a contact name
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of an organization name
pub const MAX_ORGANIZATION_LENGTH: usize = 200;

/// Maximum length of a contact message
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// Maximum length of a source tag
pub const MAX_SOURCE_LENGTH: usize = 64;

/// Permissive `local@domain.tld` check with a TLD of at least two characters
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("email pattern is valid")
});

/// Validation error types
#[derive(Debug, Clone, PartialEq)]
pub enum LeadValidationError {
    /// Email is missing or blank
    EmailRequired,
    /// Email does not match the pattern
    InvalidEmail,
    /// Name is missing or blank
    NameRequired,
    /// A field exceeds its length limit
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

impl LeadValidationError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            LeadValidationError::EmailRequired => "EMAIL_REQUIRED",
            LeadValidationError::InvalidEmail => "INVALID_EMAIL",
            LeadValidationError::NameRequired => "NAME_REQUIRED",
            LeadValidationError::TooLong { .. } => "FIELD_TOO_LONG",
        }
    }
}

impl std::fmt::Display for LeadValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadValidationError::EmailRequired => write!(f, "Email required"),
            LeadValidationError::InvalidEmail => write!(f, "Invalid email address"),
            LeadValidationError::NameRequired => write!(f, "Name required"),
            LeadValidationError::TooLong { field, max, actual } => {
                write!(f, "{} is too long ({} chars, max {})", field, actual, max)
            }
        }
    }
}

impl std::error::Error for LeadValidationError {}

/// Check an already-trimmed string against the email pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate a required email and return it trimmed
pub fn validate_email(raw: Option<&str>) -> Result<String, LeadValidationError> {
    let email = raw.map(str::trim).unwrap_or_default();

    if email.is_empty() {
        return Err(LeadValidationError::EmailRequired);
    }
    check_length("Email", email, MAX_EMAIL_LENGTH)?;
    if !is_valid_email(email) {
        return Err(LeadValidationError::InvalidEmail);
    }

    Ok(email.to_string())
}

/// Validate a required contact name and return it trimmed
pub fn validate_name(raw: Option<&str>) -> Result<String, LeadValidationError> {
    let name = raw.map(str::trim).unwrap_or_default();

    if name.is_empty() {
        return Err(LeadValidationError::NameRequired);
    }
    check_length("Name", name, MAX_NAME_LENGTH)?;

    Ok(name.to_string())
}

/// Trim an optional free-text field; blank values become `None`
pub fn optional_text(
    field: &'static str,
    raw: Option<&str>,
    max: usize,
) -> Result<Option<String>, LeadValidationError> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => {
            check_length(field, value, max)?;
            Ok(Some(value.to_string()))
        }
        _ => Ok(None),
    }
}

/// Resolve a source tag, falling back to `default` when absent or blank
pub fn source_or_default(
    raw: Option<&str>,
    default: &str,
) -> Result<String, LeadValidationError> {
    Ok(optional_text("Source", raw, MAX_SOURCE_LENGTH)?.unwrap_or_else(|| default.to_string()))
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), LeadValidationError> {
    let actual = value.chars().count();
    if actual > max {
        Err(LeadValidationError::TooLong { field, max, actual })
    } else {
        Ok(())
    }
}
