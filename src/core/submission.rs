//! Client-side submission flow for the lead-capture forms
//!
//! Target independent: the browser plugs in a fetch-based `LeadTransport`,
//! tests plug in a scripted one.
//!
//! Every attempt takes a `SubmissionTicket` from the form's `SubmissionGuard`.
//! Starting a newer attempt invalidates older tickets, and a settled request
//! only reaches the form state if its ticket is still current.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::LocalBoxFuture;
use serde::Serialize;

use crate::core::leads::FormError;

pub const BOT_REJECTION_MESSAGE: &str = "Something went wrong. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Form submission status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Ok,
    Error,
}

/// Outcome of a request that was not superseded
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Accepted,
    Failed(String),
}

/// Events a submission attempt emits, in order
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Blocked by client-side validation; no request was made
    FieldInvalid(String),
    /// Honeypot was filled; no request was made
    BotRejected,
    /// Request issued
    Submitting,
    /// Request settled and this attempt is still the latest one
    Settled(SubmissionOutcome),
}

/// Everything the form renders about its submission
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormStatus {
    pub status: SubmitStatus,
    pub message: Option<String>,
    pub field_error: Option<String>,
}

impl FormStatus {
    /// Apply one event to the state machine
    pub fn apply(&mut self, event: FormEvent, success_message: &str) {
        match event {
            FormEvent::FieldInvalid(error) => {
                self.field_error = Some(error);
            }
            FormEvent::BotRejected => {
                self.status = SubmitStatus::Error;
                self.message = Some(BOT_REJECTION_MESSAGE.to_string());
            }
            FormEvent::Submitting => {
                self.status = SubmitStatus::Loading;
                self.message = None;
                self.field_error = None;
            }
            FormEvent::Settled(SubmissionOutcome::Accepted) => {
                self.status = SubmitStatus::Ok;
                self.message = Some(success_message.to_string());
            }
            FormEvent::Settled(SubmissionOutcome::Failed(error)) => {
                self.status = SubmitStatus::Error;
                self.message = Some(error);
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == SubmitStatus::Loading
    }
}

// ============================================================================
// Supersession guard
// ============================================================================

/// Hands out tickets; only the most recent one is current
#[derive(Debug, Clone, Default)]
pub struct SubmissionGuard {
    generation: Arc<AtomicU64>,
}

/// Proof of one submission attempt
#[derive(Debug, Clone)]
pub struct SubmissionTicket {
    id: u64,
    generation: Arc<AtomicU64>,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new attempt, invalidating every earlier ticket
    pub fn begin(&self) -> SubmissionTicket {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        SubmissionTicket {
            id,
            generation: Arc::clone(&self.generation),
        }
    }
}

impl SubmissionTicket {
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.id
    }
}

// ============================================================================
// Transport
// ============================================================================

/// Raw HTTP reply as seen by the form
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport failure
#[derive(Debug, Clone, PartialEq)]
pub enum TransportError {
    /// Cancelled because a newer submission replaced it
    Aborted,
    /// Connectivity loss, timeout, or any other failure to get a reply
    Network(String),
}

/// Whether a browser error name means the request was cancelled
pub fn is_abort(error_name: &str) -> bool {
    error_name == "AbortError"
}

/// Sends a JSON body to a lead endpoint
///
/// Implementations cancel their own previous in-flight request when a new
/// one starts.
pub trait LeadTransport {
    fn post_json<'a>(
        &'a self,
        endpoint: &'a str,
        body: String,
    ) -> LocalBoxFuture<'a, Result<HttpReply, TransportError>>;
}

impl SubmissionOutcome {
    /// Interpret an HTTP reply
    ///
    /// Non-2xx messages come from a string `error` field. Other JSON bodies
    /// get a generic message; the status text is used only when the body is
    /// not JSON.
    pub fn from_reply(reply: &HttpReply) -> Self {
        if reply.is_success() {
            return SubmissionOutcome::Accepted;
        }

        let message = match serde_json::from_str::<serde_json::Value>(&reply.body) {
            Ok(json) => json
                .get("error")
                .and_then(serde_json::Value::as_str)
                .filter(|error| !error.is_empty())
                .unwrap_or(GENERIC_ERROR_MESSAGE)
                .to_string(),
            Err(_) if !reply.status_text.is_empty() => reply.status_text.clone(),
            Err(_) => GENERIC_ERROR_MESSAGE.to_string(),
        };

        SubmissionOutcome::Failed(message)
    }
}

/// Run one submission attempt and report its progress through `emit`
///
/// A prepared payload that failed client checks never reaches the transport.
/// If a newer attempt starts before this one settles, the result is dropped
/// without emitting anything.
pub async fn submit_form<T, P, E>(
    transport: &T,
    guard: &SubmissionGuard,
    endpoint: &str,
    prepared: Result<P, FormError>,
    mut emit: E,
) where
    T: LeadTransport + ?Sized,
    P: Serialize,
    E: FnMut(FormEvent),
{
    let payload = match prepared {
        Ok(payload) => payload,
        Err(FormError::Bot) => return emit(FormEvent::BotRejected),
        Err(FormError::Field(error)) => return emit(FormEvent::FieldInvalid(error)),
    };

    let body = match serde_json::to_string(&payload) {
        Ok(body) => body,
        Err(e) => {
            return emit(FormEvent::Settled(SubmissionOutcome::Failed(e.to_string())));
        }
    };

    let ticket = guard.begin();
    emit(FormEvent::Submitting);

    let result = transport.post_json(endpoint, body).await;

    if !ticket.is_current() {
        return;
    }

    let outcome = match result {
        Ok(reply) => SubmissionOutcome::from_reply(&reply),
        Err(TransportError::Aborted) => return,
        Err(TransportError::Network(_)) => {
            SubmissionOutcome::Failed(NETWORK_ERROR_MESSAGE.to_string())
        }
    };

    emit(FormEvent::Settled(outcome));
}
