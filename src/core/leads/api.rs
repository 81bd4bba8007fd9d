//! Lead capture API endpoints
//!
//! Provides REST API endpoints for lead capture:
//! - POST /api/waitlist - Join the waitlist (idempotent on email)
//! - POST /api/contact - Send a contact submission
//!
//! Any other method on these paths answers 405 with `Allow: POST`. The
//! endpoints are unauthenticated and insert-only.

use std::any::Any;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tower_http::catch_panic::CatchPanicLayer;

use crate::core::db::models::{ContactSubmission, WaitlistEntry};
use crate::core::leads::store::{LeadStore, StoreError};
use crate::core::leads::{
    CONTACT_ENDPOINT, ContactRequest, ErrorBody, OkResponse, WAITLIST_ENDPOINT, WaitlistRequest,
};
use crate::core::validation::LeadValidationError;

/// Message for failures nobody anticipated
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Lead API state containing the store
#[derive(Clone)]
pub struct LeadApiState {
    pub store: Arc<dyn LeadStore>,
}

impl LeadApiState {
    pub fn new(store: impl LeadStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn with_store(store: Arc<dyn LeadStore>) -> Self {
        Self { store }
    }
}

/// Lead API error types
#[derive(Debug, thiserror::Error)]
pub enum LeadApiError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    InvalidPayload(String),

    #[error("{0}")]
    Validation(#[from] LeadValidationError),

    #[error("{}", .0.message())]
    Store(#[from] StoreError),
}

impl From<JsonRejection> for LeadApiError {
    fn from(rejection: JsonRejection) -> Self {
        LeadApiError::InvalidPayload(rejection.body_text())
    }
}

impl IntoResponse for LeadApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            LeadApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED"),
            LeadApiError::InvalidPayload(_) => (StatusCode::BAD_REQUEST, "INVALID_PAYLOAD"),
            LeadApiError::Validation(err) => (StatusCode::BAD_REQUEST, err.code()),
            LeadApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR"),
        };

        let body = ErrorBody {
            error: self.to_string(),
            code: Some(code.to_string()),
        };

        let mut response = (status, Json(body)).into_response();
        if matches!(self, LeadApiError::MethodNotAllowed) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}

/// Create the lead API router
pub fn leads_router(state: LeadApiState) -> Router {
    Router::new()
        .route(
            WAITLIST_ENDPOINT,
            post(waitlist_handler).fallback(method_not_allowed),
        )
        .route(
            CONTACT_ENDPOINT,
            post(contact_handler).fallback(method_not_allowed),
        )
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// POST /api/waitlist
/// Add an email to the waitlist; re-submitting a known email succeeds
#[tracing::instrument(name = "Join waitlist", skip_all)]
async fn waitlist_handler(
    State(state): State<LeadApiState>,
    payload: Result<Json<WaitlistRequest>, JsonRejection>,
) -> Result<Json<OkResponse>, LeadApiError> {
    let Json(request) = payload.inspect_err(log_rejection)?;
    let lead = request.validate().inspect_err(log_invalid)?;

    tracing::info!(
        "Waitlist signup from domain {} (source: {})",
        email_domain(&lead.email),
        lead.source
    );

    let entry = WaitlistEntry::new(lead, Utc::now());
    state
        .store
        .upsert_waitlist(entry)
        .await
        .inspect_err(|e| log_store_failure(state.store.as_ref(), e))?;

    Ok(Json(OkResponse::ok()))
}

/// POST /api/contact
/// Record a contact submission
#[tracing::instrument(name = "Submit contact form", skip_all)]
async fn contact_handler(
    State(state): State<LeadApiState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<OkResponse>, LeadApiError> {
    let Json(request) = payload.inspect_err(log_rejection)?;
    let lead = request.validate().inspect_err(log_invalid)?;

    tracing::info!(
        "Contact submission from domain {} (source: {})",
        email_domain(&lead.email),
        lead.source
    );

    let submission = ContactSubmission::new(lead, Utc::now());
    state
        .store
        .insert_contact(submission)
        .await
        .inspect_err(|e| log_store_failure(state.store.as_ref(), e))?;

    Ok(Json(OkResponse::ok()))
}

async fn method_not_allowed() -> LeadApiError {
    LeadApiError::MethodNotAllowed
}

/// Convert a panic anywhere below the router into a generic 500
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Lead handler panicked: {}", detail);

    let body = ErrorBody {
        error: SERVER_ERROR_MESSAGE.to_string(),
        code: Some("INTERNAL_ERROR".to_string()),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

fn log_rejection(rejection: &JsonRejection) {
    tracing::warn!("Rejected lead payload: {}", rejection.body_text());
}

fn log_invalid(err: &LeadValidationError) {
    tracing::warn!("Lead validation failed: {}", err);
}

fn log_store_failure(store: &dyn LeadStore, err: &StoreError) {
    tracing::error!("Lead store ({}) failed: {}", store.backend_name(), err.message());
}

/// Domain part of an email, for logs that must not carry the address
fn email_domain(email: &str) -> &str {
    email.rsplit_once('@').map(|(_, domain)| domain).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::leads::MemoryLeadStore;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use futures::future::BoxFuture;
    use tower::ServiceExt;

    /// Store whose every operation fails with the given message
    struct FailingStore(&'static str);

    impl LeadStore for FailingStore {
        fn upsert_waitlist(&self, _: WaitlistEntry) -> BoxFuture<'_, Result<(), StoreError>> {
            let message = self.0.to_string();
            Box::pin(async move {
                Err(StoreError::Rejected {
                    status: 500,
                    message,
                })
            })
        }

        fn insert_contact(
            &self,
            _: ContactSubmission,
        ) -> BoxFuture<'_, Result<(), StoreError>> {
            let message = self.0.to_string();
            Box::pin(async move {
                Err(StoreError::Rejected {
                    status: 500,
                    message,
                })
            })
        }

        fn backend_name(&self) -> &'static str {
            "failing"
        }
    }

    /// Store that panics mid-request
    struct PanickingStore;

    impl LeadStore for PanickingStore {
        fn upsert_waitlist(&self, _: WaitlistEntry) -> BoxFuture<'_, Result<(), StoreError>> {
            panic!("connection state corrupted")
        }

        fn insert_contact(
            &self,
            _: ContactSubmission,
        ) -> BoxFuture<'_, Result<(), StoreError>> {
            panic!("connection state corrupted")
        }

        fn backend_name(&self) -> &'static str {
            "panicking"
        }
    }

    fn create_test_app(store: impl LeadStore + 'static) -> Router {
        leads_router(LeadApiState::new(store))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_waitlist_success() {
        let store = MemoryLeadStore::new();
        let app = create_test_app(store.clone());

        let response = app
            .oneshot(post_json(
                "/api/waitlist",
                r#"{"email":"Ada@Example.com","source":"landing","metadata":{"ref":"hn"}}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "ok": true }));

        let entry = store.waitlist_entry("ada@example.com").unwrap();
        assert_eq!(entry.source, "landing");
        assert_eq!(entry.metadata["ref"], "hn");
    }

    #[tokio::test]
    async fn test_waitlist_duplicate_email_is_idempotent() {
        let store = MemoryLeadStore::new();
        let app = create_test_app(store.clone());

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(post_json("/api/waitlist", r#"{"email":"ada@example.com"}"#))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        assert_eq!(store.waitlist_len(), 1);
    }

    #[tokio::test]
    async fn test_waitlist_missing_email() {
        let app = create_test_app(MemoryLeadStore::new());

        let response = app
            .oneshot(post_json("/api/waitlist", r#"{"source":"landing"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Email required");
        assert_eq!(body["code"], "EMAIL_REQUIRED");
    }

    #[tokio::test]
    async fn test_waitlist_invalid_email() {
        let store = MemoryLeadStore::new();
        let app = create_test_app(store.clone());

        let response = app
            .oneshot(post_json("/api/waitlist", r#"{"email":"ada@example"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_EMAIL");
        assert_eq!(store.waitlist_len(), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = create_test_app(MemoryLeadStore::new());

        let response = app
            .oneshot(post_json("/api/waitlist", "email=ada@example.com"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "INVALID_PAYLOAD");
        assert!(!body["error"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_object_metadata_is_bad_request() {
        let app = create_test_app(MemoryLeadStore::new());

        let response = app
            .oneshot(post_json(
                "/api/waitlist",
                r#"{"email":"ada@example.com","metadata":[1,2]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_contact_success() {
        let store = MemoryLeadStore::new();
        let app = create_test_app(store.clone());

        let response = app
            .oneshot(post_json(
                "/api/contact",
                r#"{"name":"Ada","email":"ada@example.com","organization":"","message":"Hi","source":"contact"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let contacts = store.contacts();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Ada");
        assert_eq!(contacts[0].organization, None);
        assert_eq!(contacts[0].message.as_deref(), Some("Hi"));
        assert!(contacts[0].metadata.is_empty());
    }

    #[tokio::test]
    async fn test_contact_empty_name_rejected() {
        let store = MemoryLeadStore::new();
        let app = create_test_app(store.clone());

        let response = app
            .oneshot(post_json(
                "/api/contact",
                r#"{"name":"","email":"ada@example.com"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Name required");
        assert!(store.contacts().is_empty());
    }

    #[tokio::test]
    async fn test_contact_missing_email_reported_first() {
        let app = create_test_app(MemoryLeadStore::new());

        let response = app
            .oneshot(post_json("/api/contact", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Email required");
    }

    #[tokio::test]
    async fn test_contact_duplicates_are_kept() {
        let store = MemoryLeadStore::new();
        let app = create_test_app(store.clone());
        let body = r#"{"name":"Ada","email":"ada@example.com"}"#;

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(post_json("/api/contact", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        assert_eq!(store.contacts().len(), 2);
    }

    #[tokio::test]
    async fn test_get_is_method_not_allowed() {
        for uri in ["/api/waitlist", "/api/contact"] {
            let app = create_test_app(MemoryLeadStore::new());

            let response = app
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST");
            assert_eq!(body_json(response).await["error"], "Method Not Allowed");
        }
    }

    #[tokio::test]
    async fn test_store_failure_is_server_error() {
        let app = create_test_app(FailingStore("permission denied for table waitlist"));

        let response = app
            .oneshot(post_json("/api/waitlist", r#"{"email":"ada@example.com"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "permission denied for table waitlist");
        assert_eq!(body["code"], "STORE_ERROR");
    }

    #[tokio::test]
    async fn test_store_failure_without_text_still_has_message() {
        let app = create_test_app(FailingStore(""));

        let response = app
            .oneshot(post_json(
                "/api/contact",
                r#"{"name":"Ada","email":"ada@example.com"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["error"],
            crate::core::leads::store::UNKNOWN_STORE_FAILURE
        );
    }

    #[tokio::test]
    async fn test_panic_becomes_generic_server_error() {
        let app = create_test_app(PanickingStore);

        let response = app
            .oneshot(post_json("/api/waitlist", r#"{"email":"ada@example.com"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], SERVER_ERROR_MESSAGE);
    }

    #[test]
    fn test_email_domain() {
        assert_eq!(email_domain("ada@example.com"), "example.com");
        assert_eq!(email_domain("no-at-sign"), "");
    }
}
