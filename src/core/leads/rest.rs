//! PostgREST-backed lead store
//!
//! Talks to a hosted Postgres REST interface with a service-role key. The
//! key stays on the server and is sent as both the `apikey` header and a
//! bearer token.

use futures::future::BoxFuture;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::core::db::models::{CONTACT_TABLE, ContactSubmission, WAITLIST_TABLE, WaitlistEntry};
use crate::core::leads::store::{LeadStore, StoreError};

const PREFER_IGNORE_DUPLICATES: &str = "resolution=ignore-duplicates,return=minimal";
const PREFER_MINIMAL: &str = "return=minimal";

/// Error body returned by PostgREST
#[derive(Debug, Default, Deserialize)]
struct PostgrestErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

#[derive(Clone)]
pub struct PostgrestStore {
    client: Client,
    base_url: String,
    service_key: String,
}

impl PostgrestStore {
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url, service_key)
    }

    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        service_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
        }
    }

    /// REST URL for a table
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    async fn post_row<T: Serialize>(
        &self,
        table: &str,
        row: &T,
        prefer: &str,
        query: &[(&str, &str)],
    ) -> Result<(), StoreError> {
        let response = self
            .client
            .post(self.table_url(table))
            .query(query)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", prefer)
            .json(row)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        Err(rejection(response).await)
    }
}

/// Turn a non-success response into a store error carrying the API's text
async fn rejection(response: Response) -> StoreError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    StoreError::Rejected {
        status: status.as_u16(),
        message: error_message(status, &body),
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    let parsed: PostgrestErrorBody = serde_json::from_str(body).unwrap_or_default();

    [parsed.message, parsed.error, parsed.hint]
        .into_iter()
        .flatten()
        .find(|text| !text.trim().is_empty())
        .unwrap_or_else(|| status.to_string())
}

impl LeadStore for PostgrestStore {
    fn upsert_waitlist(&self, entry: WaitlistEntry) -> BoxFuture<'_, Result<(), StoreError>> {
        Box::pin(async move {
            self.post_row(
                WAITLIST_TABLE,
                &entry,
                PREFER_IGNORE_DUPLICATES,
                &[("on_conflict", "email")],
            )
            .await
        })
    }

    fn insert_contact(
        &self,
        submission: ContactSubmission,
    ) -> BoxFuture<'_, Result<(), StoreError>> {
        Box::pin(async move {
            self.post_row(CONTACT_TABLE, &submission, PREFER_MINIMAL, &[])
                .await
        })
    }

    fn backend_name(&self) -> &'static str {
        "postgrest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let store = PostgrestStore::new("https://project.example.co/", "key");
        assert_eq!(
            store.table_url("waitlist"),
            "https://project.example.co/rest/v1/waitlist"
        );
    }

    #[test]
    fn test_error_message_prefers_message_field() {
        let body = r#"{"code":"42P01","message":"relation \"public.waitlist\" does not exist","hint":null}"#;
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, body),
            "relation \"public.waitlist\" does not exist"
        );
    }

    #[test]
    fn test_error_message_uses_error_then_hint() {
        assert_eq!(
            error_message(StatusCode::UNAUTHORIZED, r#"{"error":"Invalid API key"}"#),
            "Invalid API key"
        );
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"message":"","hint":"check column"}"#),
            "check column"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>"),
            "502 Bad Gateway"
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let store = PostgrestStore::new("http://127.0.0.1:9", "key");
        let result = store
            .insert_contact(ContactSubmission {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                organization: None,
                message: None,
                source: "contact".into(),
                metadata: Default::default(),
                created_at: chrono::Utc::now(),
            })
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));
        assert!(!err.message().is_empty());
    }
}
