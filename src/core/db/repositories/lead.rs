//! Lead repository for PostgreSQL
//!
//! Writes waitlist entries and contact submissions through SQLx.

use futures::future::BoxFuture;
use sqlx::PgPool;
use sqlx::types::Json;

use crate::core::db::models::{ContactSubmission, WaitlistEntry};
use crate::core::leads::store::{LeadStore, StoreError};

/// Lead repository for database operations
#[derive(Clone)]
pub struct LeadRepository {
    pool: PgPool,
}

impl LeadRepository {
    /// Create a new lead repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a waitlist entry unless one with the same email exists
    ///
    /// Returns whether a new row was written.
    pub async fn upsert_waitlist_entry(&self, entry: &WaitlistEntry) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO waitlist (email, source, metadata, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(&entry.email)
        .bind(&entry.source)
        .bind(Json(&entry.metadata))
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Insert a contact submission
    pub async fn insert_contact_submission(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO contact_submissions
                (name, email, organization, message, source, metadata, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.organization)
        .bind(&submission.message)
        .bind(&submission.source)
        .bind(Json(&submission.metadata))
        .bind(submission.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

impl LeadStore for LeadRepository {
    fn upsert_waitlist(&self, entry: WaitlistEntry) -> BoxFuture<'_, Result<(), StoreError>> {
        Box::pin(async move {
            let inserted = self.upsert_waitlist_entry(&entry).await?;
            if !inserted {
                tracing::debug!("Waitlist entry already present, left unchanged");
            }
            Ok(())
        })
    }

    fn insert_contact(
        &self,
        submission: ContactSubmission,
    ) -> BoxFuture<'_, Result<(), StoreError>> {
        Box::pin(async move {
            self.insert_contact_submission(&submission).await?;
            Ok(())
        })
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
