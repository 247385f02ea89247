//! Waitlist repository
//!
//! The `email` column is unique, so a single `INSERT ... ON CONFLICT DO NOTHING`
//! both detects duplicates and stores new entries.

use sqlx::PgPool;

use crate::core::db::models::WaitlistEntry;
use crate::core::waitlist::{InsertOutcome, WaitlistError, WaitlistStore};

/// Waitlist repository for database operations
#[derive(Clone)]
pub struct WaitlistRepository {
    pool: PgPool,
}

impl WaitlistRepository {
    /// Create a new waitlist repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<sqlx::Error> for WaitlistError {
    fn from(err: sqlx::Error) -> Self {
        WaitlistError::Internal(err.to_string())
    }
}

impl WaitlistStore for WaitlistRepository {
    async fn insert(&self, entry: WaitlistEntry) -> Result<InsertOutcome, WaitlistError> {
        let result = sqlx::query(
            r#"
            INSERT INTO waitlist (id, email, signed_up_at, status)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(entry.id)
        .bind(&entry.email)
        .bind(entry.signed_up_at)
        .bind(&entry.status)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            Ok(InsertOutcome::AlreadyExists)
        } else {
            Ok(InsertOutcome::Inserted)
        }
    }

    async fn count(&self) -> Result<u64, WaitlistError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM waitlist")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }
}
