//! Waitlist business logic
//!
//! Validates the submitted address and hands it to a [`WaitlistStore`]. The
//! store decides atomically whether the address is new.

use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;

use crate::core::db::models::WaitlistEntry;

/// Longest address accepted (RFC 5321 path limit)
const MAX_EMAIL_LENGTH: usize = 254;

/// Waitlist error types
#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Email already registered")]
    AlreadyRegistered,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Failed to join waitlist")]
    Internal(String),
}

/// Result of inserting an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    AlreadyExists,
}

/// Persistence for waitlist entries.
///
/// `insert` must check for an existing address and insert in one atomic step.
pub trait WaitlistStore: Clone + Send + Sync + 'static {
    fn insert(
        &self,
        entry: WaitlistEntry,
    ) -> impl Future<Output = Result<InsertOutcome, WaitlistError>> + Send;

    fn count(&self) -> impl Future<Output = Result<u64, WaitlistError>> + Send;
}

/// Process-local store used when no database is configured
#[derive(Clone, Default)]
pub struct MemoryWaitlistStore {
    entries: Arc<DashMap<String, WaitlistEntry>>,
}

impl MemoryWaitlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, email: &str) -> bool {
        self.entries.contains_key(email)
    }
}

impl WaitlistStore for MemoryWaitlistStore {
    async fn insert(&self, entry: WaitlistEntry) -> Result<InsertOutcome, WaitlistError> {
        use dashmap::mapref::entry::Entry;

        match self.entries.entry(entry.email.clone()) {
            Entry::Occupied(_) => Ok(InsertOutcome::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(entry);
                Ok(InsertOutcome::Inserted)
            }
        }
    }

    async fn count(&self) -> Result<u64, WaitlistError> {
        Ok(self.entries.len() as u64)
    }
}

/// Trim and lowercase an address, rejecting anything that is not
/// `local@domain`.
pub fn normalize_email(raw: &str) -> Result<String, WaitlistError> {
    let email = raw.trim();

    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return Err(WaitlistError::InvalidEmail);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(WaitlistError::InvalidEmail);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(WaitlistError::InvalidEmail);
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(WaitlistError::InvalidEmail);
    }

    Ok(email.to_lowercase())
}

/// Waitlist service
#[derive(Clone)]
pub struct WaitlistService<S: WaitlistStore> {
    store: S,
}

impl<S: WaitlistStore> WaitlistService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add `email` to the waitlist
    pub async fn join(&self, email: Option<&str>) -> Result<(), WaitlistError> {
        let email = normalize_email(email.ok_or(WaitlistError::InvalidEmail)?)?;

        match self.store.insert(WaitlistEntry::pending(&email)).await? {
            InsertOutcome::Inserted => {
                tracing::info!("Waitlist signup: {}", email);
                Ok(())
            }
            InsertOutcome::AlreadyExists => {
                tracing::debug!("Duplicate waitlist signup: {}", email);
                Err(WaitlistError::AlreadyRegistered)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_valid() {
        assert_eq!(normalize_email("ada@example.com").unwrap(), "ada@example.com");
        assert_eq!(normalize_email("  Ada@Example.COM ").unwrap(), "ada@example.com");
        assert_eq!(normalize_email("a+tag@b.co").unwrap(), "a+tag@b.co");
        assert_eq!(normalize_email("root@localhost").unwrap(), "root@localhost");
    }

    #[test]
    fn test_normalize_email_invalid() {
        for raw in [
            "",
            "   ",
            "no-at-sign",
            "@example.com",
            "ada@",
            "ada@@example.com",
            "a@b@c",
            "ada lovelace@example.com",
        ] {
            assert!(
                matches!(normalize_email(raw), Err(WaitlistError::InvalidEmail)),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_normalize_email_too_long() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert!(matches!(
            normalize_email(&email),
            Err(WaitlistError::InvalidEmail)
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(WaitlistError::InvalidEmail.to_string(), "Invalid email address");
        assert_eq!(
            WaitlistError::AlreadyRegistered.to_string(),
            "Email already registered"
        );
        assert_eq!(
            WaitlistError::Internal("connection reset".into()).to_string(),
            "Failed to join waitlist"
        );
    }

    #[tokio::test]
    async fn test_join_inserts_once() {
        let service = WaitlistService::new(MemoryWaitlistStore::new());

        assert!(service.join(Some("ada@example.com")).await.is_ok());
        assert!(service.store().contains("ada@example.com"));
        assert_eq!(service.store().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_join_duplicate_ignores_case() {
        let service = WaitlistService::new(MemoryWaitlistStore::new());
        service.join(Some("ada@example.com")).await.unwrap();

        let result = service.join(Some(" ADA@example.com")).await;
        assert!(matches!(result, Err(WaitlistError::AlreadyRegistered)));
        assert_eq!(service.store().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_join_missing_email() {
        let service = WaitlistService::new(MemoryWaitlistStore::new());
        let result = service.join(None).await;
        assert!(matches!(result, Err(WaitlistError::InvalidEmail)));
    }

    #[tokio::test]
    async fn test_concurrent_duplicates_insert_once() {
        let service = WaitlistService::new(MemoryWaitlistStore::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.join(Some("race@example.com")).await })
            })
            .collect();

        let mut inserted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                inserted += 1;
            }
        }

        assert_eq!(inserted, 1);
        assert_eq!(service.store().count().await.unwrap(), 1);
    }
}
