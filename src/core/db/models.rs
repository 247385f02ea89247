//! Database row models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Status stored with every new signup, matching the column default
pub const STATUS_PENDING: &str = "pending";

/// A row of the `waitlist` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub signed_up_at: DateTime<Utc>,
    pub status: String,
}

impl WaitlistEntry {
    /// New pending entry signed up now
    pub fn pending(email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            signed_up_at: Utc::now(),
            status: STATUS_PENDING.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_entry() {
        let entry = WaitlistEntry::pending("ada@example.com");
        assert_eq!(entry.email, "ada@example.com");
        assert_eq!(entry.status, "pending");
        assert!(entry.signed_up_at <= Utc::now());
    }

    #[test]
    fn test_entry_serialization() {
        let entry = WaitlistEntry::pending("ada@example.com");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["status"], STATUS_PENDING);
        assert_eq!(json["id"], entry.id.to_string());
    }
}
