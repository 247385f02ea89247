//! Database module for the waitlist
//!
//! Connection pool setup, row models, and the PostgreSQL repository.

pub mod models;
pub mod pool;
pub mod repositories;

pub use models::*;
pub use pool::{DbConfig, DbError, create_pool, create_pool_with_migrations, health_check};
pub use repositories::WaitlistRepository;

// Re-export sqlx types that might be needed
pub use sqlx::PgPool;
