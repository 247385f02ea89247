//! Waitlist signup
//!
//! This module provides:
//! - Email validation and normalization
//! - The `WaitlistStore` persistence seam with an in-memory implementation
//! - REST API endpoint `POST /api/waitlist`

pub mod api;
pub mod service;

pub use api::{WaitlistMessage, WaitlistRequest, waitlist_router};
pub use service::{
    InsertOutcome, MemoryWaitlistStore, WaitlistError, WaitlistService, WaitlistStore,
    normalize_email,
};
