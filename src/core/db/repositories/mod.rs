//! Database repositories
//!
//! Repositories encapsulate data access logic behind a small API.

pub mod waitlist;

pub use waitlist::WaitlistRepository;
