//! Application pages
//!
//! - Landing page (home)
//! - Early access (waitlist signup)
//! - Not found

mod early_access;
pub(crate) mod landing;
mod not_found;

pub use early_access::EarlyAccessPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
