//! Infrastructure owned by the core (currently just the redirect cache).
//!
//! The link store and analytics sink are external collaborators injected
//! through the traits in [`crate::domain::repositories`].

pub mod cache;
