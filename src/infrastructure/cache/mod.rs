//! Caching layer for fast redirect lookups.

mod redirect_cache;

pub use redirect_cache::{RedirectCache, DEFAULT_CAPACITY, DEFAULT_TTL};
