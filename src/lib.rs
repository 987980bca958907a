//! # shortlink-core
//!
//! The short-code generation and redirect-resolution core of a URL
//! shortener. This crate is the library behind the HTTP layer: it owns the
//! algorithmic and concurrency decisions and talks to the outside world
//! through two injected collaborator traits.
//!
//! ## Architecture
//!
//! - **Domain layer** ([`domain`]) - Entities, collaborator traits, and the
//!   background click worker
//! - **Application layer** ([`application`]) - Creation and redirect
//!   services, click event construction
//! - **Infrastructure layer** ([`infrastructure`]) - The bounded TTL
//!   redirect cache
//! - **Utilities** ([`utils`]) - Alphabets, code generation, reserved
//!   words, URL normalization, user-agent classification
//!
//! ## Guarantees
//!
//! - A reserved word or an already-taken code is never assigned
//! - Cache entries are never served past their expiry
//! - Analytics capture never blocks or fails a redirect; events are built
//!   from derived data only (the client address is stored as a hash)
//! - Store failures during redirects degrade to not-found, with operator
//!   visibility via `tracing` and `metrics`
//!
//! ## Quick start
//!
//! ```ignore
//! use std::sync::Arc;
//! use shortlink_core::config;
//! use shortlink_core::ShortlinkCore;
//!
//! let cfg = config::load_from_env()?;
//! let core = ShortlinkCore::start(&cfg, store, sink);
//!
//! let created = core.links.create_short_link("https://example.com", None, None).await?;
//! let resolved = core.redirects.resolve(&created.code, &meta).await;
//! ```

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use app::ShortlinkCore;
pub use error::AppError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{LinkService, RedirectService};
    pub use crate::config::CoreConfig;
    pub use crate::app::ShortlinkCore;
    pub use crate::domain::click_event::ClickEvent;
    pub use crate::domain::entities::{CreatedLink, NewLink, RequestMeta, ResolvedLink};
    pub use crate::domain::repositories::{AnalyticsSink, LinkStore};
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::RedirectCache;
}
