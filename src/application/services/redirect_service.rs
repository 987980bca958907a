//! Redirect resolution: cache, store round trip, analytics dispatch.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::application::services::analytics::build_click_event;
use crate::domain::click_event::ClickEvent;
use crate::domain::entities::{RequestMeta, ResolvedLink};
use crate::domain::repositories::LinkStore;
use crate::infrastructure::cache::RedirectCache;

/// Resolves inbound short codes to destinations.
///
/// Owns the redirect cache and the sending half of the click channel. The
/// serving layer turns the returned `Option` into a redirect or a
/// not-found page; store failures are downgraded to `None` here so a flaky
/// backend degrades to "link not found" instead of a 5xx (the failure is
/// still logged and counted for operators).
pub struct RedirectService<S: LinkStore> {
    store: Arc<S>,
    cache: RedirectCache,
    click_tx: mpsc::Sender<ClickEvent>,
    store_timeout: Duration,
}

impl<S: LinkStore> RedirectService<S> {
    pub fn new(
        store: Arc<S>,
        cache: RedirectCache,
        click_tx: mpsc::Sender<ClickEvent>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            store,
            cache,
            click_tx,
            store_timeout,
        }
    }

    /// Resolves a short code to its destination.
    ///
    /// Codes are compared case-insensitively; an empty code is `None`
    /// without touching the store (the caller should send the visitor to
    /// the landing page). On a cache miss the store's atomic
    /// resolve-and-increment runs under the configured timeout; a successful
    /// resolve populates the cache. Analytics capture is dispatched on every
    /// successful resolve, cached or not, and never awaited.
    pub async fn resolve(&self, code: &str, meta: &RequestMeta) -> Option<ResolvedLink> {
        let code = code.trim().to_ascii_lowercase();
        if code.is_empty() {
            return None;
        }

        if let Some(link) = self.cache.get(&code) {
            tracing::debug!(code = %code, "redirect cache hit");
            self.dispatch_click(link.record_id, meta);
            return Some(link);
        }

        let result = tokio::time::timeout(
            self.store_timeout,
            self.store.resolve_and_increment(&code),
        )
        .await;

        let resolved = match result {
            Ok(Ok(Some(link))) => link,
            Ok(Ok(None)) => {
                tracing::debug!(code = %code, "unknown short code");
                return None;
            }
            Ok(Err(e)) => {
                metrics::counter!("redirect_store_errors").increment(1);
                tracing::error!(code = %code, error = %e, "store error during redirect, serving not-found");
                return None;
            }
            Err(_) => {
                metrics::counter!("redirect_store_timeouts").increment(1);
                tracing::error!(code = %code, "store call timed out during redirect, serving not-found");
                return None;
            }
        };

        self.cache.put(&code, resolved.clone());
        self.dispatch_click(resolved.record_id, meta);

        Some(resolved)
    }

    /// Hands a classified click event to the background worker.
    ///
    /// `try_send` keeps this non-blocking: when the queue is full or the
    /// worker is gone the click is dropped, the redirect is unaffected.
    fn dispatch_click(&self, record_id: i64, meta: &RequestMeta) {
        let event = build_click_event(record_id, meta);

        if let Err(e) = self.click_tx.try_send(event) {
            metrics::counter!("click_events_dropped").increment(1);
            tracing::warn!(record_id, error = %e, "failed to enqueue click event");
        }
    }
}
