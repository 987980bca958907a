//! Top-level wiring of the core services.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{LinkService, RedirectService};
use crate::config::CoreConfig;
use crate::domain::click_worker::run_click_worker;
use crate::domain::repositories::{AnalyticsSink, LinkStore};
use crate::infrastructure::cache::RedirectCache;

/// The assembled core: creation and redirect services sharing one store.
///
/// [`ShortlinkCore::start`] is the only place that builds the redirect
/// cache, opens the click channel, and spawns the background worker; the
/// embedding HTTP layer holds this struct and calls into its services.
pub struct ShortlinkCore<S: LinkStore> {
    pub links: LinkService<S>,
    pub redirects: RedirectService<S>,
}

impl<S: LinkStore + 'static> ShortlinkCore<S> {
    /// Wires the services together and starts the click worker.
    ///
    /// Must be called from within a Tokio runtime. The worker task runs
    /// until the returned core (and with it the channel's sender) is
    /// dropped.
    pub fn start(config: &CoreConfig, store: Arc<S>, sink: Arc<dyn AnalyticsSink>) -> Self {
        let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
        tokio::spawn(run_click_worker(click_rx, sink, config.analytics_timeout()));

        let cache = RedirectCache::new(config.cache_ttl(), config.cache_capacity);

        Self {
            links: LinkService::new(Arc::clone(&store)),
            redirects: RedirectService::new(store, cache, click_tx, config.store_timeout()),
        }
    }
}
