//! Shared fixtures: an in-memory link store and a recording analytics sink.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use shortlink_core::domain::click_event::ClickEvent;
use shortlink_core::domain::entities::{NewLink, ResolvedLink};
use shortlink_core::domain::repositories::{AnalyticsSink, LinkStore};
use shortlink_core::error::AppError;

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// In-memory [`LinkStore`] with call counters for interaction assertions.
#[derive(Default)]
pub struct InMemoryStore {
    links: Mutex<HashMap<String, (i64, NewLink)>>,
    hits: Mutex<HashMap<i64, u64>>,
    next_id: AtomicI64,
    latency: Option<Duration>,
    pub availability_calls: AtomicUsize,
    pub resolve_calls: AtomicUsize,
    pub insert_calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call sleeps for `latency` first, for timeout
    /// tests.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::default()
        }
    }

    /// Seeds a link directly, bypassing the creation flow.
    pub fn seed(&self, code: &str, long_url: &str) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.links.lock().unwrap().insert(
            code.to_ascii_lowercase(),
            (
                id,
                NewLink {
                    code: code.to_ascii_lowercase(),
                    long_url: long_url.to_string(),
                    is_custom_alias: false,
                    owner_id: None,
                },
            ),
        );
        id
    }

    pub fn hits(&self, record_id: i64) -> u64 {
        self.hits.lock().unwrap().get(&record_id).copied().unwrap_or(0)
    }

    pub fn stored(&self, code: &str) -> Option<NewLink> {
        self.links
            .lock()
            .unwrap()
            .get(&code.to_ascii_lowercase())
            .map(|(_, new_link)| new_link.clone())
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl LinkStore for InMemoryStore {
    async fn is_available(&self, code: &str) -> Result<bool, AppError> {
        self.availability_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        Ok(!self.links.lock().unwrap().contains_key(&code.to_ascii_lowercase()))
    }

    async fn resolve_and_increment(&self, code: &str) -> Result<Option<ResolvedLink>, AppError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;

        let links = self.links.lock().unwrap();
        let Some((id, new_link)) = links.get(&code.to_ascii_lowercase()) else {
            return Ok(None);
        };

        *self.hits.lock().unwrap().entry(*id).or_insert(0) += 1;
        Ok(Some(ResolvedLink {
            record_id: *id,
            long_url: new_link.long_url.clone(),
        }))
    }

    async fn insert_record(&self, new_link: NewLink) -> Result<i64, AppError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;

        let mut links = self.links.lock().unwrap();
        if links.contains_key(&new_link.code) {
            return Err(AppError::conflict(
                "code already exists",
                json!({ "code": new_link.code }),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        links.insert(new_link.code.clone(), (id, new_link));
        Ok(id)
    }
}

/// [`AnalyticsSink`] that records every event for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ClickEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ClickEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalyticsSink for RecordingSink {
    async fn write_click_event(&self, event: ClickEvent) -> Result<(), AppError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}
