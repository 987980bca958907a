//! Click event model for asynchronous analytics capture.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A fully classified click, ready for the analytics sink.
///
/// Built once per redirect by
/// [`crate::application::services::analytics::build_click_event`], sent to
/// the click channel without blocking the response, and drained by
/// [`crate::domain::click_worker::run_click_worker`].
///
/// Carries only derived data: the client address appears solely as a
/// one-way hash, and the user agent only as coarse category strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickEvent {
    pub record_id: i64,
    pub clicked_at: DateTime<Utc>,
    /// SHA-256 hex digest of the client address ("unknown" when absent).
    pub ip_hash: String,
    /// `mobile`, `tablet`, or `desktop`.
    pub device_type: String,
    pub browser: String,
    pub os: String,
    pub referrer: Option<String>,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
}
