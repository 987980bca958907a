//! Collaborator trait for the external analytics sink.

use async_trait::async_trait;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;

/// Write-only interface to the analytics backend.
///
/// Events are best-effort: the click worker logs and drops failures, so
/// implementations may simply surface their transport errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    /// Persists one click event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the sink is unreachable.
    async fn write_click_event(&self, event: ClickEvent) -> Result<(), AppError>;
}
