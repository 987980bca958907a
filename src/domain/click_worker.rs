//! Background worker draining the click channel into the analytics sink.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::AnalyticsSink;

/// Consumes click events and writes them to the analytics sink.
///
/// Runs until every sender is dropped. Each write is bounded by
/// `write_timeout` so a stalled sink cannot pile up in-flight work.
/// Failures and timeouts are logged and counted; nothing here can reach the
/// redirect path.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    sink: Arc<dyn AnalyticsSink>,
    write_timeout: Duration,
) {
    while let Some(event) = rx.recv().await {
        let record_id = event.record_id;

        match tokio::time::timeout(write_timeout, sink.write_click_event(event)).await {
            Ok(Ok(())) => {
                metrics::counter!("click_events_written").increment(1);
            }
            Ok(Err(e)) => {
                metrics::counter!("click_events_failed").increment(1);
                tracing::warn!(record_id, error = %e, "failed to write click event");
            }
            Err(_) => {
                metrics::counter!("click_events_timed_out").increment(1);
                tracing::warn!(record_id, "analytics sink write timed out");
            }
        }
    }

    tracing::debug!("click channel closed, worker exiting");
}
