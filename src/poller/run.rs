// src/poller/run.rs

//! The poll loop orchestrator.
//!
//! Ties the API client, the validation/translation stages, the change
//! detector and the notifier together. The loop is the single recovery
//! boundary: every error raised by a cycle is caught here, logged, and
//! notified at most once per distinct error text.

use std::time::Duration;

use chrono::Utc;
use serde_json::Value;

use crate::error::Result;
use crate::poller::{ChangeDetector, check_response, parse_status};
use crate::services::{Notify, PracticumClient};

/// Fixed delay between poll cycles.
pub const POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Fixed delay between consecutive notifications within one cycle.
///
/// Throttles burst delivery when multiple homeworks change at once.
pub const NOTIFY_GAP: Duration = Duration::from_secs(2);

/// Long-running poller owning all per-process loop state.
pub struct Poller {
    client: PracticumClient,
    notifier: Box<dyn Notify>,
    detector: ChangeDetector,
    last_error: Option<String>,
}

impl Poller {
    /// Create a poller; nothing is fetched until [`Poller::run`].
    pub fn new(client: PracticumClient, notifier: Box<dyn Notify>) -> Self {
        Self {
            client,
            notifier,
            detector: ChangeDetector::new(),
            last_error: None,
        }
    }

    /// Run the poll loop forever.
    ///
    /// Processing errors never terminate the loop; the only way out is
    /// external process termination.
    pub async fn run(mut self) {
        log::info!(
            "poller started (interval {}s, notify gap {}s)",
            POLL_INTERVAL.as_secs(),
            NOTIFY_GAP.as_secs()
        );

        loop {
            // The cursor is reset to the current wall-clock time on every
            // cycle; it is never advanced from response data.
            let cursor = Utc::now().timestamp();

            if let Err(err) = self.cycle(cursor).await {
                let message = format!("Polling cycle failed: {err}");
                report_failure(
                    &mut self.last_error,
                    self.notifier.as_ref(),
                    message,
                )
                .await;
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// One fetch → validate → translate/diff/notify pass.
    async fn cycle(&mut self, cursor: i64) -> Result<()> {
        log::debug!("fetching homework statuses from_date={cursor}");

        let response = self.client.fetch(cursor).await?;
        let records = check_response(&response)?;
        let sent = dispatch_reports(records, &mut self.detector, self.notifier.as_ref()).await?;

        if sent == 0 {
            log::info!("homework status unchanged");
        } else {
            log::info!("delivered {sent} notification(s)");
        }
        Ok(())
    }
}

/// Translate each record and notify for the ones the detector accepts.
///
/// Returns the number of notifications delivered. Fails fast on the
/// first translation or delivery error; the loop turns that into a
/// failure notification.
async fn dispatch_reports(
    records: &[Value],
    detector: &mut ChangeDetector,
    notifier: &dyn Notify,
) -> Result<usize> {
    let mut sent = 0;

    for record in records {
        let report = parse_status(record)?;
        if detector.should_notify(&report) {
            // Gap only between notifications, not after the last one.
            if sent > 0 {
                tokio::time::sleep(NOTIFY_GAP).await;
            }
            notifier.send(&report.message).await?;
            sent += 1;
        } else {
            log::debug!("no change for \"{}\", skipping", report.homework_name);
        }
    }

    Ok(sent)
}

/// Log a cycle failure and notify the user about it at most once per
/// distinct message text.
///
/// A failure to deliver the failure notification itself is logged and
/// not retried.
async fn report_failure(last_error: &mut Option<String>, notifier: &dyn Notify, message: String) {
    log::error!("{message}");

    if last_error.as_deref() == Some(message.as_str()) {
        log::debug!("failure already reported, suppressing notification");
        return;
    }

    if let Err(send_err) = notifier.send(&message).await {
        log::error!("could not deliver failure notification: {send_err}");
    }
    *last_error = Some(message);
}
