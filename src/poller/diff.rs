// src/poller/diff.rs

//! Change detection stage.

use crate::models::StatusReport;

/// Single-slot comparator deciding whether a report warrants a
/// notification.
///
/// Holds the one most recently sent [`StatusReport`] across all
/// homeworks combined, not one per homework. Interleaved updates to
/// different homeworks in consecutive cycles therefore each look like a
/// change. Comparison is structural equality over the full report, not
/// just the status field.
#[derive(Debug, Default)]
pub struct ChangeDetector {
    last_sent: Option<StatusReport>,
}

impl ChangeDetector {
    /// Create a detector with no previous report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `report` as the latest observation and decide whether it
    /// differs from the previously stored one.
    ///
    /// Returns `true` when a notification is due; the report then
    /// becomes the stored "previous" value.
    pub fn should_notify(&mut self, report: &StatusReport) -> bool {
        if self.last_sent.as_ref() == Some(report) {
            return false;
        }
        self.last_sent = Some(report.clone());
        true
    }

    /// The most recently stored report, if any.
    #[cfg(test)]
    fn last_report(&self) -> Option<&StatusReport> {
        self.last_sent.as_ref()
    }
}
