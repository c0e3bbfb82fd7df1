// src/models/homework.rs

//! Homework status enumeration and the per-cycle status report.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Review status of a homework, as reported by the upstream API.
///
/// The set is fixed by the review service; anything else in a response
/// is an [`AppError::UndocumentedStatus`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// The wire representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sentence for this status.
    ///
    /// These are domain constants from the review service, not
    /// configuration.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(AppError::UndocumentedStatus(other.to_string())),
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The last notification-worthy state computed for a polling cycle.
///
/// Equality is structural over all three fields; the change detector
/// relies on that to decide whether a notification is due.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusReport {
    /// Homework display name
    pub homework_name: String,

    /// Review status the report was built from
    pub status: HomeworkStatus,

    /// Ready-to-send notification text
    pub message: String,
}

impl StatusReport {
    /// Build a report for a homework that just changed status.
    pub fn new(homework_name: impl Into<String>, status: HomeworkStatus) -> Self {
        let homework_name = homework_name.into();
        let message = format!(
            "Changed review status of \"{}\". {}",
            homework_name,
            status.verdict()
        );
        Self {
            homework_name,
            status,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for raw in ["approved", "reviewing", "rejected"] {
            let status: HomeworkStatus = raw.parse().unwrap();
            assert_eq!(status.as_str(), raw);
        }
    }

    #[test]
    fn test_undocumented_status() {
        let result = "cancelled".parse::<HomeworkStatus>();
        assert!(matches!(
            result,
            Err(AppError::UndocumentedStatus(s)) if s == "cancelled"
        ));
    }

    #[test]
    fn test_report_message() {
        let report = StatusReport::new("hw1", HomeworkStatus::Approved);
        assert_eq!(
            report.message,
            "Changed review status of \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_report_equality_is_structural() {
        let a = StatusReport::new("hw1", HomeworkStatus::Reviewing);
        let b = StatusReport::new("hw1", HomeworkStatus::Reviewing);
        let c = StatusReport::new("hw1", HomeworkStatus::Rejected);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
