// src/poller/mod.rs

//! Poll loop stages.
//!
//! - `validate`: shape-check the decoded API response
//! - `status`: translate one homework record into a report
//! - `diff`: decide whether a report warrants a notification
//! - `run`: the orchestrating loop itself

pub mod diff;
pub mod run;
pub mod status;
pub mod validate;

pub use diff::ChangeDetector;
pub use run::{NOTIFY_GAP, POLL_INTERVAL, Poller};
pub use status::parse_status;
pub use validate::check_response;
