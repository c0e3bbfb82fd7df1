// src/services/mod.rs

//! External collaborators: the review API client and the Telegram
//! notifier.

pub mod api;
pub mod telegram;

pub use api::PracticumClient;
pub use telegram::{Notify, TelegramNotifier};
