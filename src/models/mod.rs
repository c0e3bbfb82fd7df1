// src/models/mod.rs

//! Domain models for the bot.

mod homework;

// Re-export all public types
pub use homework::{HomeworkStatus, StatusReport};
