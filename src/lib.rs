//! # ETU Schedule Bot
//!
//! A Telegram bot that shows a student group's class and exam schedule from
//! the university's mobile API.
//!
//! ## Features
//! - "Nearest lesson" lookup: the lesson running now, the next one today, or
//!   the first one on a later day within a week
//! - Today / tomorrow / any weekday / whole week views for odd and even weeks
//! - Exam list sorted by date
//! - Per-chat group selection kept in memory
//! - Liveness HTTP endpoint

/// Bot commands, menu handlers and per-chat state
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Error types for validation and upstream failures
pub mod error;
/// Timetable models, week parity and the nearest-lesson lookup
pub mod schedule;
/// Upstream API client and the liveness server
pub mod services;
/// Utility functions for datetime, validation, logging and feedback
pub mod utils;
