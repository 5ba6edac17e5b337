//! Shared utilities for the Bilingo server and client.
//!
//! - `logger`: tracing subscriber setup
//! - `time`: clock abstraction and ISO-8601 formatting
//! - `language`: Chinese / English language detection

pub mod language;
pub mod logger;
pub mod time;
