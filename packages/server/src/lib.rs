//! Bilingo chat server library.
//!
//! Real-time chat hub over WebSocket plus a Chinese / English translation
//! endpoint backed by a fallback chain of external providers.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
