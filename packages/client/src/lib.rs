//! Bilingo CLI chat client.
//!
//! Joins the chat hub, prints the conversation and annotates messages with a
//! Chinese / English translation fetched from the server.

pub mod domain;
pub mod error;
mod formatter;
mod runner;
mod session;
mod translator;
mod ui;

pub use runner::{ClientConfig, run_client};
