//! Data Transfer Objects (DTOs) for the chat application.
//!
//! DTOs are organized by protocol:
//! - `websocket`: WebSocket event envelopes
//! - `http`: HTTP API request / response bodies

pub mod conversion;
pub mod http;
pub mod websocket;
