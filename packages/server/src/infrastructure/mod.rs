//! Infrastructure 層
//!
//! ドメイン層が定義する trait の具体的な実装と、ワイヤフォーマット（DTO）を提供します。

pub mod dto;
pub mod message_pusher;
pub mod repository;
pub mod translation;
