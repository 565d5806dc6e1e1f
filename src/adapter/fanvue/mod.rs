//! Fanvue API Adapter
//!
//! 認証付きREST呼び出しとワイヤーモデル

pub mod client;
pub mod models;
