//! Adapter Layer
//!
//! 外部システム（Fanvue API, OpenAI, ファイルシステム）との統合

pub mod config;
pub mod export;
pub mod fanvue;
pub mod openai;
pub mod repositories;
