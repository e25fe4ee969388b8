//! Adapter Layer
//!
//! 外部システム（GitHub API, ファイルシステム）との統合

pub mod auth;
pub mod config;
pub mod github;
pub mod repositories;
