//! GitHub Adapter
//!
//! GitHub REST API（リポジトリ検索）との統合

pub mod client;
pub mod error;
pub mod models;
