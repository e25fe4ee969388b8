//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod github_search_repository;
pub mod json_record_store;
pub mod markdown_report_repository;
