//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **CollectReposUseCase**: 検索・マージ・保存・レポート更新

pub mod collect_repos;
