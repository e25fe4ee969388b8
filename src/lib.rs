//! # repo-collector
//!
//! GitHub の検索APIからトピック別の人気リポジトリを収集し、
//! 前回の結果とマージして上位N件を README に書き出すツール
//!
//! 以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、マージ・ランキング、レポートのレンダリング（外部依存なし）
//! - **Application層**: 収集ユースケース
//! - **Adapter層**: 外部システムとの統合（GitHub API, ファイルシステム）
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
