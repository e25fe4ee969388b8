//! # Domain Entities
//!
//! ビジネスエンティティを定義するモジュール
//!
//! ## エンティティ
//!
//! - **RepoRecord**: 検索で見つかったリポジトリ1件

pub mod repo_record;
