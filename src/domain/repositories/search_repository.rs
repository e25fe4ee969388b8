//! # Search Repository Trait
//!
//! リモート検索APIからのリポジトリ取得を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::repo_record::RepoRecord;

/// 検索リポジトリ
///
/// トピックとスター数でリポジトリを検索する
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SearchRepository: Send + Sync {
    /// リポジトリを検索する
    ///
    /// # Arguments
    ///
    /// * `topic` - 検索対象のトピック
    /// * `min_stars` - 最小スター数
    /// * `limit` - 取得する最大件数
    ///
    /// # Returns
    ///
    /// スター数の降順に並んだレコード。APIが失敗ステータスを返した場合は空のリスト
    ///
    /// # Errors
    ///
    /// 通信そのものが失敗した場合にエラーを返す
    async fn search(&self, topic: &str, min_stars: u64, limit: usize) -> Result<Vec<RepoRecord>>;
}
