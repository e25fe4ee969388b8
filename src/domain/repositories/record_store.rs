//! # Record Store Trait
//!
//! リポジトリレコードの永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::repo_record::RepoRecord;

/// レコードストア
///
/// 前回保存したランキングの読み書きを担当するリポジトリ
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// レコードを読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - ストアファイルのパス
    ///
    /// # Returns
    ///
    /// 保存済みのレコード。ファイルが存在しない場合は空のリスト
    ///
    /// # Errors
    ///
    /// ファイルの読み込みまたはパースに失敗した場合にエラーを返す
    async fn load(&self, path: &str) -> Result<Vec<RepoRecord>>;

    /// レコードを保存する（既存の内容は上書き）
    ///
    /// # Arguments
    ///
    /// * `path` - ストアファイルのパス
    /// * `records` - 保存するレコード
    ///
    /// # Errors
    ///
    /// ファイルの書き込みに失敗した場合にエラーを返す
    async fn save(&self, path: &str, records: &[RepoRecord]) -> Result<()>;
}
