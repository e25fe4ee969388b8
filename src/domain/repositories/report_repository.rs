//! # Report Repository Trait
//!
//! サマリーレポートの出力を抽象化

use anyhow::Result;
use async_trait::async_trait;

/// レポートリポジトリ
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// レンダリング済みのレポートを書き出す（常に全体を上書き）
    ///
    /// # Errors
    ///
    /// ファイルの書き込みに失敗した場合にエラーを返す
    async fn write(&self, path: &str, content: &str) -> Result<()>;
}
