//! # RepoRecord Entity
//!
//! リポジトリレコードのドメインエンティティ

use serde::{Deserialize, Serialize};

/// リポジトリレコード
///
/// 検索APIから取得され、そのままストアに永続化される。
/// 生成後に書き換えられることはなく、フィルタ・ソート・切り詰めで
/// 新しいコレクションが作られるだけ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRecord {
    /// 一意なリポジトリID
    pub id: u64,
    /// `owner/name` 形式のフルネーム
    pub full_name: String,
    /// リポジトリのWeb URL
    pub html_url: String,
    /// スター数
    pub stargazers_count: u64,
}

impl RepoRecord {
    /// 新しいレコードを作成
    ///
    /// # Arguments
    ///
    /// * `id` - リポジトリID
    /// * `full_name` - フルネーム
    /// * `html_url` - Web URL
    /// * `stargazers_count` - スター数
    pub fn new(
        id: u64,
        full_name: impl Into<String>,
        html_url: impl Into<String>,
        stargazers_count: u64,
    ) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            html_url: html_url.into(),
            stargazers_count,
        }
    }
}
