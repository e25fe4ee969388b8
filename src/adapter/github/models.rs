//! GitHub API Models
//!
//! 検索APIのリクエスト・レスポンス表現

use serde::Deserialize;

use crate::domain::entities::repo_record::RepoRecord;

/// `/search/repositories` のレスポンス
///
/// `items` 以外のフィールド（`total_count` など）は使わない。
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<RepoRecord>,
}

/// 検索APIが1ページで返す最大件数
pub const MAX_PER_PAGE: usize = 100;

/// リポジトリ検索クエリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub topic: String,
    pub min_stars: u64,
    pub per_page: usize,
}

impl SearchQuery {
    pub fn new(topic: impl Into<String>, min_stars: u64, per_page: usize) -> Self {
        Self {
            topic: topic.into(),
            min_stars,
            per_page,
        }
    }

    /// GitHub検索構文の `q` パラメータ
    pub fn q(&self) -> String {
        format!("topic:{} stars:>={}", self.topic, self.min_stars)
    }

    /// URLに付与するクエリパラメータ（スター数の降順）
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.q()),
            ("sort", "stars".to_string()),
            ("order", "desc".to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}
