//! GitHub Search Repository Implementation
//!
//! SearchRepositoryのGitHub実装

use anyhow::Result;
use async_trait::async_trait;
use log::warn;

use crate::adapter::github::client::GithubClient;
use crate::adapter::github::models::SearchQuery;
use crate::domain::entities::repo_record::RepoRecord;
use crate::domain::repositories::search_repository::SearchRepository;

/// GitHub検索リポジトリ
pub struct GithubSearchRepository {
    client: GithubClient,
}

impl GithubSearchRepository {
    /// 新しいリポジトリを作成
    pub fn new(client: GithubClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchRepository for GithubSearchRepository {
    async fn search(&self, topic: &str, min_stars: u64, limit: usize) -> Result<Vec<RepoRecord>> {
        let query = SearchQuery::new(topic, min_stars, limit);

        match self.client.search_repositories(&query).await {
            Ok(response) => Ok(response.items),
            // 失敗ステータスは空の結果として扱う
            Err(e) if e.is_recoverable() => {
                println!("❌ {}", e);
                warn!("Treating failed GitHub search as an empty result: {}", e);
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}
