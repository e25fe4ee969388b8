//! GitHub Client
//!
//! reqwestによるGitHub REST APIクライアント

use log::{info, warn};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use std::time::Duration;

use super::error::GithubError;
use super::models::{SearchQuery, SearchResponse};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";
pub const GITHUB_API_VERSION: &str = "2022-11-28";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// GitHub REST APIクライアント
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    /// 新しいクライアントを作成
    ///
    /// # Arguments
    ///
    /// * `base_url` - APIのベースURL（末尾の `/` は無視）
    /// * `token` - Bearerトークン。`None` の場合は認証ヘッダを付けない
    /// * `timeout` - リクエスト全体のタイムアウト
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GithubError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self::with_http(http, base_url, token))
    }

    /// 構築済みの `reqwest::Client` を使うクライアントを作成
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    /// 検索エンドポイントのURL
    pub fn search_url(&self) -> String {
        format!("{}/search/repositories", self.base_url)
    }

    /// リポジトリを検索する（1ページのみ）
    ///
    /// # Errors
    ///
    /// - 200以外: `GithubError::UnexpectedStatus`
    /// - 通信失敗: `GithubError::Request`
    /// - ボディが不正: `GithubError::Decode`
    pub async fn search_repositories(
        &self,
        query: &SearchQuery,
    ) -> Result<SearchResponse, GithubError> {
        let url = self.search_url();
        info!("GET {} q=\"{}\" per_page={}", url, query.q(), query.per_page);

        let mut request = self
            .http
            .get(&url)
            .query(&query.params())
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            warn!("GitHub search request failed with status {}", status);
            return Err(GithubError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        info!("GitHub search returned {} items", parsed.items.len());

        Ok(parsed)
    }
}
