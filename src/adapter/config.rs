//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::adapter::auth::token::DEFAULT_TOKEN_ENV;
use crate::adapter::github::client::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::adapter::github::models::MAX_PER_PAGE;
use crate::application::dto::collect_config::CollectConfig;

/// 設定
///
/// すべてのフィールドは省略可能で、省略時はデフォルト値になる
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub topic: String,
    pub min_stars: u64,
    pub repo_limit: usize,

    // GitHub API
    pub api_base_url: String,
    pub token_env: String,
    pub request_timeout_secs: u64,

    // Output files
    pub store_path: String,
    pub report_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            topic: "machine-learning".to_string(),
            min_stars: 100,
            repo_limit: 10,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            store_path: "repos.json".to_string(),
            report_path: "README.md".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path).into_owned();
        let content = fs::read_to_string(&expanded)
            .context(format!("Failed to read config file: {}", path))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            anyhow::bail!("topic must not be empty");
        }
        if self.repo_limit == 0 {
            anyhow::bail!("repo_limit must be greater than 0");
        }
        // 1ページ分しか取得しないので、上限を超える件数は集められない
        if self.repo_limit > MAX_PER_PAGE {
            anyhow::bail!(
                "repo_limit must be at most {} (GitHub search page size), got {}",
                MAX_PER_PAGE,
                self.repo_limit
            );
        }
        Ok(())
    }

    /// ユースケースに渡す実行パラメータへ変換
    pub fn to_collect_config(&self, dry_run: bool) -> CollectConfig {
        CollectConfig::new(
            self.topic.clone(),
            self.min_stars,
            self.repo_limit,
            self.store_path.clone(),
            self.report_path.clone(),
            dry_run,
        )
    }
}
