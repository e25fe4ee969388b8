//! CLI Argument Parsing
//!
//! CLIの引数解析

use anyhow::Result;
use clap::Parser;

use crate::adapter::config::Config;

/// トピック別の人気リポジトリを収集してREADMEを更新するCLI
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "repo-collector")]
#[command(about = "Collect top-starred GitHub repositories for a topic", long_about = None)]
pub struct Args {
    /// Config file path (JSON). Defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Topic to search for
    #[arg(long)]
    pub topic: Option<String>,

    /// Minimum star count
    #[arg(long)]
    pub min_stars: Option<u64>,

    /// Number of repositories to keep
    #[arg(long)]
    pub limit: Option<usize>,

    /// Repository store path (JSON)
    #[arg(long)]
    pub store: Option<String>,

    /// Report path (Markdown)
    #[arg(long)]
    pub report: Option<String>,

    /// GitHub API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Dry run mode - don't write any files
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// 設定ファイル（またはデフォルト）にCLI引数を上書きした設定を返す
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(topic) = &self.topic {
            config.topic = topic.clone();
        }
        if let Some(min_stars) = self.min_stars {
            config.min_stars = min_stars;
        }
        if let Some(limit) = self.limit {
            config.repo_limit = limit;
        }
        if let Some(store) = &self.store {
            config.store_path = store.clone();
        }
        if let Some(report) = &self.report {
            config.report_path = report.clone();
        }
        if let Some(api_url) = &self.api_url {
            config.api_base_url = api_url.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.request_timeout_secs = timeout_secs;
        }

        config.validate()?;
        Ok(config)
    }
}
