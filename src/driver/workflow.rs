//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use chrono::Local;
use log::info;
use std::sync::Arc;
use std::time::Duration;

use crate::adapter::auth::load_token;
use crate::adapter::config::Config;
use crate::adapter::github::client::GithubClient;
use crate::adapter::repositories::github_search_repository::GithubSearchRepository;
use crate::adapter::repositories::json_record_store::JsonRecordStore;
use crate::adapter::repositories::markdown_report_repository::MarkdownReportRepository;
use crate::application::use_cases::collect_repos::{CollectOutcome, CollectReposUseCase};

/// ユーザー向けのステータス行
pub fn outcome_message(outcome: &CollectOutcome) -> String {
    match outcome {
        CollectOutcome::NothingFound => "No new repositories found.".to_string(),
        CollectOutcome::NoChanges => "🔄 No new repositories, README unchanged.".to_string(),
        CollectOutcome::Updated {
            added,
            written: true,
            ..
        } => format!("✅ {} new repositories added and README updated.", added),
        CollectOutcome::Updated {
            added,
            total,
            written: false,
        } => format!(
            "✓ Dry-run mode: would add {} new repositories ({} ranked), no files written.",
            added, total
        ),
    }
}

/// Repository Collect Workflow
pub struct CollectWorkflow {
    config: Config,
    use_case: CollectReposUseCase<GithubSearchRepository, JsonRecordStore, MarkdownReportRepository>,
}

impl CollectWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Result<Self> {
        let token = load_token(&config.token_env);
        let client = GithubClient::new(
            config.api_base_url.clone(),
            token,
            Duration::from_secs(config.request_timeout_secs),
        )
        .context("Failed to create GitHub client")?;

        Ok(Self::with_client(config, client))
    }

    /// Create a workflow around an already configured GitHub client
    pub fn with_client(config: Config, client: GithubClient) -> Self {
        let search_repo = Arc::new(GithubSearchRepository::new(client));
        let record_store = Arc::new(JsonRecordStore::new());
        let report_repo = Arc::new(MarkdownReportRepository::new());

        let use_case = CollectReposUseCase::new(search_repo, record_store, report_repo);

        Self { config, use_case }
    }

    /// Execute the collect workflow
    pub async fn execute(&self, dry_run: bool) -> Result<CollectOutcome> {
        info!("Starting repository collector...");
        info!("Dry run: {}", dry_run);

        println!("🚀 Scanning repositories...");
        println!(
            "  Topic: {} (stars >= {}, top {})",
            self.config.topic, self.config.min_stars, self.config.repo_limit
        );

        let collect_config = self.config.to_collect_config(dry_run);
        let outcome = self
            .use_case
            .execute(&collect_config, Local::now().naive_local())
            .await?;

        println!("{}", outcome_message(&outcome));

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_message_nothing_found() {
        assert_eq!(
            outcome_message(&CollectOutcome::NothingFound),
            "No new repositories found."
        );
    }

    #[test]
    fn test_outcome_message_no_changes() {
        assert_eq!(
            outcome_message(&CollectOutcome::NoChanges),
            "🔄 No new repositories, README unchanged."
        );
    }

    #[test]
    fn test_outcome_message_updated() {
        let outcome = CollectOutcome::Updated {
            added: 3,
            total: 10,
            written: true,
        };
        assert_eq!(
            outcome_message(&outcome),
            "✅ 3 new repositories added and README updated."
        );
    }

    #[test]
    fn test_outcome_message_dry_run() {
        let outcome = CollectOutcome::Updated {
            added: 2,
            total: 4,
            written: false,
        };
        assert!(outcome_message(&outcome).contains("would add 2"));
    }

    #[test]
    fn test_new_workflow_with_default_config() {
        assert!(CollectWorkflow::new(Config::default()).is_ok());
    }
}
