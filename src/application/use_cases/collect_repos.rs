//! # Collect Repos Use Case
//!
//! 検索 → 既存レコード読み込み → マージ → 保存・レポート更新

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use log::info;
use std::sync::Arc;

use crate::application::dto::collect_config::CollectConfig;
use crate::domain::repositories::record_store::RecordStore;
use crate::domain::repositories::report_repository::ReportRepository;
use crate::domain::repositories::search_repository::SearchRepository;
use crate::domain::services::ranking::RankingService;
use crate::domain::services::report::ReportService;

/// 収集結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectOutcome {
    /// 検索結果が空だった（何も書き込まない）
    NothingFound,
    /// 新規リポジトリがなかった（何も書き込まない）
    NoChanges,
    /// 新規リポジトリが見つかった
    Updated {
        /// 追加された新規リポジトリ数
        added: usize,
        /// 保存されたランキングの件数
        total: usize,
        /// ファイルを書き込んだかどうか（dry-runではfalse）
        written: bool,
    },
}

/// リポジトリ収集ユースケース
pub struct CollectReposUseCase<S: SearchRepository, R: RecordStore, P: ReportRepository> {
    search_repository: Arc<S>,
    record_store: Arc<R>,
    report_repository: Arc<P>,
}

impl<S: SearchRepository, R: RecordStore, P: ReportRepository> CollectReposUseCase<S, R, P> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `search_repository` - 検索リポジトリ
    /// * `record_store` - レコードストア
    /// * `report_repository` - レポートリポジトリ
    pub fn new(search_repository: Arc<S>, record_store: Arc<R>, report_repository: Arc<P>) -> Self {
        Self {
            search_repository,
            record_store,
            report_repository,
        }
    }

    /// 収集処理を実行
    ///
    /// # Arguments
    ///
    /// * `config` - 収集設定
    /// * `generated_at` - レポートに記載する生成時刻
    ///
    /// # Errors
    ///
    /// 通信・ストアの読み書き・レポートの書き込みに失敗した場合にエラーを返す
    pub async fn execute(
        &self,
        config: &CollectConfig,
        generated_at: NaiveDateTime,
    ) -> Result<CollectOutcome> {
        let fetched = self
            .search_repository
            .search(&config.topic, config.min_stars, config.repo_limit)
            .await
            .context("Failed to search repositories")?;

        if fetched.is_empty() {
            info!("Search returned no repositories");
            return Ok(CollectOutcome::NothingFound);
        }

        let previous = self.record_store.load(&config.store_path).await?;
        info!(
            "Fetched {} repositories, {} previously stored",
            fetched.len(),
            previous.len()
        );

        let merged = RankingService::merge(&previous, &fetched, config.repo_limit);
        if !merged.has_new() {
            return Ok(CollectOutcome::NoChanges);
        }

        let added = merged.new_unique.len();
        let total = merged.all.len();

        if config.dry_run {
            info!("Dry run: skipping writes of {} and {}", config.store_path, config.report_path);
            return Ok(CollectOutcome::Updated {
                added,
                total,
                written: false,
            });
        }

        self.record_store.save(&config.store_path, &merged.all).await?;

        let report = ReportService::render(&config.topic, &merged.all, generated_at);
        self.report_repository
            .write(&config.report_path, &report)
            .await?;

        Ok(CollectOutcome::Updated {
            added,
            total,
            written: true,
        })
    }
}
