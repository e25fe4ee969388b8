//! JSON Record Store Implementation
//!
//! RecordStoreのJSON実装（ランキングをJSON配列ファイルで永続化）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::fs;
use std::path::PathBuf;

use crate::domain::entities::repo_record::RepoRecord;
use crate::domain::repositories::record_store::RecordStore;

/// JSONファイルベースのレコードストア
pub struct JsonRecordStore;

impl JsonRecordStore {
    /// 新しいストアを作成
    pub fn new() -> Self {
        Self
    }

    /// `~` を展開したパス
    fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).into_owned())
    }

    /// ファイルからレコードを読み込む（同期処理）
    fn load_sync(path: &str) -> Result<Vec<RepoRecord>> {
        let path = Self::expand_path(path);

        if !path.exists() {
            info!("No existing repository store at {}, starting empty", path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)
            .context(format!("Failed to read repository store: {}", path.display()))?;

        let records: Vec<RepoRecord> =
            serde_json::from_str(&content).context("Failed to parse repository store JSON")?;

        info!("Loaded {} repositories from {}", records.len(), path.display());

        Ok(records)
    }

    /// ファイルにレコードを保存する（同期処理）
    fn save_sync(path: &str, records: &[RepoRecord]) -> Result<()> {
        let path = Self::expand_path(path);

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create repository store directory")?;
        }

        let json =
            serde_json::to_string_pretty(records).context("Failed to serialize repositories")?;

        fs::write(&path, json)
            .context(format!("Failed to write repository store: {}", path.display()))?;

        info!("Saved {} repositories to {}", records.len(), path.display());

        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonRecordStore {
    async fn load(&self, path: &str) -> Result<Vec<RepoRecord>> {
        let path = path.to_string();
        tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn save(&self, path: &str, records: &[RepoRecord]) -> Result<()> {
        let path = path.to_string();
        let records = records.to_vec();
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &records))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for JsonRecordStore {
    fn default() -> Self {
        Self::new()
    }
}
