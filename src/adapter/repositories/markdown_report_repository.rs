//! Markdown Report Repository Implementation
//!
//! ReportRepositoryのファイル実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::fs;
use std::path::PathBuf;

use crate::domain::repositories::report_repository::ReportRepository;

/// Markdownファイルに書き出すレポートリポジトリ
pub struct MarkdownReportRepository;

impl MarkdownReportRepository {
    pub fn new() -> Self {
        Self
    }

    fn write_sync(path: &str, content: &str) -> Result<()> {
        let path = PathBuf::from(shellexpand::tilde(path).into_owned());

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create report directory")?;
        }

        fs::write(&path, content)
            .context(format!("Failed to write report: {}", path.display()))?;

        info!("Wrote report to {}", path.display());

        Ok(())
    }
}

#[async_trait]
impl ReportRepository for MarkdownReportRepository {
    async fn write(&self, path: &str, content: &str) -> Result<()> {
        let path = path.to_string();
        let content = content.to_string();
        tokio::task::spawn_blocking(move || Self::write_sync(&path, &content))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for MarkdownReportRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_overwrites_in_full() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README.md");
        fs::write(&path, "old content that is much longer than the new one\n").unwrap();

        MarkdownReportRepository::new()
            .write(path.to_str().unwrap(), "# new\n")
            .await
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# new\n");
    }

    #[test]
    fn test_write_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("docs/README.md");

        MarkdownReportRepository::write_sync(path.to_str().unwrap(), "🌟").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "🌟");
    }
}
