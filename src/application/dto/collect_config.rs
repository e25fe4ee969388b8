//! # Collect Configuration DTO
//!
//! 1回の収集処理に必要な実行パラメータ

/// 収集設定
///
/// オーケストレータに明示的に渡される実行パラメータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectConfig {
    /// 検索対象のトピック（例: "machine-learning"）
    pub topic: String,
    /// 最小スター数
    pub min_stars: u64,
    /// 保持・取得するリポジトリの最大件数
    pub repo_limit: usize,
    /// レコードストア（JSON）のパス
    pub store_path: String,
    /// レポート（Markdown）のパス
    pub report_path: String,
    /// trueの場合はファイルを書き込まない
    pub dry_run: bool,
}

impl CollectConfig {
    /// 新しい収集設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use repo_collector::application::dto::collect_config::CollectConfig;
    ///
    /// let config = CollectConfig::new(
    ///     "machine-learning".to_string(),
    ///     100,
    ///     10,
    ///     "repos.json".to_string(),
    ///     "README.md".to_string(),
    ///     false,
    /// );
    ///
    /// assert_eq!(config.repo_limit, 10);
    /// assert!(!config.dry_run);
    /// ```
    pub fn new(
        topic: String,
        min_stars: u64,
        repo_limit: usize,
        store_path: String,
        report_path: String,
        dry_run: bool,
    ) -> Self {
        Self {
            topic,
            min_stars,
            repo_limit,
            store_path,
            report_path,
            dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_config_new() {
        let config = CollectConfig::new(
            "rust".to_string(),
            500,
            5,
            "/tmp/repos.json".to_string(),
            "/tmp/README.md".to_string(),
            true,
        );

        assert_eq!(config.topic, "rust");
        assert_eq!(config.min_stars, 500);
        assert_eq!(config.repo_limit, 5);
        assert_eq!(config.store_path, "/tmp/repos.json");
        assert_eq!(config.report_path, "/tmp/README.md");
        assert!(config.dry_run);
    }
}
