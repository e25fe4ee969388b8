//! GitHub Token
//!
//! 環境変数（と `.env` ファイル）からアクセストークンを読み込む

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// デフォルトのトークン環境変数名
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// カレントディレクトリ（または親ディレクトリ）の `.env` を環境変数に読み込む
///
/// 既に設定されている環境変数は上書きしない。`.env` が存在しない場合は `Ok(None)`。
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => {
            info!("Loaded environment from {}", path.display());
            Ok(Some(path))
        }
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e).context("Failed to load .env file"),
    }
}

/// 指定した `.env` ファイルを環境変数に読み込む
pub fn load_dotenv_from(path: &Path) -> Result<()> {
    dotenvy::from_path(path)
        .context(format!("Failed to load env file: {}", path.display()))
}

/// Reads the access token from the given environment variable
///
/// Unset or blank values yield `None`.
pub fn load_token(var_name: &str) -> Option<String> {
    match std::env::var(var_name) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => {
            warn!(
                "{} is not set, GitHub API requests will be unauthenticated",
                var_name
            );
            None
        }
    }
}
