//! GitHub API Errors
//!
//! GitHub API呼び出しのエラー分類

use thiserror::Error;

/// GitHub API呼び出しのエラー
#[derive(Debug, Error)]
pub enum GithubError {
    /// 200以外のステータスが返された
    #[error("GitHub API returned unexpected status {0}")]
    UnexpectedStatus(u16),

    /// 通信エラー（接続失敗・タイムアウトなど）
    #[error("GitHub API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// レスポンスボディのJSONが不正
    #[error("Failed to decode GitHub API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GithubError {
    /// 失敗ステータスなど、空の結果として扱ってよいエラーかどうか
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GithubError::UnexpectedStatus(_))
    }
}
