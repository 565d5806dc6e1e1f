//! # Domain Error
//!
//! プラットフォーム操作の型付きエラー分類

use std::path::PathBuf;

use thiserror::Error;

/// プラットフォーム操作の結果型
pub type PlatformResult<T> = Result<T, PlatformError>;

/// プラットフォーム操作のエラー分類
///
/// 呼び出し側が失敗の種類ごとに分岐できるよう、
/// 認証・HTTP・ファイルシステム・パース・検証を区別する
#[derive(Debug, Error)]
pub enum PlatformError {
    /// アクセストークンが未設定、または API がトークンを拒否した
    #[error("not authenticated: access token is missing or rejected")]
    Unauthenticated,

    /// API が 2xx 以外のステータスを返した（401 を除く）
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// ローカルファイルの読み書きに失敗した
    #[error("I/O error while {operation} at {path}: {source}")]
    Filesystem {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// レスポンスや生成物のデシリアライズに失敗した
    #[error("failed to parse {context}: {message}")]
    Parse { context: &'static str, message: String },

    /// 操作の前提条件が満たされていない
    #[error("validation failed: {0}")]
    Validation(String),

    /// HTTPリクエスト自体の送信に失敗した（接続エラー等）
    #[error("request failed: {0}")]
    Request(String),
}

impl PlatformError {
    #[must_use]
    pub fn filesystem(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Filesystem {
            operation,
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn parse(context: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            context,
            message: message.into(),
        }
    }

    /// HTTPステータスに応じてエラーへ変換する
    ///
    /// 401 は認証エラー、その他の非 2xx はステータスとボディをそのまま保持する
    #[must_use]
    pub fn from_status(status: u16, body: String) -> Self {
        if status == 401 {
            Self::Unauthenticated
        } else {
            Self::Http { status, body }
        }
    }
}

impl From<reqwest::Error> for PlatformError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(error.to_string())
    }
}
