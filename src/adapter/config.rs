//! Configuration
//!
//! JSON設定ファイルの読み込みとデフォルト値

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_api_base() -> String {
    "https://api.fanvue.com".to_string()
}

fn default_api_version() -> String {
    "2025-06-26".to_string()
}

fn default_token_file() -> String {
    "~/.fanpost/tokens.json".to_string()
}

fn default_transfer_timeout_secs() -> u64 {
    120
}

fn default_export_dir() -> String {
    "./pomysly".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o".to_string()
}

/// アプリケーション設定
///
/// 設定ファイルに書かれなかった項目はデフォルト値で埋める
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Fanvue APIのベースURL
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// X-Fanvue-API-Version ヘッダの値
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// トークンファイルのパス（チルダ展開対応）
    #[serde(default = "default_token_file")]
    pub token_file: String,
    /// バイナリ転送のタイムアウト（秒）
    #[serde(default = "default_transfer_timeout_secs")]
    pub transfer_timeout_secs: u64,
    /// CSVエクスポートの出力先ディレクトリ
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    /// OpenAI APIキー（未設定なら環境変数 OPENAI_API_KEY を参照）
    #[serde(default)]
    pub openai_api_key: Option<String>,
    /// キャプション・計画生成に使うモデル
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_version: default_api_version(),
            token_file: default_token_file(),
            transfer_timeout_secs: default_transfer_timeout_secs(),
            export_dir: default_export_dir(),
            openai_api_key: None,
            openai_model: default_openai_model(),
        }
    }
}

impl Config {
    /// 設定ファイルを読み込む
    ///
    /// ファイルが存在しない場合は全項目デフォルトの設定を返す
    ///
    /// # Arguments
    ///
    /// * `path` - 設定ファイルのパス
    ///
    /// # Errors
    ///
    /// ファイルの読み込みやパースに失敗した場合にエラーを返す
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path).to_string();

        if !Path::new(&expanded).exists() {
            info!("No config file at {expanded}, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&expanded).context("Failed to read config file")?;
        let config: Config = serde_json::from_str(&content).context("Failed to parse config JSON")?;

        Ok(config)
    }

    /// チルダ展開済みのトークンファイルパスを返す
    pub fn token_file_path(&self) -> String {
        shellexpand::tilde(&self.token_file).to_string()
    }

    /// OpenAI APIキーを解決する
    ///
    /// 設定ファイルの値を優先し、なければ環境変数 OPENAI_API_KEY を読む
    pub fn openai_key(&self) -> Option<String> {
        self.openai_api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_nonexistent_file_uses_defaults() {
        let config = Config::load("/nonexistent/fanpost.json").unwrap();

        assert_eq!(config.api_base, "https://api.fanvue.com");
        assert_eq!(config.api_version, "2025-06-26");
        assert_eq!(config.transfer_timeout_secs, 120);
        assert_eq!(config.openai_model, "gpt-4o");
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        let json = r#"{"api_base": "https://staging.fanvue.test"}"#;
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.api_base, "https://staging.fanvue.test");
        assert_eq!(config.api_version, "2025-06-26");
        assert_eq!(config.export_dir, "./pomysly");
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        assert!(Config::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_token_file_path_expands_tilde() {
        let config = Config {
            token_file: "~/.fanpost/tokens.json".to_string(),
            ..Config::default()
        };

        let expanded = config.token_file_path();
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with(".fanpost/tokens.json"));
    }

    #[test]
    fn test_openai_key_prefers_config_value() {
        let config = Config {
            openai_api_key: Some("sk-config".to_string()),
            ..Config::default()
        };

        assert_eq!(config.openai_key().unwrap(), "sk-config");
    }

    #[test]
    fn test_openai_key_ignores_blank_value() {
        let config = Config {
            openai_api_key: Some("   ".to_string()),
            ..Config::default()
        };

        // 空白だけのキーは未設定扱い（環境変数次第でNoneまたは実際の値）
        let resolved = config.openai_key();
        if let Some(key) = resolved {
            assert!(!key.trim().is_empty());
        }
    }
}
