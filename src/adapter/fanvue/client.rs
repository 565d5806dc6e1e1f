//! Fanvue Client Abstractions
//!
//! クライアントの抽象化と実装

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, ETAG};
use serde_json::Value;

#[cfg(test)]
use mockall::automock;

use crate::adapter::config::Config;
use crate::domain::entities::session::Session;
use crate::domain::error::{PlatformError, PlatformResult};

/// HTTPメソッド（このAPIで使う範囲のみ）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
}

/// 署名付きURLへのPUT結果
#[derive(Debug, Clone)]
pub struct BinaryPutOutcome {
    /// HTTPステータスコード
    pub status: u16,
    /// レスポンスのETagヘッダ（引用符付きのまま）
    pub e_tag: Option<String>,
}

/// Trait for Fanvue API operations
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FanvueExecutor: Send + Sync {
    /// 認証付きでAPIエンドポイントを呼び出す
    ///
    /// # Arguments
    ///
    /// * `session` - 認証セッション
    /// * `method` - HTTPメソッド
    /// * `path` - ベースURLからの相対パス（`/users/me` など）
    /// * `body` - JSONリクエストボディ
    ///
    /// # Returns
    ///
    /// レスポンスボディのJSON
    ///
    /// # Errors
    ///
    /// 401 は `Unauthenticated`、その他の非 2xx は `Http` を返す
    async fn request(
        &self,
        session: &Session,
        method: ApiMethod,
        path: &str,
        body: Option<Value>,
    ) -> PlatformResult<Value>;

    /// 署名付きURLへバイナリをPUTする
    ///
    /// 認証ヘッダは付けない。転送先はAPI本体とは別のストレージのため
    async fn put_binary(&self, url: &str, content: Vec<u8>) -> PlatformResult<BinaryPutOutcome>;
}

/// Real Fanvue client implementing FanvueExecutor
pub struct FanvueClient {
    http: reqwest::Client,
    api_base: String,
    api_version: String,
    transfer_timeout: Duration,
}

impl FanvueClient {
    /// 設定からクライアントを構築する
    ///
    /// # Errors
    ///
    /// HTTPクライアントの初期化に失敗した場合にエラーを返す
    pub fn new(config: &Config) -> PlatformResult<Self> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            transfer_timeout: Duration::from_secs(config.transfer_timeout_secs),
        })
    }
}

#[async_trait]
impl FanvueExecutor for FanvueClient {
    async fn request(
        &self,
        session: &Session,
        method: ApiMethod,
        path: &str,
        body: Option<Value>,
    ) -> PlatformResult<Value> {
        let token = session.bearer_token()?;
        let url = format!("{}{}", self.api_base, path);

        let mut builder = match method {
            ApiMethod::Get => self.http.get(&url),
            ApiMethod::Post => self.http.post(&url),
        };

        builder = builder
            .bearer_auth(token)
            .header("X-Fanvue-API-Version", &self.api_version);

        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if !(200..300).contains(&status) {
            return Err(PlatformError::from_status(status, text));
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text)
            .map_err(|e| PlatformError::parse("API response body", e.to_string()))
    }

    async fn put_binary(&self, url: &str, content: Vec<u8>) -> PlatformResult<BinaryPutOutcome> {
        let response = self
            .http
            .put(url)
            .timeout(self.transfer_timeout)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(content)
            .send()
            .await?;

        let status = response.status().as_u16();
        let e_tag = response
            .headers()
            .get(ETAG)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        Ok(BinaryPutOutcome { status, e_tag })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = Config {
            api_base: "https://api.fanvue.com/".to_string(),
            ..Config::default()
        };

        let client = FanvueClient::new(&config).unwrap();
        assert_eq!(client.api_base, "https://api.fanvue.com");
    }

    #[tokio::test]
    async fn test_request_without_token_fails_before_network() {
        let client = FanvueClient::new(&Config::default()).unwrap();
        let session = Session::new();

        let result = client
            .request(&session, ApiMethod::Get, "/users/me", None)
            .await;

        assert!(matches!(result, Err(PlatformError::Unauthenticated)));
    }
}
