//! # Post Repository Trait
//!
//! 投稿の作成と一覧取得を抽象化

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::post::{PostDraft, PostRecord};
use crate::domain::entities::session::Session;
use crate::domain::error::PlatformResult;

/// 投稿リポジトリ
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// 投稿を作成する
    ///
    /// # Arguments
    ///
    /// * `session` - 認証セッション
    /// * `account_id` - 投稿先クリエイターのアカウントID
    /// * `draft` - 投稿ドラフト
    ///
    /// # Returns
    ///
    /// 発行された投稿ID
    ///
    /// # Errors
    ///
    /// APIがエラーを返した場合にエラーを返す
    async fn create_post(
        &self,
        session: &Session,
        account_id: &str,
        draft: &PostDraft,
    ) -> PlatformResult<PostRecord>;

    /// 直近の投稿一覧を取得する
    ///
    /// 表示用途のため、レスポンスボディをそのまま返す
    ///
    /// # Arguments
    ///
    /// * `session` - 認証セッション
    /// * `account_id` - クリエイターのアカウントID
    /// * `limit` - 取得件数の上限
    async fn list_posts(
        &self,
        session: &Session,
        account_id: &str,
        limit: u32,
    ) -> PlatformResult<Value>;
}
