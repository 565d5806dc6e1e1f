//! # Account Repository Trait
//!
//! ユーザーとクリエイターの照会を抽象化

use async_trait::async_trait;

use crate::domain::entities::account::{Creator, UserProfile};
use crate::domain::entities::session::Session;
use crate::domain::error::PlatformResult;

/// アカウントリポジトリ
///
/// ログイン検証とクリエイター解決を担当するリポジトリ
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// ログイン中ユーザーのプロフィールを取得する
    ///
    /// トークンの有効性確認を兼ねる
    ///
    /// # Errors
    ///
    /// トークンが拒否された場合は `Unauthenticated` を返す
    async fn fetch_current_user(&self, session: &Session) -> PlatformResult<UserProfile>;

    /// 管理対象クリエイターの一覧を取得する
    ///
    /// # Returns
    ///
    /// クリエイターのリスト（APIが返した順序のまま）
    ///
    /// # Errors
    ///
    /// 取得やパースに失敗した場合にエラーを返す
    async fn list_managed_creators(&self, session: &Session) -> PlatformResult<Vec<Creator>>;
}
