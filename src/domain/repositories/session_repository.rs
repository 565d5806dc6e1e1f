//! # Session Repository Trait
//!
//! 認証セッションの永続化を抽象化

use async_trait::async_trait;

use crate::domain::entities::session::Session;
use crate::domain::error::PlatformResult;

/// セッションリポジトリ
///
/// トークンファイルへのセッションの読み書きを担当するリポジトリ
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// セッションを読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - トークンファイルのパス
    ///
    /// # Returns
    ///
    /// 保存されていたセッション。ファイルが存在しない場合は未認証セッション
    ///
    /// # Errors
    ///
    /// ファイルの読み込みやパースに失敗した場合にエラーを返す
    async fn load(&self, path: &str) -> PlatformResult<Session>;

    /// セッションを保存する
    ///
    /// # Arguments
    ///
    /// * `path` - トークンファイルのパス
    /// * `session` - 保存するセッション
    ///
    /// # Errors
    ///
    /// ファイルの書き込みに失敗した場合にエラーを返す
    async fn save(&self, path: &str, session: &Session) -> PlatformResult<()>;
}
