//! # Authenticate Use Case
//!
//! トークンによるログインとクリエイター解決

use std::sync::Arc;

use crate::domain::entities::session::Session;
use crate::domain::error::{PlatformError, PlatformResult};
use crate::domain::repositories::account_repository::AccountRepository;
use crate::domain::repositories::session_repository::SessionRepository;

/// 認証ユースケース
///
/// トークンを検証し、投稿先クリエイターを解決してセッションを保存する。
/// 途中で失敗した場合、セッションは完全に未認証へ戻す
pub struct AuthenticateUseCase<A: AccountRepository, S: SessionRepository> {
    account_repository: Arc<A>,
    session_repository: Arc<S>,
}

impl<A: AccountRepository, S: SessionRepository> AuthenticateUseCase<A, S> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `account_repository` - アカウントリポジトリ
    /// * `session_repository` - セッションリポジトリ
    pub fn new(account_repository: Arc<A>, session_repository: Arc<S>) -> Self {
        Self {
            account_repository,
            session_repository,
        }
    }

    /// トークンでログインする
    ///
    /// トークンの有効性をユーザー取得で確認し、管理クリエイターの先頭を
    /// 投稿先アカウントとして解決する。成功時のみセッションを永続化する
    ///
    /// # Arguments
    ///
    /// * `session` - 更新対象のセッション
    /// * `token_path` - トークンファイルのパス
    /// * `access_token` - アクセストークン
    /// * `refresh_token` - リフレッシュトークン（省略可）
    ///
    /// # Returns
    ///
    /// 解決されたクリエイターの表示ラベル
    ///
    /// # Errors
    ///
    /// トークンが空・無効、またはクリエイターが見つからない場合にエラーを返す。
    /// どのエラーでもセッションは未認証に戻る
    pub async fn execute(
        &self,
        session: &mut Session,
        token_path: &str,
        access_token: &str,
        refresh_token: Option<&str>,
    ) -> PlatformResult<String> {
        let access_token = access_token.trim();
        if access_token.is_empty() {
            return Err(PlatformError::Validation(
                "access token must not be empty".to_string(),
            ));
        }

        session.access_token = Some(access_token.to_string());
        session.refresh_token = refresh_token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string);
        session.account_id = None;

        match self.verify_and_resolve(session).await {
            Ok(label) => {
                self.session_repository.save(token_path, session).await?;
                Ok(label)
            }
            Err(error) => {
                session.clear();
                Err(error)
            }
        }
    }

    /// トークンを検証し、先頭クリエイターを解決する
    async fn verify_and_resolve(&self, session: &mut Session) -> PlatformResult<String> {
        self.account_repository.fetch_current_user(session).await?;

        let creators = self
            .account_repository
            .list_managed_creators(session)
            .await?;

        let creator = creators.into_iter().next().ok_or_else(|| {
            PlatformError::Validation("no managed creators found for this account".to_string())
        })?;

        session.account_id = Some(creator.uuid.clone());
        Ok(creator.label().to_string())
    }
}
