//! # Session Entity
//!
//! 認証セッション（アクセストークン・リフレッシュトークン・アカウントID）

use crate::domain::error::{PlatformError, PlatformResult};

/// 認証セッション
///
/// ログイン状態を表すエンティティ。全フィールドが `None` のとき未認証。
/// アカウントIDはログイン成功時にクリエイター解決の結果として設定される
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Bearer認証に使うアクセストークン
    pub access_token: Option<String>,
    /// トークン更新用のリフレッシュトークン
    pub refresh_token: Option<String>,
    /// 投稿先クリエイターのアカウントID
    pub account_id: Option<String>,
}

impl Session {
    /// 未認証の空セッションを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 認証済みかどうかを返す
    ///
    /// アクセストークンが設定されていれば認証済みとみなす
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Bearer認証用のアクセストークンを返す
    ///
    /// # Errors
    ///
    /// トークンが未設定の場合は `Unauthenticated` を返す
    pub fn bearer_token(&self) -> PlatformResult<&str> {
        self.access_token
            .as_deref()
            .ok_or(PlatformError::Unauthenticated)
    }

    /// 投稿先アカウントIDを返す
    ///
    /// # Errors
    ///
    /// アカウントが未解決の場合は `Validation` を返す
    pub fn require_account_id(&self) -> PlatformResult<&str> {
        self.account_id.as_deref().ok_or_else(|| {
            PlatformError::Validation("no creator account resolved for this session".to_string())
        })
    }

    /// セッションを完全に未認証状態へ戻す
    ///
    /// ログイン検証の途中で失敗した場合のロールバックに使う
    pub fn clear(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
        self.account_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_unauthenticated() {
        let session = Session::new();

        assert!(!session.is_authenticated());
        assert!(session.access_token.is_none());
        assert!(session.refresh_token.is_none());
        assert!(session.account_id.is_none());
    }

    #[test]
    fn test_is_authenticated_with_token() {
        let session = Session {
            access_token: Some("token-abc".to_string()),
            refresh_token: None,
            account_id: None,
        };

        assert!(session.is_authenticated());
    }

    #[test]
    fn test_bearer_token_returns_token() {
        let session = Session {
            access_token: Some("token-abc".to_string()),
            refresh_token: None,
            account_id: None,
        };

        assert_eq!(session.bearer_token().unwrap(), "token-abc");
    }

    #[test]
    fn test_bearer_token_errors_when_missing() {
        let session = Session::new();

        assert!(matches!(
            session.bearer_token(),
            Err(PlatformError::Unauthenticated)
        ));
    }

    #[test]
    fn test_require_account_id() {
        let session = Session {
            access_token: Some("token-abc".to_string()),
            refresh_token: None,
            account_id: Some("creator-001".to_string()),
        };

        assert_eq!(session.require_account_id().unwrap(), "creator-001");
    }

    #[test]
    fn test_require_account_id_errors_when_unresolved() {
        let session = Session {
            access_token: Some("token-abc".to_string()),
            refresh_token: None,
            account_id: None,
        };

        assert!(matches!(
            session.require_account_id(),
            Err(PlatformError::Validation(_))
        ));
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut session = Session {
            access_token: Some("token-abc".to_string()),
            refresh_token: Some("refresh-xyz".to_string()),
            account_id: Some("creator-001".to_string()),
        };

        session.clear();

        assert_eq!(session, Session::new());
    }
}
