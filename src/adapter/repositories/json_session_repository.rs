//! JSON Session Repository Implementation
//!
//! SessionRepositoryのJSON実装（トークンをJSONファイルで永続化）

use async_trait::async_trait;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::entities::session::Session;
use crate::domain::error::{PlatformError, PlatformResult};
use crate::domain::repositories::session_repository::SessionRepository;

/// JSONファイルベースのセッションリポジトリ
pub struct JsonSessionRepository;

/// セッション（JSON永続化用の内部表現）
///
/// キー名は既存のトークンファイルと互換にする
#[derive(Debug, Deserialize, Serialize)]
struct SessionJson {
    access_token: Option<String>,
    refresh_token: Option<String>,
    creator_uuid: Option<String>,
}

impl JsonSessionRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ファイルからセッションを読み込む（同期処理）
    fn load_sync(path: &str) -> PlatformResult<SessionJson> {
        let path = Path::new(path);

        if !path.exists() {
            info!("No saved session found, starting unauthenticated");
            return Ok(SessionJson {
                access_token: None,
                refresh_token: None,
                creator_uuid: None,
            });
        }

        let content = fs::read_to_string(path)
            .map_err(|e| PlatformError::filesystem("reading", path, e))?;

        let session: SessionJson = serde_json::from_str(&content)
            .map_err(|e| PlatformError::parse("token file JSON", e.to_string()))?;

        info!("Loaded saved session from {}", path.display());

        Ok(session)
    }

    /// ファイルにセッションを保存する（同期処理）
    fn save_sync(path: &str, session: &SessionJson) -> PlatformResult<()> {
        let path = Path::new(path);

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| PlatformError::filesystem("creating directory", parent, e))?;
            }
        }

        let json = serde_json::to_string_pretty(session)
            .map_err(|e| PlatformError::parse("token file JSON", e.to_string()))?;

        fs::write(path, json).map_err(|e| PlatformError::filesystem("writing", path, e))?;

        info!("Saved session to {}", path.display());

        Ok(())
    }

    /// JSON形式からDomain形式に変換
    fn to_domain_session(json_session: SessionJson) -> Session {
        Session {
            access_token: json_session.access_token,
            refresh_token: json_session.refresh_token,
            account_id: json_session.creator_uuid,
        }
    }

    /// Domain形式からJSON形式に変換
    fn from_domain_session(session: &Session) -> SessionJson {
        SessionJson {
            access_token: session.access_token.clone(),
            refresh_token: session.refresh_token.clone(),
            creator_uuid: session.account_id.clone(),
        }
    }
}

#[async_trait]
impl SessionRepository for JsonSessionRepository {
    async fn load(&self, path: &str) -> PlatformResult<Session> {
        let path = path.to_string();
        let json_session = tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| PlatformError::parse("blocking task result", e.to_string()))??;

        Ok(Self::to_domain_session(json_session))
    }

    async fn save(&self, path: &str, session: &Session) -> PlatformResult<()> {
        let path = path.to_string();
        let json_session = Self::from_domain_session(session);
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &json_session))
            .await
            .map_err(|e| PlatformError::parse("blocking task result", e.to_string()))??;

        Ok(())
    }
}

impl Default for JsonSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_nonexistent_file() {
        let result = JsonSessionRepository::load_sync("/nonexistent/path/tokens.json");
        assert!(result.is_ok());

        let session = result.unwrap();
        assert!(session.access_token.is_none());
        assert!(session.refresh_token.is_none());
        assert!(session.creator_uuid.is_none());
    }

    #[test]
    fn test_load_valid_session() {
        let mut file = NamedTempFile::new().unwrap();
        let json = r#"{
            "access_token": "token-abc",
            "refresh_token": "refresh-xyz",
            "creator_uuid": "creator-001"
        }"#;
        file.write_all(json.as_bytes()).unwrap();

        let session = JsonSessionRepository::load_sync(file.path().to_str().unwrap()).unwrap();

        assert_eq!(session.access_token.unwrap(), "token-abc");
        assert_eq!(session.refresh_token.unwrap(), "refresh-xyz");
        assert_eq!(session.creator_uuid.unwrap(), "creator-001");
    }

    #[test]
    fn test_load_corrupt_file_fails_with_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        let result = JsonSessionRepository::load_sync(file.path().to_str().unwrap());
        assert!(matches!(result, Err(PlatformError::Parse { .. })));
    }

    #[test]
    fn test_save_and_reload_session() {
        let temp_dir = TempDir::new().unwrap();
        let token_path = temp_dir.path().join("nested").join("tokens.json");

        let session = SessionJson {
            access_token: Some("token-abc".to_string()),
            refresh_token: None,
            creator_uuid: Some("creator-001".to_string()),
        };

        JsonSessionRepository::save_sync(token_path.to_str().unwrap(), &session).unwrap();

        let loaded = JsonSessionRepository::load_sync(token_path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.access_token.unwrap(), "token-abc");
        assert!(loaded.refresh_token.is_none());
        assert_eq!(loaded.creator_uuid.unwrap(), "creator-001");
    }

    #[test]
    fn test_to_domain_session_maps_creator_uuid() {
        let json_session = SessionJson {
            access_token: Some("token-abc".to_string()),
            refresh_token: None,
            creator_uuid: Some("creator-001".to_string()),
        };

        let session = JsonSessionRepository::to_domain_session(json_session);

        assert_eq!(session.account_id.unwrap(), "creator-001");
    }

    #[test]
    fn test_from_domain_session_roundtrip() {
        let session = Session {
            access_token: Some("token-abc".to_string()),
            refresh_token: Some("refresh-xyz".to_string()),
            account_id: Some("creator-001".to_string()),
        };

        let json_session = JsonSessionRepository::from_domain_session(&session);

        assert_eq!(json_session.access_token.unwrap(), "token-abc");
        assert_eq!(json_session.refresh_token.unwrap(), "refresh-xyz");
        assert_eq!(json_session.creator_uuid.unwrap(), "creator-001");
    }
}
