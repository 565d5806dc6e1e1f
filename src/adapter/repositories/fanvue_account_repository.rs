//! Fanvue Account Repository Implementation
//!
//! AccountRepositoryのFanvue API実装

use async_trait::async_trait;
use std::sync::Arc;

use crate::adapter::fanvue::client::{ApiMethod, FanvueExecutor};
use crate::adapter::fanvue::models::{CreatorsEnvelope, UserRecord};
use crate::domain::entities::account::{Creator, UserProfile};
use crate::domain::entities::session::Session;
use crate::domain::error::{PlatformError, PlatformResult};
use crate::domain::repositories::account_repository::AccountRepository;

/// Fanvueアカウントリポジトリ
pub struct FanvueAccountRepository<E: FanvueExecutor> {
    executor: Arc<E>,
}

impl<E: FanvueExecutor> FanvueAccountRepository<E> {
    /// 新しいリポジトリを作成
    pub fn new(executor: Arc<E>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl<E: FanvueExecutor> AccountRepository for FanvueAccountRepository<E> {
    async fn fetch_current_user(&self, session: &Session) -> PlatformResult<UserProfile> {
        let value = self
            .executor
            .request(session, ApiMethod::Get, "/users/me", None)
            .await?;

        let record: UserRecord = serde_json::from_value(value)
            .map_err(|e| PlatformError::parse("user profile response", e.to_string()))?;

        Ok(UserProfile {
            uuid: record.uuid,
            display_name: record.display_name,
        })
    }

    async fn list_managed_creators(&self, session: &Session) -> PlatformResult<Vec<Creator>> {
        let value = self
            .executor
            .request(session, ApiMethod::Get, "/agency/creators", None)
            .await?;

        let envelope: CreatorsEnvelope = serde_json::from_value(value)
            .map_err(|e| PlatformError::parse("creators response", e.to_string()))?;

        Ok(envelope
            .data
            .into_iter()
            .map(|record| Creator {
                uuid: record.uuid,
                display_name: record.display_name,
            })
            .collect())
    }
}
