//! Fanvue Post Repository Implementation
//!
//! PostRepositoryのFanvue API実装

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::adapter::fanvue::client::{ApiMethod, FanvueExecutor};
use crate::adapter::fanvue::models::{CreatePostRequest, CreatePostResponse};
use crate::domain::entities::post::{PostDraft, PostRecord};
use crate::domain::entities::session::Session;
use crate::domain::error::{PlatformError, PlatformResult};
use crate::domain::repositories::post_repository::PostRepository;

/// Fanvue投稿リポジトリ
pub struct FanvuePostRepository<E: FanvueExecutor> {
    executor: Arc<E>,
}

impl<E: FanvueExecutor> FanvuePostRepository<E> {
    /// 新しいリポジトリを作成
    pub fn new(executor: Arc<E>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl<E: FanvueExecutor> PostRepository for FanvuePostRepository<E> {
    async fn create_post(
        &self,
        session: &Session,
        account_id: &str,
        draft: &PostDraft,
    ) -> PlatformResult<PostRecord> {
        let request = CreatePostRequest {
            text: draft.text.clone(),
            audience: draft.audience.as_wire_str().to_string(),
            media_uuids: if draft.media_uuids.is_empty() {
                None
            } else {
                Some(draft.media_uuids.clone())
            },
            scheduled_at: draft.scheduled_at.clone(),
        };

        let body = serde_json::to_value(&request)
            .map_err(|e| PlatformError::parse("create post request", e.to_string()))?;

        let path = format!("/creators/{account_id}/posts");
        let value = self
            .executor
            .request(session, ApiMethod::Post, &path, Some(body))
            .await?;

        let response: CreatePostResponse = serde_json::from_value(value)
            .map_err(|e| PlatformError::parse("create post response", e.to_string()))?;

        Ok(PostRecord {
            post_id: response.uuid,
        })
    }

    async fn list_posts(
        &self,
        session: &Session,
        account_id: &str,
        limit: u32,
    ) -> PlatformResult<Value> {
        let path = format!("/creators/{account_id}/posts?limit={limit}");
        self.executor
            .request(session, ApiMethod::Get, &path, None)
            .await
    }
}
