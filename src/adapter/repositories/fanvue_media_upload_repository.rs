//! Fanvue Media Upload Repository Implementation
//!
//! MediaUploadRepositoryのFanvue API実装

use async_trait::async_trait;
use std::sync::Arc;

use crate::adapter::fanvue::client::{ApiMethod, FanvueExecutor};
use crate::adapter::fanvue::models::{
    CompleteUploadRequest, CompleteUploadResponse, CompletedPart, CreateUploadRequest,
    CreateUploadResponse, SignPartRequest, SignPartResponse,
};
use crate::domain::entities::media::{
    MediaKind, MediaObject, SignedTarget, UploadPart, UploadSession,
};
use crate::domain::entities::session::Session;
use crate::domain::error::{PlatformError, PlatformResult};
use crate::domain::repositories::media_upload_repository::MediaUploadRepository;

/// Fanvueメディアアップロードリポジトリ
pub struct FanvueMediaUploadRepository<E: FanvueExecutor> {
    executor: Arc<E>,
}

impl<E: FanvueExecutor> FanvueMediaUploadRepository<E> {
    /// 新しいリポジトリを作成
    pub fn new(executor: Arc<E>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl<E: FanvueExecutor> MediaUploadRepository for FanvueMediaUploadRepository<E> {
    async fn create_upload(
        &self,
        session: &Session,
        name: &str,
        filename: &str,
        kind: MediaKind,
    ) -> PlatformResult<UploadSession> {
        let request = CreateUploadRequest {
            name: name.to_string(),
            filename: filename.to_string(),
            media_type: kind.as_wire_str().to_string(),
        };

        let body = serde_json::to_value(&request)
            .map_err(|e| PlatformError::parse("create upload request", e.to_string()))?;

        let value = self
            .executor
            .request(
                session,
                ApiMethod::Post,
                "/media/upload/multipart/create",
                Some(body),
            )
            .await?;

        let response: CreateUploadResponse = serde_json::from_value(value)
            .map_err(|e| PlatformError::parse("create upload response", e.to_string()))?;

        Ok(UploadSession {
            upload_id: response.upload_id,
            media_kind: kind,
        })
    }

    async fn sign_part(
        &self,
        session: &Session,
        upload: &UploadSession,
        part_number: u32,
    ) -> PlatformResult<SignedTarget> {
        let request = SignPartRequest {
            upload_id: upload.upload_id.clone(),
            part_number,
        };

        let body = serde_json::to_value(&request)
            .map_err(|e| PlatformError::parse("sign part request", e.to_string()))?;

        let value = self
            .executor
            .request(
                session,
                ApiMethod::Post,
                "/media/upload/multipart/sign",
                Some(body),
            )
            .await?;

        let response: SignPartResponse = serde_json::from_value(value)
            .map_err(|e| PlatformError::parse("sign part response", e.to_string()))?;

        Ok(SignedTarget { url: response.url })
    }

    async fn transfer(&self, target: &SignedTarget, content: Vec<u8>) -> PlatformResult<String> {
        let outcome = self.executor.put_binary(&target.url, content).await?;

        if outcome.status != 200 && outcome.status != 201 {
            return Err(PlatformError::Http {
                status: outcome.status,
                body: String::new(),
            });
        }

        Ok(outcome.e_tag.unwrap_or_default())
    }

    async fn complete_upload(
        &self,
        session: &Session,
        upload: &UploadSession,
        parts: Vec<UploadPart>,
    ) -> PlatformResult<MediaObject> {
        let request = CompleteUploadRequest {
            upload_id: upload.upload_id.clone(),
            parts: parts
                .into_iter()
                .map(|part| CompletedPart {
                    part_number: part.part_number,
                    e_tag: part.e_tag,
                })
                .collect(),
        };

        let body = serde_json::to_value(&request)
            .map_err(|e| PlatformError::parse("complete upload request", e.to_string()))?;

        let value = self
            .executor
            .request(
                session,
                ApiMethod::Post,
                "/media/upload/multipart/complete",
                Some(body),
            )
            .await?;

        let response: CompleteUploadResponse = serde_json::from_value(value)
            .map_err(|e| PlatformError::parse("complete upload response", e.to_string()))?;

        Ok(MediaObject {
            media_uuid: response.uuid,
        })
    }
}
