//! # Publish Post Use Case
//!
//! 投稿の作成と公開

use std::sync::Arc;

use log::info;

use crate::application::dto::publish_options::PublishOptions;
use crate::domain::entities::post::{PostDraft, PostRecord};
use crate::domain::entities::session::Session;
use crate::domain::error::{PlatformError, PlatformResult};
use crate::domain::repositories::post_repository::PostRepository;
use crate::domain::services::audience_mapper::AudienceMapper;

/// 投稿公開ユースケース
///
/// 公開オプションをAPI向けのドラフトに変換し、クリエイター配下へ投稿する
pub struct PublishPostUseCase<P: PostRepository> {
    post_repository: Arc<P>,
}

impl<P: PostRepository> PublishPostUseCase<P> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `post_repository` - 投稿リポジトリ
    pub fn new(post_repository: Arc<P>) -> Self {
        Self { post_repository }
    }

    /// 投稿を公開する
    ///
    /// # Arguments
    ///
    /// * `session` - 認証済みセッション（投稿先クリエイターが解決済み）
    /// * `options` - 公開オプション
    ///
    /// # Returns
    ///
    /// 作成された投稿レコード
    ///
    /// # Errors
    ///
    /// 未認証、クリエイター未解決、本文が空の場合にエラーを返す
    pub async fn execute(
        &self,
        session: &Session,
        options: &PublishOptions,
    ) -> PlatformResult<PostRecord> {
        session.bearer_token()?;
        let account_id = session.require_account_id()?.to_string();

        let text = options.caption.trim();
        if text.is_empty() {
            return Err(PlatformError::Validation(
                "post caption must not be empty".to_string(),
            ));
        }

        let audience = AudienceMapper::from_label(&options.audience_label);

        let draft = PostDraft {
            text: text.to_string(),
            audience,
            media_uuids: options.media_uuid.iter().cloned().collect(),
            scheduled_at: options.scheduled_at.clone(),
        };

        let record = self
            .post_repository
            .create_post(session, &account_id, &draft)
            .await?;

        info!("Post published: {}", record.post_id);
        Ok(record)
    }
}
