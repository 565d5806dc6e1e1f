//! # Upload And Publish Use Case
//!
//! アップロードと公開を連結したパイプライン

use std::sync::Arc;

use crate::application::dto::publish_options::PublishOptions;
use crate::application::progress::{PipelineMilestone, ProgressListener};
use crate::application::use_cases::publish_post::PublishPostUseCase;
use crate::application::use_cases::upload_media::UploadMediaUseCase;
use crate::domain::entities::session::Session;
use crate::domain::error::PlatformResult;
use crate::domain::repositories::media_upload_repository::MediaUploadRepository;
use crate::domain::repositories::post_repository::PostRepository;

/// パイプラインの実行結果
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// アップロードされたメディアのUUID
    pub media_uuid: String,
    /// 作成された投稿のID
    pub post_id: String,
}

/// アップロード・公開パイプライン
///
/// メディアをアップロードし、得られたUUIDを添付して投稿を公開する。
/// アップロードが失敗した場合、公開は実行されない
pub struct UploadAndPublishUseCase<M: MediaUploadRepository, P: PostRepository> {
    upload: Arc<UploadMediaUseCase<M>>,
    publish: Arc<PublishPostUseCase<P>>,
}

impl<M: MediaUploadRepository, P: PostRepository> UploadAndPublishUseCase<M, P> {
    /// 新しいパイプラインを作成
    ///
    /// # Arguments
    ///
    /// * `upload` - アップロードユースケース
    /// * `publish` - 公開ユースケース
    pub fn new(upload: Arc<UploadMediaUseCase<M>>, publish: Arc<PublishPostUseCase<P>>) -> Self {
        Self { upload, publish }
    }

    /// パイプラインを実行する
    ///
    /// # Arguments
    ///
    /// * `session` - 認証済みセッション
    /// * `file_path` - アップロードするファイルのパス
    /// * `options` - 公開オプション（media_uuidはアップロード結果で上書きされる）
    /// * `progress` - 進捗リスナー
    ///
    /// # Returns
    ///
    /// メディアUUIDと投稿IDを含むレポート
    ///
    /// # Errors
    ///
    /// アップロードまたは公開が失敗した場合にエラーを返す
    pub async fn execute(
        &self,
        session: &Session,
        file_path: &str,
        options: &PublishOptions,
        progress: &dyn ProgressListener,
    ) -> PlatformResult<PipelineReport> {
        progress.on_milestone(PipelineMilestone::UploadStarted);
        let media = self.upload.execute(session, file_path).await?;
        progress.on_milestone(PipelineMilestone::UploadComplete);

        let mut publish_options = options.clone();
        publish_options.media_uuid = Some(media.media_uuid.clone());

        let record = self.publish.execute(session, &publish_options).await?;
        progress.on_milestone(PipelineMilestone::PublishComplete);

        Ok(PipelineReport {
            media_uuid: media.media_uuid,
            post_id: record.post_id,
        })
    }
}
