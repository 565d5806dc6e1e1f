//! # Upload Media Use Case
//!
//! メディアファイルのマルチパートアップロード

use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use crate::domain::entities::media::{MediaObject, UploadPart};
use crate::domain::entities::session::Session;
use crate::domain::error::{PlatformError, PlatformResult};
use crate::domain::repositories::media_upload_repository::MediaUploadRepository;
use crate::domain::services::media_classifier::MediaClassifier;

/// アップロードユースケース
///
/// アップロードセッション作成、署名付きURL取得、バイト転送、完了確定を
/// この順で実行する。単一パート（パート番号1）で転送する
pub struct UploadMediaUseCase<M: MediaUploadRepository> {
    media_repository: Arc<M>,
}

impl<M: MediaUploadRepository> UploadMediaUseCase<M> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `media_repository` - メディアアップロードリポジトリ
    pub fn new(media_repository: Arc<M>) -> Self {
        Self { media_repository }
    }

    /// ファイルをアップロードしてメディアUUIDを得る
    ///
    /// ファイル読み込みはネットワーク呼び出しの前に行うため、
    /// 存在しないファイルでリモートセッションを作ることはない
    ///
    /// # Arguments
    ///
    /// * `session` - 認証済みセッション
    /// * `file_path` - アップロードするファイルのパス
    ///
    /// # Returns
    ///
    /// 確定したメディアオブジェクト
    ///
    /// # Errors
    ///
    /// 未認証、ファイル名が取れない、読み込み失敗、API失敗時にエラーを返す
    pub async fn execute(&self, session: &Session, file_path: &str) -> PlatformResult<MediaObject> {
        session.bearer_token()?;

        let path = Path::new(file_path);
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                PlatformError::Validation(format!("cannot derive file name from: {file_path}"))
            })?;

        let media_kind = MediaClassifier::classify(path);

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| PlatformError::filesystem("read", path, e))?;

        info!(
            "Uploading {} ({} bytes, {})",
            file_name,
            bytes.len(),
            media_kind.as_wire_str()
        );

        let upload = self
            .media_repository
            .create_upload(session, &file_name, &file_name, media_kind)
            .await?;
        debug!("Upload session created: {}", upload.upload_id);

        let target = self.media_repository.sign_part(session, &upload, 1).await?;

        let raw_e_tag = self.media_repository.transfer(&target, bytes).await?;
        // 署名付きURLのETagは引用符付きで返ることがある
        let e_tag = raw_e_tag.trim_matches('"').to_string();

        let media = self
            .media_repository
            .complete_upload(
                session,
                &upload,
                vec![UploadPart {
                    part_number: 1,
                    e_tag,
                }],
            )
            .await?;

        info!("Upload complete: media uuid {}", media.media_uuid);
        Ok(media)
    }
}
