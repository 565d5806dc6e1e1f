//! # Generate Caption Use Case
//!
//! メディアファイルからのキャプション生成

use std::path::Path;
use std::sync::Arc;

use log::info;

use crate::domain::entities::caption::CaptionStyle;
use crate::domain::entities::media::MediaKind;
use crate::domain::error::{PlatformError, PlatformResult};
use crate::domain::repositories::caption_generator::CaptionGenerator;
use crate::domain::services::media_classifier::MediaClassifier;

/// キャプション生成ユースケース
///
/// 画像は内容を見てキャプションを作り、動画はスタイルのみから作る
pub struct GenerateCaptionUseCase<G: CaptionGenerator> {
    generator: Arc<G>,
}

impl<G: CaptionGenerator> GenerateCaptionUseCase<G> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `generator` - キャプション生成器
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    /// ファイルに合わせたキャプションを生成する
    ///
    /// # Arguments
    ///
    /// * `file_path` - メディアファイルのパス
    /// * `style` - キャプションのスタイル
    ///
    /// # Returns
    ///
    /// 生成されたキャプション
    ///
    /// # Errors
    ///
    /// 画像の読み込み失敗、または生成器の失敗時にエラーを返す
    pub async fn execute(&self, file_path: &str, style: &CaptionStyle) -> PlatformResult<String> {
        let path = Path::new(file_path);

        match MediaClassifier::classify(path) {
            MediaKind::Video => {
                info!("Generating caption for video");
                self.generator.caption_for_video(style).await
            }
            MediaKind::Image => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|e| PlatformError::filesystem("read", path, e))?;
                let mime_type = MediaClassifier::image_mime_type(path);
                info!("Generating caption for image ({mime_type})");
                self.generator.caption_for_image(&bytes, mime_type, style).await
            }
        }
    }
}
