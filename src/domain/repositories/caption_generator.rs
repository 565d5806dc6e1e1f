//! # Caption Generator Trait
//!
//! キャプション生成を抽象化

use async_trait::async_trait;

use crate::domain::entities::caption::CaptionStyle;
use crate::domain::error::PlatformResult;

/// キャプション生成器
///
/// 生成モデルによるキャプション作成を担当する。
/// 画像は内容を見て、動画はスタイルのみから生成する
#[async_trait]
pub trait CaptionGenerator: Send + Sync {
    /// 画像の内容からキャプションを生成する
    ///
    /// # Arguments
    ///
    /// * `image` - 画像のバイト列
    /// * `mime_type` - 画像のMIMEタイプ
    /// * `style` - 生成スタイル
    ///
    /// # Errors
    ///
    /// 生成APIの呼び出しに失敗した場合にエラーを返す
    async fn caption_for_image(
        &self,
        image: &[u8],
        mime_type: &str,
        style: &CaptionStyle,
    ) -> PlatformResult<String>;

    /// 動画向けキャプションを生成する（映像内容は参照しない）
    async fn caption_for_video(&self, style: &CaptionStyle) -> PlatformResult<String>;
}
