//! # Media Classifier Service
//!
//! ファイル拡張子によるメディア種別の判定

use std::path::Path;

use crate::domain::entities::media::MediaKind;

/// 動画として扱う拡張子（小文字）
const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "mov", "avi", "webm"];

/// メディア分類サービス
///
/// パスの拡張子からアップロード種別とMIMEタイプを決定するビジネスロジック
pub struct MediaClassifier;

impl MediaClassifier {
    /// パスからメディア種別を判定する
    ///
    /// 拡張子の大文字小文字は区別しない。動画拡張子に一致しないものは
    /// すべて画像として扱う
    ///
    /// # Arguments
    ///
    /// * `path` - 判定対象のファイルパス
    ///
    /// # Returns
    ///
    /// メディア種別
    pub fn classify(path: &Path) -> MediaKind {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    /// 画像パスからMIMEタイプを判定する
    ///
    /// 未知の拡張子は `image/jpeg` にフォールバックする
    pub fn image_mime_type(path: &Path) -> &'static str {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => "image/png",
            "gif" => "image/gif",
            "webp" => "image/webp",
            _ => "image/jpeg",
        }
    }
}
