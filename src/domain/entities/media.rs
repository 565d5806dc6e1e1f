//! # Media Entities
//!
//! メディア種別とマルチパートアップロードの中間状態

/// メディア種別
///
/// アップロード作成時に API へ渡す分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// APIリクエストボディで使う文字列表現を返す
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// 作成済みアップロードセッション
///
/// create ステップが発行するアップロードID。以降の sign / complete は
/// このIDに対して行われる
#[derive(Debug, Clone)]
pub struct UploadSession {
    pub upload_id: String,
    pub media_kind: MediaKind,
}

/// 署名付きアップロード先
///
/// sign ステップが返す一時URL。認証ヘッダなしの直接PUTに使う
#[derive(Debug, Clone)]
pub struct SignedTarget {
    pub url: String,
}

/// 転送済みパート
///
/// complete ステップへ渡すパート番号とETagの組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPart {
    pub part_number: u32,
    pub e_tag: String,
}

/// 完成したメディアオブジェクト
///
/// complete ステップが返す、投稿に添付可能なメディアUUID
#[derive(Debug, Clone)]
pub struct MediaObject {
    pub media_uuid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_wire_str() {
        assert_eq!(MediaKind::Image.as_wire_str(), "image");
        assert_eq!(MediaKind::Video.as_wire_str(), "video");
    }
}
