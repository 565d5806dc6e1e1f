//! # Audience Mapper Service
//!
//! UI上の公開範囲ラベルをAPI値へ対応付ける

use crate::domain::entities::post::Audience;

/// 公開範囲マッピングサービス
///
/// ポーランド語のUIラベルをAPIの公開範囲へ変換するビジネスロジック
pub struct AudienceMapper;

impl AudienceMapper {
    /// ラベルから公開範囲を解決する
    ///
    /// 未知のラベルは `FollowersAndSubscribers` にフォールバックする
    ///
    /// # Arguments
    ///
    /// * `label` - UI上の公開範囲ラベル
    ///
    /// # Returns
    ///
    /// 対応する公開範囲
    pub fn from_label(label: &str) -> Audience {
        match label {
            "Wszyscy (publiczny)" => Audience::Everyone,
            "Obserwujacy i subskrybenci" => Audience::FollowersAndSubscribers,
            "Tylko subskrybenci" => Audience::SubscribersOnly,
            _ => Audience::FollowersAndSubscribers,
        }
    }
}
