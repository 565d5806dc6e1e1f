//! # Post Entities
//!
//! 投稿ドラフトと公開対象範囲

/// 投稿の公開対象範囲
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// 全体公開
    Everyone,
    /// フォロワーとサブスクライバー
    FollowersAndSubscribers,
    /// サブスクライバーのみ
    SubscribersOnly,
}

impl Audience {
    /// APIリクエストボディで使う文字列表現を返す
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            Audience::Everyone => "everyone",
            Audience::FollowersAndSubscribers => "followers-and-subscribers",
            Audience::SubscribersOnly => "subscribers-only",
        }
    }
}

/// 投稿ドラフト
///
/// 公開リクエストの入力。メディアは添付なし（テキストのみ）も許される
#[derive(Debug, Clone)]
pub struct PostDraft {
    /// 投稿本文（トリム済み・非空）
    pub text: String,
    /// 公開対象範囲
    pub audience: Audience,
    /// 添付するメディアUUID（空なら添付なし）
    pub media_uuids: Vec<String>,
    /// 予約公開日時（ISO 8601文字列をそのまま渡す）
    pub scheduled_at: Option<String>,
}

/// 公開済み投稿
///
/// API が発行した投稿ID
#[derive(Debug, Clone)]
pub struct PostRecord {
    pub post_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audience_wire_str() {
        assert_eq!(Audience::Everyone.as_wire_str(), "everyone");
        assert_eq!(
            Audience::FollowersAndSubscribers.as_wire_str(),
            "followers-and-subscribers"
        );
        assert_eq!(Audience::SubscribersOnly.as_wire_str(), "subscribers-only");
    }
}
