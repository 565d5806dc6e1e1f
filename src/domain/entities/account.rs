//! # Account Entities
//!
//! ログインユーザーと管理対象クリエイターのプロフィール

/// ログイン中ユーザーのプロフィール
///
/// API が返すフィールドは保証されないため全て Option
#[derive(Debug, Clone, Default)]
pub struct UserProfile {
    pub uuid: Option<String>,
    pub display_name: Option<String>,
}

/// 管理対象クリエイター
///
/// エージェンシーアカウントに紐づくクリエイター。
/// 投稿はこのクリエイターのアカウントIDに対して行われる
#[derive(Debug, Clone)]
pub struct Creator {
    pub uuid: String,
    pub display_name: Option<String>,
}

impl Creator {
    /// 表示用ラベルを返す
    ///
    /// 表示名があればそれを、なければUUIDを返す
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_prefers_display_name() {
        let creator = Creator {
            uuid: "creator-001".to_string(),
            display_name: Some("Alice".to_string()),
        };

        assert_eq!(creator.label(), "Alice");
    }

    #[test]
    fn test_label_falls_back_to_uuid() {
        let creator = Creator {
            uuid: "creator-001".to_string(),
            display_name: None,
        };

        assert_eq!(creator.label(), "creator-001");
    }
}
