//! # Caption Style
//!
//! キャプション生成のスタイル指定

/// キャプション生成スタイル
///
/// UIラベルから解決される。未知のラベルは `CasualFun` にフォールバックする
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptionStyle {
    SexyFlirty,
    CasualFun,
    Mysterious,
    Promotional,
    /// 任意のプロンプトを直接指定する（空文字なら汎用プロンプト）
    Custom(String),
}

impl CaptionStyle {
    /// ラベルとカスタムプロンプトからスタイルを解決する
    ///
    /// # Arguments
    ///
    /// * `label` - スタイルのラベル文字列
    /// * `custom_prompt` - `Custom` ラベル時に使うプロンプト
    pub fn from_label(label: &str, custom_prompt: &str) -> Self {
        match label {
            "Sexy & Flirty" => CaptionStyle::SexyFlirty,
            "Casual & Fun" => CaptionStyle::CasualFun,
            "Mysterious" => CaptionStyle::Mysterious,
            "Promotional" => CaptionStyle::Promotional,
            "Custom" => CaptionStyle::Custom(custom_prompt.to_string()),
            _ => CaptionStyle::CasualFun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_known_styles() {
        assert_eq!(
            CaptionStyle::from_label("Sexy & Flirty", ""),
            CaptionStyle::SexyFlirty
        );
        assert_eq!(
            CaptionStyle::from_label("Casual & Fun", ""),
            CaptionStyle::CasualFun
        );
        assert_eq!(
            CaptionStyle::from_label("Mysterious", ""),
            CaptionStyle::Mysterious
        );
        assert_eq!(
            CaptionStyle::from_label("Promotional", ""),
            CaptionStyle::Promotional
        );
    }

    #[test]
    fn test_from_label_custom_keeps_prompt() {
        let style = CaptionStyle::from_label("Custom", "write a haiku");
        assert_eq!(style, CaptionStyle::Custom("write a haiku".to_string()));
    }

    #[test]
    fn test_from_label_unknown_falls_back() {
        assert_eq!(
            CaptionStyle::from_label("Dramatic", "ignored"),
            CaptionStyle::CasualFun
        );
    }
}
