//! # Content Plan Entities
//!
//! AI生成コンテンツ計画のアイデアとリクエストパラメータ

use serde::{Deserialize, Serialize};

use crate::domain::error::{PlatformError, PlatformResult};

/// 計画日数の下限
pub const MIN_PLAN_DAYS: u32 = 7;
/// 計画日数の上限
pub const MAX_PLAN_DAYS: u32 = 30;

/// 1日分のコンテンツアイデア
///
/// 生成モデルが返すJSON配列の要素。欠けたキーは空値として扱う
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContentIdea {
    /// 日番号（1始まり）
    #[serde(default)]
    pub day: u32,
    /// 投稿タイプ（Photo, Video など）
    #[serde(rename = "type", default)]
    pub kind: String,
    /// アイデアの短い説明
    #[serde(default)]
    pub idea: String,
    /// そのまま使えるキャプション案
    #[serde(default)]
    pub caption_draft: String,
    /// 想定する公開対象（public / followers / subscribers）
    #[serde(default)]
    pub audience: String,
    /// 推奨投稿時刻（HH:MM）
    #[serde(default)]
    pub best_time: String,
    /// ハッシュタグ（スペース区切りの文字列）
    #[serde(default)]
    pub hashtags: String,
}

/// コンテンツ計画の生成リクエスト
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// クリエイターのニッチ・スタイルの説明
    pub niche: String,
    /// 計画日数（7〜30）
    pub days: u32,
    /// 季節テーマを織り込むか
    pub include_seasonal: bool,
    /// PPV限定コンテンツを含めるか
    pub include_ppv: bool,
}

impl PlanRequest {
    /// リクエストの前提条件を検証する
    ///
    /// # Errors
    ///
    /// ニッチが空、または日数が範囲外の場合は `Validation` を返す
    pub fn validate(&self) -> PlatformResult<()> {
        if self.niche.trim().is_empty() {
            return Err(PlatformError::Validation(
                "niche description must not be empty".to_string(),
            ));
        }
        if !(MIN_PLAN_DAYS..=MAX_PLAN_DAYS).contains(&self.days) {
            return Err(PlatformError::Validation(format!(
                "plan length must be between {MIN_PLAN_DAYS} and {MAX_PLAN_DAYS} days, got {}",
                self.days
            )));
        }
        Ok(())
    }
}
