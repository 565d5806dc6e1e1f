//! # Content Plan Generator Trait
//!
//! コンテンツ計画の生成を抽象化

use async_trait::async_trait;

use crate::domain::entities::content_plan::{ContentIdea, PlanRequest};
use crate::domain::error::PlatformResult;

/// コンテンツ計画生成器
#[async_trait]
pub trait ContentPlanGenerator: Send + Sync {
    /// 計画を生成する
    ///
    /// # Arguments
    ///
    /// * `request` - 検証済みの生成リクエスト
    ///
    /// # Returns
    ///
    /// 1日1件のコンテンツアイデアのリスト
    ///
    /// # Errors
    ///
    /// 生成APIの呼び出しや応答のパースに失敗した場合にエラーを返す
    async fn generate_plan(&self, request: &PlanRequest) -> PlatformResult<Vec<ContentIdea>>;
}
