//! # Generate Content Plan Use Case
//!
//! コンテンツプランの生成

use std::sync::Arc;

use log::info;

use crate::domain::entities::content_plan::{ContentIdea, PlanRequest};
use crate::domain::error::PlatformResult;
use crate::domain::repositories::content_plan_generator::ContentPlanGenerator;

/// コンテンツプラン生成ユースケース
///
/// リクエストを検証してから生成器に委譲する
pub struct GenerateContentPlanUseCase<G: ContentPlanGenerator> {
    generator: Arc<G>,
}

impl<G: ContentPlanGenerator> GenerateContentPlanUseCase<G> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `generator` - コンテンツプラン生成器
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    /// コンテンツプランを生成する
    ///
    /// # Arguments
    ///
    /// * `request` - プランのリクエスト
    ///
    /// # Returns
    ///
    /// 生成されたコンテンツアイデアのリスト
    ///
    /// # Errors
    ///
    /// リクエストが不正、または生成器の失敗時にエラーを返す
    pub async fn execute(&self, request: &PlanRequest) -> PlatformResult<Vec<ContentIdea>> {
        request.validate()?;

        info!("Generating {}-day content plan for: {}", request.days, request.niche);
        let ideas = self.generator.generate_plan(request).await?;
        info!("Generated {} content ideas", ideas.len());

        Ok(ideas)
    }
}
