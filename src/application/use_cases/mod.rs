//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **AuthenticateUseCase**: トークンによるログインとクリエイター解決
//! - **UploadMediaUseCase**: メディアのマルチパートアップロード
//! - **PublishPostUseCase**: 投稿の作成と公開
//! - **UploadAndPublishUseCase**: アップロードと公開のパイプライン
//! - **GenerateCaptionUseCase**: キャプション生成
//! - **GenerateContentPlanUseCase**: コンテンツプラン生成

pub mod authenticate;
pub mod generate_caption;
pub mod generate_content_plan;
pub mod publish_post;
pub mod upload_and_publish;
pub mod upload_media;
