//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use log::info;

use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::export::export_content_plan_csv;
use crate::adapter::fanvue::client::FanvueClient;
use crate::adapter::openai::client::OpenAiClient;
use crate::adapter::repositories::fanvue_account_repository::FanvueAccountRepository;
use crate::adapter::repositories::fanvue_media_upload_repository::FanvueMediaUploadRepository;
use crate::adapter::repositories::fanvue_post_repository::FanvuePostRepository;
use crate::adapter::repositories::json_session_repository::JsonSessionRepository;
use crate::application::dto::publish_options::PublishOptions;
use crate::application::progress::{PipelineMilestone, ProgressListener};
use crate::application::use_cases::authenticate::AuthenticateUseCase;
use crate::application::use_cases::generate_caption::GenerateCaptionUseCase;
use crate::application::use_cases::generate_content_plan::GenerateContentPlanUseCase;
use crate::application::use_cases::publish_post::PublishPostUseCase;
use crate::application::use_cases::upload_and_publish::UploadAndPublishUseCase;
use crate::application::use_cases::upload_media::UploadMediaUseCase;
use crate::domain::entities::caption::CaptionStyle;
use crate::domain::entities::content_plan::{ContentIdea, PlanRequest};
use crate::domain::entities::session::Session;
use crate::domain::repositories::post_repository::PostRepository;
use crate::domain::repositories::session_repository::SessionRepository;

use super::cli::{Args, Command};

/// コンソールに節目を表示する進捗リスナー
struct ConsoleProgress;

impl ProgressListener for ConsoleProgress {
    fn on_milestone(&self, milestone: PipelineMilestone) {
        match milestone {
            PipelineMilestone::UploadStarted => println!("  Uploading media..."),
            PipelineMilestone::UploadComplete => println!("✓ Media uploaded"),
            PipelineMilestone::PublishComplete => println!("✓ Post published"),
        }
    }
}

/// コンテンツアイデアを一覧表示用に整形する
pub fn render_idea(idea: &ContentIdea) -> String {
    format!(
        "Day {} [{}] {}\n  Caption: {}\n  Audience: {} | Best time: {} | Hashtags: {}",
        idea.day,
        idea.kind,
        idea.idea,
        idea.caption_draft,
        idea.audience,
        idea.best_time,
        idea.hashtags
    )
}

/// 指定日のキャプション草稿を探す
pub fn find_caption_draft(ideas: &[ContentIdea], day: u32) -> Option<&str> {
    ideas
        .iter()
        .find(|idea| idea.day == day)
        .map(|idea| idea.caption_draft.as_str())
}

/// Post Publish Workflow
pub struct PostPublishWorkflow {
    config: Config,
    session_repository: Arc<JsonSessionRepository>,
    authenticate_use_case:
        Arc<AuthenticateUseCase<FanvueAccountRepository<FanvueClient>, JsonSessionRepository>>,
    upload_use_case: Arc<UploadMediaUseCase<FanvueMediaUploadRepository<FanvueClient>>>,
    publish_use_case: Arc<PublishPostUseCase<FanvuePostRepository<FanvueClient>>>,
    pipeline_use_case: Arc<
        UploadAndPublishUseCase<
            FanvueMediaUploadRepository<FanvueClient>,
            FanvuePostRepository<FanvueClient>,
        >,
    >,
    post_repository: Arc<FanvuePostRepository<FanvueClient>>,
}

impl PostPublishWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Result<Self> {
        // Repository implementations
        let client = Arc::new(FanvueClient::new(&config)?);
        let account_repo = Arc::new(FanvueAccountRepository::new(client.clone()));
        let media_repo = Arc::new(FanvueMediaUploadRepository::new(client.clone()));
        let post_repo = Arc::new(FanvuePostRepository::new(client));
        let session_repo = Arc::new(JsonSessionRepository::new());

        // Use Cases construction
        let authenticate_use_case = Arc::new(AuthenticateUseCase::new(
            account_repo,
            session_repo.clone(),
        ));
        let upload_use_case = Arc::new(UploadMediaUseCase::new(media_repo));
        let publish_use_case = Arc::new(PublishPostUseCase::new(post_repo.clone()));
        let pipeline_use_case = Arc::new(UploadAndPublishUseCase::new(
            upload_use_case.clone(),
            publish_use_case.clone(),
        ));

        Ok(Self {
            config,
            session_repository: session_repo,
            authenticate_use_case,
            upload_use_case,
            publish_use_case,
            pipeline_use_case,
            post_repository: post_repo,
        })
    }

    /// Execute the selected command
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting fanpost...");

        // Session record is loaded on every run
        let token_path = self.config.token_file_path();
        let mut session = self.session_repository.load(&token_path).await?;

        match args.command {
            Command::Login {
                access_token,
                refresh_token,
            } => {
                let label = self
                    .authenticate_use_case
                    .execute(
                        &mut session,
                        &token_path,
                        &access_token,
                        refresh_token.as_deref(),
                    )
                    .await?;
                println!("✓ Logged in, posting as: {label}");
            }

            Command::Status => {
                if session.is_authenticated() {
                    println!("✓ Logged in");
                    match &session.account_id {
                        Some(account_id) => println!("  Posting creator: {account_id}"),
                        None => println!("⚠ No posting creator resolved"),
                    }
                } else {
                    println!("⚠ Not logged in");
                    println!("  Run: fanpost login --access-token <TOKEN>");
                }
            }

            Command::Upload { file } => {
                if !self.require_login(&session) {
                    return Ok(());
                }
                let media = self.upload_use_case.execute(&session, &file).await?;
                println!("✓ Media uploaded: {}", media.media_uuid);
            }

            Command::Post {
                caption,
                audience,
                media_uuid,
                scheduled_at,
            } => {
                if !self.require_login(&session) {
                    return Ok(());
                }
                let options = PublishOptions::new(caption, audience, media_uuid, scheduled_at);
                let record = self.publish_use_case.execute(&session, &options).await?;
                println!("✓ Post published: {}", record.post_id);
            }

            Command::Publish {
                file,
                caption,
                style,
                custom_prompt,
                audience,
                scheduled_at,
            } => {
                if !self.require_login(&session) {
                    return Ok(());
                }

                let caption = match caption {
                    Some(caption) => caption,
                    None => {
                        let generated = self.generate_caption(&file, &style, &custom_prompt).await?;
                        println!("✓ Generated caption: {generated}");
                        generated
                    }
                };

                let options = PublishOptions::new(caption, audience, None, scheduled_at);
                let report = self
                    .pipeline_use_case
                    .execute(&session, &file, &options, &ConsoleProgress)
                    .await?;

                println!("✓ Done! Media: {} | Post: {}", report.media_uuid, report.post_id);
            }

            Command::Caption {
                file,
                style,
                custom_prompt,
            } => {
                let caption = self.generate_caption(&file, &style, &custom_prompt).await?;
                println!("{caption}");
            }

            Command::Plan {
                niche,
                days,
                seasonal,
                ppv,
                export,
                pick,
            } => {
                let generator = self.openai_client()?;
                let use_case = GenerateContentPlanUseCase::new(generator);

                let request = PlanRequest {
                    niche,
                    days,
                    include_seasonal: seasonal,
                    include_ppv: ppv,
                };
                let ideas = use_case.execute(&request).await?;

                if let Some(day) = pick {
                    let draft = find_caption_draft(&ideas, day)
                        .with_context(|| format!("no idea generated for day {day}"))?;
                    println!("{draft}");
                    return Ok(());
                }

                println!("✓ Generated {} content ideas", ideas.len());
                for idea in &ideas {
                    println!("{}", render_idea(idea));
                }

                if export {
                    let path = export_content_plan_csv(&ideas, &self.config.export_dir)?;
                    println!("✓ Exported plan to {}", path.display());
                }
            }

            Command::History { limit } => {
                if !self.require_login(&session) {
                    return Ok(());
                }
                let account_id = session.require_account_id()?.to_string();
                let posts = self
                    .post_repository
                    .list_posts(&session, &account_id, limit)
                    .await?;
                println!("{}", serde_json::to_string_pretty(&posts)?);
            }
        }

        Ok(())
    }

    /// ログイン済みかを確認し、未ログインなら案内を表示する
    fn require_login(&self, session: &Session) -> bool {
        if session.is_authenticated() {
            return true;
        }
        println!("⚠ Not logged in");
        println!("  Run: fanpost login --access-token <TOKEN>");
        false
    }

    /// キャプションを生成する
    async fn generate_caption(
        &self,
        file: &str,
        style_label: &str,
        custom_prompt: &str,
    ) -> Result<String> {
        let generator = self.openai_client()?;
        let use_case = GenerateCaptionUseCase::new(generator);
        let style = CaptionStyle::from_label(style_label, custom_prompt);
        Ok(use_case.execute(file, &style).await?)
    }

    /// OpenAIクライアントを組み立てる
    ///
    /// APIキーは設定ファイルまたは環境変数から解決する
    fn openai_client(&self) -> Result<Arc<OpenAiClient>> {
        let key = self.config.openai_key().context(
            "OpenAI API key not configured (set openai_api_key in the config file or the OPENAI_API_KEY environment variable)",
        )?;
        Ok(Arc::new(OpenAiClient::new(
            key,
            self.config.openai_model.clone(),
        )?))
    }
}
