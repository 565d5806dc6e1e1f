//! OpenAI Client
//!
//! Chat Completions APIによるキャプションと計画の生成

use async_trait::async_trait;
use base64::Engine;
use chrono::{Datelike, Local};
use serde::Deserialize;
use serde_json::{json, Value};

use super::prompts;
use crate::domain::entities::caption::CaptionStyle;
use crate::domain::entities::content_plan::{ContentIdea, PlanRequest};
use crate::domain::error::{PlatformError, PlatformResult};
use crate::domain::repositories::caption_generator::CaptionGenerator;
use crate::domain::repositories::content_plan_generator::ContentPlanGenerator;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Chat Completionsレスポンス（必要な部分のみ）
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// OpenAIクライアント
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// 新しいクライアントを作成
    ///
    /// # Errors
    ///
    /// HTTPクライアントの初期化に失敗した場合にエラーを返す
    pub fn new(api_key: String, model: String) -> PlatformResult<Self> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            api_key,
            model,
        })
    }

    /// Chat Completionsを呼び出し、最初の選択肢の本文を返す
    async fn chat(&self, body: Value) -> PlatformResult<String> {
        let response = self
            .http
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        if !(200..300).contains(&status) {
            return Err(PlatformError::from_status(status, text));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| PlatformError::parse("chat completion response", e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| {
                PlatformError::parse("chat completion response", "no choices returned")
            })
    }
}

/// モデル出力からマークダウンのコードフェンスを剥がす
///
/// 「JSONのみで返せ」と指示してもフェンスで包んでくることがある
fn strip_markdown_fences(content: &str) -> String {
    let content = content.trim();
    if !content.starts_with("```") {
        return content.to_string();
    }

    let without_open = match content.split_once('\n') {
        Some((_, rest)) => rest,
        None => return content.to_string(),
    };

    let stripped = without_open
        .strip_suffix("```")
        .unwrap_or(without_open);

    stripped.trim().to_string()
}

#[async_trait]
impl CaptionGenerator for OpenAiClient {
    async fn caption_for_image(
        &self,
        image: &[u8],
        mime_type: &str,
        style: &CaptionStyle,
    ) -> PlatformResult<String> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(image);
        let prompt = prompts::image_style_prompt(style);

        let body = json!({
            "model": self.model,
            "messages": [{
                "role": "user",
                "content": [
                    {"type": "text", "text": prompt},
                    {
                        "type": "image_url",
                        "image_url": {
                            "url": format!("data:{mime_type};base64,{encoded}"),
                            "detail": "low"
                        }
                    }
                ]
            }],
            "max_tokens": 300
        });

        self.chat(body).await
    }

    async fn caption_for_video(&self, style: &CaptionStyle) -> PlatformResult<String> {
        let prompt = prompts::video_style_prompt(style);

        let body = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": 300
        });

        self.chat(body).await
    }
}

#[async_trait]
impl ContentPlanGenerator for OpenAiClient {
    async fn generate_plan(&self, request: &PlanRequest) -> PlatformResult<Vec<ContentIdea>> {
        let now = Local::now();
        let month_name = now.format("%B").to_string();
        let prompt = prompts::plan_prompt(request, now.month(), &month_name);

        let body = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": 4096,
            "temperature": 0.8
        });

        let content = self.chat(body).await?;
        let cleaned = strip_markdown_fences(&content);

        serde_json::from_str(&cleaned)
            .map_err(|e| PlatformError::parse("content plan JSON", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markdown_fences_plain_content() {
        assert_eq!(strip_markdown_fences(r#"[{"day":1}]"#), r#"[{"day":1}]"#);
    }

    #[test]
    fn test_strip_markdown_fences_json_block() {
        let fenced = "```json\n[{\"day\":1}]\n```";
        assert_eq!(strip_markdown_fences(fenced), r#"[{"day":1}]"#);
    }

    #[test]
    fn test_strip_markdown_fences_bare_block() {
        let fenced = "```\n[1, 2]\n```";
        assert_eq!(strip_markdown_fences(fenced), "[1, 2]");
    }

    #[test]
    fn test_strip_markdown_fences_unterminated_block() {
        let fenced = "```json\n[1, 2]";
        assert_eq!(strip_markdown_fences(fenced), "[1, 2]");
    }

    #[test]
    fn test_chat_response_deserializes() {
        let json = r#"{"choices": [{"message": {"content": "  a caption  "}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("  a caption  ")
        );
    }
}
