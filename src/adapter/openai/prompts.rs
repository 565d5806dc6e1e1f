//! Generation Prompts
//!
//! スタイル別プロンプトと計画生成プロンプトの組み立て

use crate::domain::entities::caption::CaptionStyle;
use crate::domain::entities::content_plan::PlanRequest;

/// 計画に混ぜる投稿タイプ
pub const POST_TYPES: [&str; 8] = [
    "Photo",
    "Video",
    "Selfie",
    "Behind the scenes",
    "PPV exclusive",
    "Text/Story",
    "Poll/Q&A",
    "Carousel",
];

/// 月ごとの季節テーマ
///
/// # Arguments
///
/// * `month` - 月（1〜12）
pub fn seasonal_themes(month: u32) -> &'static [&'static str] {
    match month {
        1 => &["New Year energy", "Winter cozy vibes", "Fresh start goals"],
        2 => &["Valentine's Day", "Self-love", "Galentine's"],
        3 => &["Spring awakening", "New beginnings", "Women's day"],
        4 => &["Easter vibes", "Spring fashion", "Outdoor shoots"],
        5 => &["Summer teaser", "Fitness motivation", "Beach prep"],
        6 => &["Summer vibes", "Pool day", "Travel content"],
        7 => &["Hot summer", "Vacation mode", "Beach content"],
        8 => &["Late summer", "Golden hour shoots", "Back to routine"],
        9 => &["Fall fashion", "Cozy season starts", "New chapter"],
        10 => &["Halloween", "Costume/cosplay", "Spooky & sexy"],
        11 => &["Thanksgiving", "Gratitude posts", "Black Friday promo"],
        12 => &["Christmas", "Gift guides/wishlists", "New Year countdown"],
        _ => &[],
    }
}

/// 画像キャプション用のスタイルプロンプト
pub fn image_style_prompt(style: &CaptionStyle) -> String {
    match style {
        CaptionStyle::SexyFlirty => "Write a flirty, teasing caption for this photo. Be playful and seductive but tasteful. Use 1-2 emojis. Keep under 200 characters. Write in English.".to_string(),
        CaptionStyle::CasualFun => "Write a casual, fun caption for this photo. Be friendly and approachable. Use emojis. Keep under 200 characters. Write in English.".to_string(),
        CaptionStyle::Mysterious => "Write a mysterious, intriguing caption for this photo. Create curiosity. Use 1 emoji max. Keep under 200 characters. Write in English.".to_string(),
        CaptionStyle::Promotional => "Write a promotional caption encouraging followers to subscribe for more exclusive content. Mention 'link in bio' or similar. Use emojis. Keep under 250 characters. Write in English.".to_string(),
        CaptionStyle::Custom(prompt) => {
            if prompt.trim().is_empty() {
                "Write an engaging social media caption for this photo. Keep under 200 characters.".to_string()
            } else {
                prompt.clone()
            }
        }
    }
}

/// 動画キャプション用のスタイルプロンプト
pub fn video_style_prompt(style: &CaptionStyle) -> String {
    match style {
        CaptionStyle::SexyFlirty => "Write a flirty, teasing caption for a video post by a content creator. Be playful and seductive but tasteful. Use 1-2 emojis. Keep under 200 characters. Write in English.".to_string(),
        CaptionStyle::CasualFun => "Write a casual, fun caption for a video post. Be friendly and approachable. Use emojis. Keep under 200 characters. Write in English.".to_string(),
        CaptionStyle::Mysterious => "Write a mysterious, intriguing caption for a video. Create curiosity about what's in the video. Use 1 emoji max. Keep under 200 characters. Write in English.".to_string(),
        CaptionStyle::Promotional => "Write a promotional caption for a video encouraging followers to subscribe for more exclusive video content. Use emojis. Keep under 250 characters. Write in English.".to_string(),
        CaptionStyle::Custom(prompt) => {
            if prompt.trim().is_empty() {
                "Write an engaging social media caption for a video post. Keep under 200 characters.".to_string()
            } else {
                prompt.clone()
            }
        }
    }
}

/// 計画生成プロンプトを組み立てる
///
/// # Arguments
///
/// * `request` - 検証済みの生成リクエスト
/// * `month` - 現在の月（1〜12）
/// * `month_name` - 月の英語名
pub fn plan_prompt(request: &PlanRequest, month: u32, month_name: &str) -> String {
    let seasonal_part = if request.include_seasonal {
        let themes = seasonal_themes(month);
        format!(
            "\nCurrent month: {month_name} - incorporate these seasonal themes: {}",
            themes.join(", ")
        )
    } else {
        String::new()
    };

    let ppv_part = if request.include_ppv {
        "\nInclude 2-3 PPV exclusive content ideas spread across the plan. PPV posts should be premium, exclusive content that subscribers pay extra for."
    } else {
        "\nDo NOT include any PPV exclusive posts."
    };

    let post_types = POST_TYPES.join(", ");
    let days = request.days;

    format!(
        r##"You are a content strategist for an adult content creator on Fanvue.

Niche/style: {niche}

Generate a {days}-day content plan.{seasonal_part}{ppv_part}

Mix these content types throughout the plan: {post_types}
Ensure variety - don't repeat the same type on consecutive days.
Include at least one series idea (e.g. "7 days of...", "Behind the scenes week").

For each day provide:
- day: day number (1 to {days})
- type: one of [{post_types}]
- idea: short description of the content idea (max 80 chars)
- caption_draft: a ready-to-use caption with emojis (max 200 chars)
- audience: one of [public, followers, subscribers]
- best_time: suggested posting time in HH:MM format (consider peak engagement hours)
- hashtags: 3-5 relevant hashtags as a string

Return ONLY a valid JSON array, no markdown formatting, no code blocks. Example format:
[{{"day":1,"type":"Photo","idea":"...","caption_draft":"...","audience":"public","best_time":"19:00","hashtags":"#tag1 #tag2 #tag3"}}]"##,
        niche = request.niche,
    )
}
