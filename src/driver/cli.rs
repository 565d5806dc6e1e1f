//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

/// メディアをFanvueにアップロードして投稿するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "fanpost")]
#[command(about = "Upload media and publish posts on Fanvue", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "~/.fanpost/config.json")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

/// サブコマンド
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in with an access token and resolve the posting creator
    Login {
        /// Access token obtained from the platform
        #[arg(long)]
        access_token: String,

        /// Refresh token (stored for later use, never exchanged)
        #[arg(long)]
        refresh_token: Option<String>,
    },

    /// Show the current session status
    Status,

    /// Upload a media file without publishing
    Upload {
        /// Path to the media file
        file: String,
    },

    /// Publish a post, optionally attaching an already uploaded media
    Post {
        /// Post caption
        #[arg(long)]
        caption: String,

        /// Audience label
        #[arg(long, default_value = "Obserwujacy i subskrybenci")]
        audience: String,

        /// UUID of an already uploaded media
        #[arg(long)]
        media_uuid: Option<String>,

        /// Schedule the post for later (ISO 8601, passed through verbatim)
        #[arg(long)]
        scheduled_at: Option<String>,
    },

    /// Upload a file and publish it as a post in one run
    Publish {
        /// Path to the media file
        file: String,

        /// Post caption (generated with AI when omitted)
        #[arg(long)]
        caption: Option<String>,

        /// Caption style used when the caption is generated
        #[arg(long, default_value = "Casual & Fun")]
        style: String,

        /// Custom prompt for the "Custom" style
        #[arg(long, default_value = "")]
        custom_prompt: String,

        /// Audience label
        #[arg(long, default_value = "Obserwujacy i subskrybenci")]
        audience: String,

        /// Schedule the post for later (ISO 8601, passed through verbatim)
        #[arg(long)]
        scheduled_at: Option<String>,
    },

    /// Generate a caption for a media file
    Caption {
        /// Path to the media file
        file: String,

        /// Caption style
        #[arg(long, default_value = "Casual & Fun")]
        style: String,

        /// Custom prompt for the "Custom" style
        #[arg(long, default_value = "")]
        custom_prompt: String,
    },

    /// Generate a multi-day content plan
    Plan {
        /// Content niche the plan is for
        #[arg(long)]
        niche: String,

        /// Number of days to plan (7-30)
        #[arg(long, default_value_t = 7)]
        days: u32,

        /// Include seasonal themes for the current month
        #[arg(long)]
        seasonal: bool,

        /// Include PPV content ideas
        #[arg(long)]
        ppv: bool,

        /// Export the plan as CSV
        #[arg(long)]
        export: bool,

        /// Print only the caption draft of the given day
        #[arg(long)]
        pick: Option<u32>,
    },

    /// List recent posts of the resolved creator
    History {
        /// Maximum number of posts to list
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_config() {
        let args = Args::parse_from(["fanpost", "status"]);
        assert_eq!(args.config, "~/.fanpost/config.json");
        assert!(matches!(args.command, Command::Status));
    }

    #[test]
    fn test_args_custom_config() {
        let args = Args::parse_from(["fanpost", "-c", "/custom/config.json", "status"]);
        assert_eq!(args.config, "/custom/config.json");
    }

    #[test]
    fn test_args_login() {
        let args = Args::parse_from([
            "fanpost",
            "login",
            "--access-token",
            "token-abc",
            "--refresh-token",
            "refresh-xyz",
        ]);

        match args.command {
            Command::Login {
                access_token,
                refresh_token,
            } => {
                assert_eq!(access_token, "token-abc");
                assert_eq!(refresh_token.as_deref(), Some("refresh-xyz"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_args_upload() {
        let args = Args::parse_from(["fanpost", "upload", "photo.jpg"]);

        match args.command {
            Command::Upload { file } => assert_eq!(file, "photo.jpg"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_args_post_defaults() {
        let args = Args::parse_from(["fanpost", "post", "--caption", "hello"]);

        match args.command {
            Command::Post {
                caption,
                audience,
                media_uuid,
                scheduled_at,
            } => {
                assert_eq!(caption, "hello");
                assert_eq!(audience, "Obserwujacy i subskrybenci");
                assert!(media_uuid.is_none());
                assert!(scheduled_at.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_args_publish_with_options() {
        let args = Args::parse_from([
            "fanpost",
            "publish",
            "clip.mp4",
            "--caption",
            "new clip",
            "--audience",
            "Tylko subskrybenci",
            "--scheduled-at",
            "2026-02-14T19:00:00Z",
        ]);

        match args.command {
            Command::Publish {
                file,
                caption,
                audience,
                scheduled_at,
                ..
            } => {
                assert_eq!(file, "clip.mp4");
                assert_eq!(caption.as_deref(), Some("new clip"));
                assert_eq!(audience, "Tylko subskrybenci");
                assert_eq!(scheduled_at.as_deref(), Some("2026-02-14T19:00:00Z"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_args_publish_without_caption_defaults_style() {
        let args = Args::parse_from(["fanpost", "publish", "photo.jpg"]);

        match args.command {
            Command::Publish { caption, style, .. } => {
                assert!(caption.is_none());
                assert_eq!(style, "Casual & Fun");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_args_plan() {
        let args = Args::parse_from([
            "fanpost", "plan", "--niche", "fitness", "--days", "14", "--seasonal", "--export",
        ]);

        match args.command {
            Command::Plan {
                niche,
                days,
                seasonal,
                ppv,
                export,
                pick,
            } => {
                assert_eq!(niche, "fitness");
                assert_eq!(days, 14);
                assert!(seasonal);
                assert!(!ppv);
                assert!(export);
                assert!(pick.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_args_history_default_limit() {
        let args = Args::parse_from(["fanpost", "history"]);

        match args.command {
            Command::History { limit } => assert_eq!(limit, 10),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
