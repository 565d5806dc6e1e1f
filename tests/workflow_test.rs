//! Workflow Integration Tests
//!
//! PostPublishWorkflow の統合テスト

use fanpost::adapter::config::Config;
use fanpost::driver::cli::{Args, Command};
use fanpost::driver::workflow::PostPublishWorkflow;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// テスト用のConfigファイルを作成
fn create_test_config(dir: &Path) -> String {
    let config_path = dir.join("test-config.json");
    let config_content = format!(
        r#"{{
  "api_base": "https://api.fanvue.invalid",
  "token_file": "{}",
  "export_dir": "{}"
}}"#,
        dir.join("tokens.json").display(),
        dir.join("pomysly").display()
    );
    fs::write(&config_path, config_content).unwrap();
    config_path.to_string_lossy().to_string()
}

/// テスト用のトークンファイルを作成
fn create_token_file(dir: &Path) {
    let token_content = r#"{
  "access_token": "test-access-token",
  "refresh_token": null,
  "creator_uuid": "test-creator"
}"#;
    fs::write(dir.join("tokens.json"), token_content).unwrap();
}

fn args(config_path: String, command: Command) -> Args {
    Args {
        config: config_path,
        command,
    }
}

#[tokio::test]
async fn test_workflow_status_without_token_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());
    let config = Config::load(&config_path).unwrap();

    let workflow = PostPublishWorkflow::new(config).unwrap();
    let result = workflow.execute(args(config_path, Command::Status)).await;

    // トークンファイルが無い場合も未ログイン扱いで正常終了する
    assert!(
        result.is_ok(),
        "Status should succeed without a token file, but got: {:?}",
        result
    );
}

#[tokio::test]
async fn test_workflow_status_with_token_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());
    create_token_file(temp_dir.path());
    let config = Config::load(&config_path).unwrap();

    let workflow = PostPublishWorkflow::new(config).unwrap();
    let result = workflow.execute(args(config_path, Command::Status)).await;

    assert!(
        result.is_ok(),
        "Status should succeed with a token file, but got: {:?}",
        result
    );
}

#[tokio::test]
async fn test_workflow_login_rejects_blank_token() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());
    let config = Config::load(&config_path).unwrap();

    let workflow = PostPublishWorkflow::new(config).unwrap();
    let result = workflow
        .execute(args(
            config_path,
            Command::Login {
                access_token: "   ".to_string(),
                refresh_token: None,
            },
        ))
        .await;

    // 空トークンはネットワークに出る前に拒否される
    assert!(result.is_err(), "Blank token should be rejected");
    assert!(
        !temp_dir.path().join("tokens.json").exists(),
        "No token file should be written on failed login"
    );
}

#[tokio::test]
async fn test_workflow_upload_requires_login() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());
    let config = Config::load(&config_path).unwrap();

    let workflow = PostPublishWorkflow::new(config).unwrap();
    let result = workflow
        .execute(args(
            config_path,
            Command::Upload {
                file: "photo.jpg".to_string(),
            },
        ))
        .await;

    // 未ログインは案内表示のみで正常終了する
    assert!(
        result.is_ok(),
        "Upload without login should print guidance, but got: {:?}",
        result
    );
}

#[tokio::test]
async fn test_workflow_post_requires_login() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());
    let config = Config::load(&config_path).unwrap();

    let workflow = PostPublishWorkflow::new(config).unwrap();
    let result = workflow
        .execute(args(
            config_path,
            Command::Post {
                caption: "hello".to_string(),
                audience: "Wszyscy (publiczny)".to_string(),
                media_uuid: None,
                scheduled_at: None,
            },
        ))
        .await;

    assert!(
        result.is_ok(),
        "Post without login should print guidance, but got: {:?}",
        result
    );
}

#[tokio::test]
async fn test_workflow_plan_requires_openai_key() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());
    let config = Config::load(&config_path).unwrap();

    std::env::remove_var("OPENAI_API_KEY");

    let workflow = PostPublishWorkflow::new(config).unwrap();
    let result = workflow
        .execute(args(
            config_path,
            Command::Plan {
                niche: "fitness".to_string(),
                days: 7,
                seasonal: false,
                ppv: false,
                export: false,
                pick: None,
            },
        ))
        .await;

    let error = result.expect_err("Plan without an API key should fail");
    assert!(
        error.to_string().contains("OpenAI API key"),
        "Error should explain the missing key, but got: {error:?}"
    );
}
