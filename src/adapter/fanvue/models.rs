//! Fanvue Wire Models
//!
//! APIリクエスト・レスポンスの型定義
//!
//! フィールド名はAPIのJSONキー（camelCase）に合わせる

use serde::{Deserialize, Serialize};

/// `POST /media/upload/multipart/create` のリクエスト
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUploadRequest {
    pub name: String,
    pub filename: String,
    pub media_type: String,
}

/// `POST /media/upload/multipart/create` のレスポンス
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUploadResponse {
    pub upload_id: String,
}

/// `POST /media/upload/multipart/sign` のリクエスト
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignPartRequest {
    pub upload_id: String,
    pub part_number: u32,
}

/// `POST /media/upload/multipart/sign` のレスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct SignPartResponse {
    pub url: String,
}

/// complete リクエスト内のパート
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedPart {
    pub part_number: u32,
    pub e_tag: String,
}

/// `POST /media/upload/multipart/complete` のリクエスト
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteUploadRequest {
    pub upload_id: String,
    pub parts: Vec<CompletedPart>,
}

/// `POST /media/upload/multipart/complete` のレスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct CompleteUploadResponse {
    pub uuid: String,
}

/// `GET /users/me` のレスポンス
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// `GET /agency/creators` のレスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct CreatorsEnvelope {
    #[serde(default)]
    pub data: Vec<CreatorRecord>,
}

/// クリエイター1件分のレコード
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorRecord {
    pub uuid: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// `POST /creators/{uuid}/posts` のリクエスト
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub text: String,
    pub audience: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_uuids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
}

/// `POST /creators/{uuid}/posts` のレスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostResponse {
    pub uuid: String,
}
