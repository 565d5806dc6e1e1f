//! # Media Upload Repository Trait
//!
//! マルチパートアップロードの4ステップを抽象化

use async_trait::async_trait;

use crate::domain::entities::media::{
    MediaKind, MediaObject, SignedTarget, UploadPart, UploadSession,
};
use crate::domain::entities::session::Session;
use crate::domain::error::PlatformResult;

/// メディアアップロードリポジトリ
///
/// create → sign → transfer → complete の各ステップを担当するリポジトリ。
/// ステップの順序制御と再試行の判断は呼び出し側（ユースケース）が持つ
#[async_trait]
pub trait MediaUploadRepository: Send + Sync {
    /// アップロードセッションを作成する
    ///
    /// # Arguments
    ///
    /// * `session` - 認証セッション
    /// * `name` - メディアの表示名
    /// * `filename` - 元のファイル名
    /// * `kind` - メディア種別
    ///
    /// # Returns
    ///
    /// 発行されたアップロードセッション
    ///
    /// # Errors
    ///
    /// APIがエラーを返した場合にエラーを返す
    async fn create_upload(
        &self,
        session: &Session,
        name: &str,
        filename: &str,
        kind: MediaKind,
    ) -> PlatformResult<UploadSession>;

    /// パートの署名付きURLを取得する
    ///
    /// # Arguments
    ///
    /// * `session` - 認証セッション
    /// * `upload` - 対象のアップロードセッション
    /// * `part_number` - パート番号（1始まり）
    async fn sign_part(
        &self,
        session: &Session,
        upload: &UploadSession,
        part_number: u32,
    ) -> PlatformResult<SignedTarget>;

    /// 署名付きURLへバイナリを転送する
    ///
    /// 認証ヘッダは付けない。転送先はAPI本体とは別のストレージ
    ///
    /// # Returns
    ///
    /// レスポンスのETagヘッダ値（引用符付きのまま）。欠けていれば空文字
    ///
    /// # Errors
    ///
    /// ステータスが 200/201 以外の場合にエラーを返す
    async fn transfer(&self, target: &SignedTarget, content: Vec<u8>) -> PlatformResult<String>;

    /// アップロードを完了し、メディアオブジェクトを得る
    ///
    /// # Arguments
    ///
    /// * `session` - 認証セッション
    /// * `upload` - 対象のアップロードセッション
    /// * `parts` - 転送済みパートのリスト
    async fn complete_upload(
        &self,
        session: &Session,
        upload: &UploadSession,
        parts: Vec<UploadPart>,
    ) -> PlatformResult<MediaObject>;
}
