//! # Pipeline Progress
//!
//! アップロード・公開パイプラインの進捗通知

/// パイプラインの節目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineMilestone {
    /// アップロード処理を開始した
    UploadStarted,
    /// メディアのアップロードが完了した
    UploadComplete,
    /// 投稿の公開が完了した
    PublishComplete,
}

/// 進捗リスナー
///
/// パイプラインが節目ごとに呼び出す。実装はDriver層が提供する
pub trait ProgressListener: Send + Sync {
    /// 節目に到達したことを通知する
    fn on_milestone(&self, milestone: PipelineMilestone);
}

/// 何もしないリスナー
///
/// 進捗表示が不要な呼び出し向け
pub struct NoopProgress;

impl ProgressListener for NoopProgress {
    fn on_milestone(&self, _milestone: PipelineMilestone) {}
}
