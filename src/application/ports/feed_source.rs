use crate::shared::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// フィードAPIの成功ステータス
pub const FEED_STATUS_OK: i32 = 0;

/// フィードエンドポイントの生レスポンス
///
/// `status_code` が 0 以外の場合、トランスポートが成功していても
/// リクエスト全体を失敗として扱う。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub status_code: i32,
    #[serde(default)]
    pub post_list: Option<Vec<RawPost>>,
}

/// 未検証の投稿レコード。全フィールドが欠落し得る。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPost {
    pub post_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub hashtags: Option<Vec<RawHashtag>>,
    pub create_time: Option<i64>,
    pub author: Option<RawAuthor>,
    pub clips: Option<Vec<RawClip>>,
    pub music: Option<RawMusic>,
    pub like_count: Option<u32>,
    pub is_liked: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawHashtag {
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAuthor {
    pub user_id: Option<String>,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawClip {
    pub url: Option<String>,
    pub duration_ms: Option<i64>,
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMusic {
    pub id: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
}

/// リモートフィード取得ポート
///
/// トランスポート障害（接続・タイムアウト・ボディ解読）は
/// `AppError::Network` として返す。リトライはこの層では行わない。
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_feed(&self, count: u32, accept_video_clip: bool)
    -> Result<FeedResponse, AppError>;
}
