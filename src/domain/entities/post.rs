use super::author::Author;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub hashtags: Vec<Hashtag>,
    pub created_at: DateTime<Utc>,
    pub author: Author,
    pub clips: Vec<Clip>,
    pub music: Option<Music>,
    pub like_count: u32,
    pub is_liked: bool,
}

impl Post {
    pub fn new(id: String, title: String, content: String, author: Author) -> Self {
        Self {
            id,
            title,
            content,
            hashtags: Vec::new(),
            // 保存形式がミリ秒精度のため、生成時点で切り詰めておく
            created_at: truncate_to_millis(Utc::now()),
            author,
            clips: Vec::new(),
            music: None,
            like_count: 0,
            is_liked: false,
        }
    }

    pub fn with_hashtags(mut self, hashtags: Vec<Hashtag>) -> Self {
        self.hashtags = hashtags;
        self
    }

    pub fn with_clips(mut self, clips: Vec<Clip>) -> Self {
        self.clips = clips;
        self
    }

    pub fn with_music(mut self, music: Music) -> Self {
        self.music = Some(music);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = truncate_to_millis(created_at);
        self
    }
}

/// 投稿に紐づくハッシュタグ
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hashtag {
    pub title: String,
}

impl Hashtag {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// 再生可能な動画クリップへの参照
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Clip {
    pub url: String,
    pub duration_ms: i64,
    pub order_index: i32,
}

/// 投稿に添付されるBGMトラック
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Music {
    pub id: String,
    pub title: String,
    pub url: String,
}

fn truncate_to_millis(value: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or(value)
}
