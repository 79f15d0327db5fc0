use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::author::Author;

/// フォロー済みユーザー
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FollowedUser {
    pub user_id: String,
    pub nickname: String,
    pub avatar: String,
    pub bio: String,
    pub followed_at: DateTime<Utc>,
}

impl FollowedUser {
    pub fn new(user_id: String, nickname: String, avatar: String) -> Self {
        Self {
            user_id,
            nickname,
            avatar,
            bio: String::new(),
            followed_at: Utc::now(),
        }
    }

    pub fn with_bio(mut self, bio: String) -> Self {
        self.bio = bio;
        self
    }

    pub fn from_author(author: &Author) -> Self {
        Self::new(
            author.id.clone(),
            author.nickname.clone(),
            author.avatar.clone(),
        )
    }
}
