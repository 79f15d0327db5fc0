use crate::shared::error::AppError;
use async_trait::async_trait;

pub const LIKE_STATUS_PREFIX: &str = "like_status_";
pub const FOLLOW_STATUS_PREFIX: &str = "follow_status_";
pub const MUSIC_MUTE_KEY: &str = "music_mute_status";
pub const USER_NICKNAME_KEY: &str = "user_nickname";
pub const USER_BIO_KEY: &str = "user_bio";
pub const USER_AVATAR_KEY: &str = "user_avatar";

pub fn like_status_key(post_id: &str) -> String {
    format!("{LIKE_STATUS_PREFIX}{post_id}")
}

pub fn follow_status_key(user_id: &str) -> String {
    format!("{FOLLOW_STATUS_PREFIX}{user_id}")
}

/// ユーザー設定のキーバリューポート
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn set_bool(&self, key: &str, value: bool) -> Result<(), AppError>;

    /// 未設定のキーは `None`
    async fn get_bool(&self, key: &str) -> Result<Option<bool>, AppError>;

    async fn set_string(&self, key: &str, value: &str) -> Result<(), AppError>;

    async fn get_string(&self, key: &str) -> Result<Option<String>, AppError>;

    async fn remove(&self, key: &str) -> Result<(), AppError>;
}
