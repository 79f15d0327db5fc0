use crate::application::ports::preferences::{
    like_status_key, PreferenceStore, MUSIC_MUTE_KEY, USER_AVATAR_KEY, USER_BIO_KEY,
    USER_NICKNAME_KEY,
};
use crate::shared::error::AppError;
use std::sync::Arc;

const DEFAULT_NICKNAME: &str = "user";

/// いいね状態とユーザー設定の管理サービス
///
/// キャッシュ上の投稿は不変スナップショットのため、いいねの
/// トグルはここで設定ストアに記録する。
pub struct ProfileService {
    preferences: Arc<dyn PreferenceStore>,
}

impl ProfileService {
    pub fn new(preferences: Arc<dyn PreferenceStore>) -> Self {
        Self { preferences }
    }

    pub async fn set_like_status(&self, post_id: &str, is_liked: bool) -> Result<(), AppError> {
        self.preferences
            .set_bool(&like_status_key(post_id), is_liked)
            .await
    }

    /// 未記録の投稿は false
    pub async fn like_status(&self, post_id: &str) -> Result<bool, AppError> {
        Ok(self
            .preferences
            .get_bool(&like_status_key(post_id))
            .await?
            .unwrap_or(false))
    }

    pub async fn set_music_muted(&self, muted: bool) -> Result<(), AppError> {
        self.preferences.set_bool(MUSIC_MUTE_KEY, muted).await
    }

    pub async fn music_muted(&self) -> Result<bool, AppError> {
        Ok(self
            .preferences
            .get_bool(MUSIC_MUTE_KEY)
            .await?
            .unwrap_or(false))
    }

    pub async fn set_nickname(&self, nickname: &str) -> Result<(), AppError> {
        self.preferences
            .set_string(USER_NICKNAME_KEY, nickname)
            .await
    }

    pub async fn nickname(&self) -> Result<String, AppError> {
        Ok(self
            .preferences
            .get_string(USER_NICKNAME_KEY)
            .await?
            .unwrap_or_else(|| DEFAULT_NICKNAME.to_string()))
    }

    pub async fn set_bio(&self, bio: &str) -> Result<(), AppError> {
        self.preferences.set_string(USER_BIO_KEY, bio).await
    }

    pub async fn bio(&self) -> Result<String, AppError> {
        Ok(self
            .preferences
            .get_string(USER_BIO_KEY)
            .await?
            .unwrap_or_default())
    }

    pub async fn set_avatar(&self, uri: &str) -> Result<(), AppError> {
        self.preferences.set_string(USER_AVATAR_KEY, uri).await
    }

    /// 未設定なら None
    pub async fn avatar(&self) -> Result<Option<String>, AppError> {
        self.preferences.get_string(USER_AVATAR_KEY).await
    }
}
