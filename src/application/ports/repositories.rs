use crate::domain::entities::{FollowedUser, Post};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// 投稿の永続化ポート
#[async_trait]
pub trait PostStore: Send + Sync {
    /// 投稿をIDをキーに upsert する
    async fn upsert_posts(&self, posts: &[Post]) -> Result<(), AppError>;

    async fn get_post(&self, id: &str) -> Result<Option<Post>, AppError>;

    /// 作成日時の新しい順で最大 `limit` 件
    async fn get_latest_posts(&self, limit: usize) -> Result<Vec<Post>, AppError>;

    async fn delete_post(&self, id: &str) -> Result<(), AppError>;

    async fn count_posts(&self) -> Result<u64, AppError>;
}

/// フォロー済みユーザーの永続化ポート
#[async_trait]
pub trait FollowedUserStore: Send + Sync {
    async fn upsert_followed_user(&self, user: &FollowedUser) -> Result<(), AppError>;

    async fn delete_followed_user(&self, user_id: &str) -> Result<(), AppError>;

    /// フォロー日時の新しい順
    async fn get_followed_users(&self) -> Result<Vec<FollowedUser>, AppError>;

    async fn is_user_followed(&self, user_id: &str) -> Result<bool, AppError>;

    async fn followed_user_count(&self) -> Result<u64, AppError>;
}
