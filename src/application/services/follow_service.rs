use crate::application::ports::preferences::{follow_status_key, PreferenceStore};
use crate::application::ports::repositories::FollowedUserStore;
use crate::domain::entities::FollowedUser;
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::debug;

/// フォロー関係の管理サービス
///
/// フォロー一覧はストアが正、設定ストアのフラグはUI層向けの
/// ミラーとして同期する。
pub struct FollowService {
    store: Arc<dyn FollowedUserStore>,
    preferences: Arc<dyn PreferenceStore>,
}

impl FollowService {
    pub fn new(store: Arc<dyn FollowedUserStore>, preferences: Arc<dyn PreferenceStore>) -> Self {
        Self { store, preferences }
    }

    pub async fn follow(&self, user: FollowedUser) -> Result<(), AppError> {
        debug!(user_id = %user.user_id, "following user");
        self.store.upsert_followed_user(&user).await?;
        self.preferences
            .set_bool(&follow_status_key(&user.user_id), true)
            .await?;
        Ok(())
    }

    pub async fn unfollow(&self, user_id: &str) -> Result<(), AppError> {
        debug!(%user_id, "unfollowing user");
        self.store.delete_followed_user(user_id).await?;
        self.preferences
            .set_bool(&follow_status_key(user_id), false)
            .await?;
        Ok(())
    }

    pub async fn is_followed(&self, user_id: &str) -> Result<bool, AppError> {
        self.store.is_user_followed(user_id).await
    }

    /// フォロー日時の新しい順
    pub async fn followed_users(&self) -> Result<Vec<FollowedUser>, AppError> {
        self.store.get_followed_users().await
    }

    pub async fn followed_count(&self) -> Result<u64, AppError> {
        self.store.followed_user_count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::preferences::FOLLOW_STATUS_PREFIX;
    use crate::infrastructure::database::{ConnectionPool, Repository, SqliteRepository};
    use crate::infrastructure::storage::MemoryPreferenceStorage;
    use chrono::{TimeZone, Utc};

    async fn setup_follow_service() -> (FollowService, Arc<MemoryPreferenceStorage>) {
        let pool = ConnectionPool::from_memory()
            .await
            .expect("failed to create pool");
        let repository = Arc::new(SqliteRepository::new(pool));
        repository
            .initialize()
            .await
            .expect("failed to initialize repository schema");
        let preferences = Arc::new(MemoryPreferenceStorage::new());

        let service = FollowService::new(
            repository as Arc<dyn FollowedUserStore>,
            Arc::clone(&preferences) as Arc<dyn PreferenceStore>,
        );
        (service, preferences)
    }

    fn sample_user(user_id: &str, followed_at_secs: i64) -> FollowedUser {
        FollowedUser {
            user_id: user_id.to_string(),
            nickname: format!("nick-{user_id}"),
            avatar: "https://cdn.example.com/a.png".to_string(),
            bio: String::new(),
            followed_at: Utc.timestamp_opt(followed_at_secs, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn follow_unfollow_roundtrip() {
        let (service, preferences) = setup_follow_service().await;
        let user = sample_user("u1", 100);

        service.follow(user.clone()).await.expect("follow succeeds");
        assert!(service.is_followed("u1").await.expect("query"));
        assert_eq!(service.followed_count().await.expect("count"), 1);
        assert_eq!(
            preferences
                .get_bool(&format!("{FOLLOW_STATUS_PREFIX}u1"))
                .await
                .expect("flag query"),
            Some(true)
        );

        service.unfollow("u1").await.expect("unfollow succeeds");
        assert!(!service.is_followed("u1").await.expect("query"));
        assert_eq!(service.followed_count().await.expect("count"), 0);
        assert_eq!(
            preferences
                .get_bool(&format!("{FOLLOW_STATUS_PREFIX}u1"))
                .await
                .expect("flag query"),
            Some(false)
        );
    }

    #[tokio::test]
    async fn followed_users_are_ordered_by_follow_time_desc() {
        let (service, _preferences) = setup_follow_service().await;

        service
            .follow(sample_user("first", 100))
            .await
            .expect("follow");
        service
            .follow(sample_user("second", 200))
            .await
            .expect("follow");
        service
            .follow(sample_user("third", 150))
            .await
            .expect("follow");

        let users = service.followed_users().await.expect("list");
        let ids: Vec<&str> = users.iter().map(|user| user.user_id.as_str()).collect();
        assert_eq!(ids, vec!["second", "third", "first"]);
    }

    #[tokio::test]
    async fn following_twice_keeps_a_single_record() {
        let (service, _preferences) = setup_follow_service().await;

        service
            .follow(sample_user("u1", 100))
            .await
            .expect("follow");
        let mut updated = sample_user("u1", 300);
        updated.nickname = "renamed".to_string();
        service.follow(updated).await.expect("re-follow");

        assert_eq!(service.followed_count().await.expect("count"), 1);
        let users = service.followed_users().await.expect("list");
        assert_eq!(users[0].nickname, "renamed");
    }
}
