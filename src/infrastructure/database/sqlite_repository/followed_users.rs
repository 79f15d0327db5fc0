use super::queries::{
    COUNT_FOLLOWED_USERS, DELETE_FOLLOWED_USER, SELECT_FOLLOWED_USERS,
    SELECT_FOLLOWED_USER_EXISTS, UPSERT_FOLLOWED_USER,
};
use super::SqliteRepository;
use crate::application::ports::repositories::FollowedUserStore;
use crate::domain::entities::FollowedUser;
use crate::infrastructure::database::entities::FollowedUserEntity;
use crate::infrastructure::database::mapper::{followed_user_from_entity, followed_user_to_entity};
use crate::shared::error::AppError;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

fn followed_user_entity_from_row(row: &SqliteRow) -> Result<FollowedUserEntity, AppError> {
    Ok(FollowedUserEntity {
        user_id: row.try_get("user_id")?,
        nickname: row.try_get("nickname")?,
        avatar: row.try_get("avatar")?,
        bio: row.try_get("bio")?,
        followed_at: row.try_get("followed_at")?,
    })
}

#[async_trait]
impl FollowedUserStore for SqliteRepository {
    async fn upsert_followed_user(&self, user: &FollowedUser) -> Result<(), AppError> {
        let entity = followed_user_to_entity(user);
        sqlx::query(UPSERT_FOLLOWED_USER)
            .bind(&entity.user_id)
            .bind(&entity.nickname)
            .bind(&entity.avatar)
            .bind(&entity.bio)
            .bind(entity.followed_at)
            .execute(self.pool.get_pool())
            .await?;
        Ok(())
    }

    async fn delete_followed_user(&self, user_id: &str) -> Result<(), AppError> {
        sqlx::query(DELETE_FOLLOWED_USER)
            .bind(user_id)
            .execute(self.pool.get_pool())
            .await?;
        Ok(())
    }

    async fn get_followed_users(&self) -> Result<Vec<FollowedUser>, AppError> {
        let rows = sqlx::query(SELECT_FOLLOWED_USERS)
            .fetch_all(self.pool.get_pool())
            .await?;

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            let entity = followed_user_entity_from_row(&row)?;
            users.push(followed_user_from_entity(entity)?);
        }

        Ok(users)
    }

    async fn is_user_followed(&self, user_id: &str) -> Result<bool, AppError> {
        let row = sqlx::query(SELECT_FOLLOWED_USER_EXISTS)
            .bind(user_id)
            .fetch_one(self.pool.get_pool())
            .await?;
        let present: i64 = row.try_get("present")?;
        Ok(present != 0)
    }

    async fn followed_user_count(&self) -> Result<u64, AppError> {
        let row = sqlx::query(COUNT_FOLLOWED_USERS)
            .fetch_one(self.pool.get_pool())
            .await?;
        let count: i64 = row.try_get("count")?;
        Ok(count.max(0) as u64)
    }
}
