use super::queries::{
    COUNT_POSTS, DELETE_POST, SELECT_LATEST_POSTS, SELECT_POST_BY_ID, UPSERT_POST,
};
use super::SqliteRepository;
use crate::application::ports::repositories::PostStore;
use crate::domain::entities::Post;
use crate::infrastructure::database::entities::PostEntity;
use crate::infrastructure::database::mapper::{post_from_entity, post_to_entity};
use crate::shared::error::AppError;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

fn post_entity_from_row(row: &SqliteRow) -> Result<PostEntity, AppError> {
    Ok(PostEntity {
        post_id: row.try_get("post_id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        hashtags_json: row.try_get("hashtags_json")?,
        created_at: row.try_get("created_at")?,
        author_json: row.try_get("author_json")?,
        clips_json: row.try_get("clips_json")?,
        music_json: row.try_get("music_json")?,
        like_count: row.try_get("like_count")?,
        is_liked: row.try_get("is_liked")?,
    })
}

#[async_trait]
impl PostStore for SqliteRepository {
    async fn upsert_posts(&self, posts: &[Post]) -> Result<(), AppError> {
        for post in posts {
            let entity = post_to_entity(post);
            sqlx::query(UPSERT_POST)
                .bind(&entity.post_id)
                .bind(&entity.title)
                .bind(&entity.content)
                .bind(&entity.hashtags_json)
                .bind(entity.created_at)
                .bind(&entity.author_json)
                .bind(&entity.clips_json)
                .bind(entity.music_json.as_deref())
                .bind(entity.like_count)
                .bind(entity.is_liked)
                .execute(self.pool.get_pool())
                .await?;
        }
        Ok(())
    }

    async fn get_post(&self, id: &str) -> Result<Option<Post>, AppError> {
        let row = sqlx::query(SELECT_POST_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;

        match row {
            Some(row) => {
                let entity = post_entity_from_row(&row)?;
                Ok(Some(post_from_entity(entity)?))
            }
            None => Ok(None),
        }
    }

    async fn get_latest_posts(&self, limit: usize) -> Result<Vec<Post>, AppError> {
        let rows = sqlx::query(SELECT_LATEST_POSTS)
            .bind(limit as i64)
            .fetch_all(self.pool.get_pool())
            .await?;

        let mut posts = Vec::with_capacity(rows.len());
        for row in rows {
            let entity = post_entity_from_row(&row)?;
            posts.push(post_from_entity(entity)?);
        }

        Ok(posts)
    }

    async fn delete_post(&self, id: &str) -> Result<(), AppError> {
        sqlx::query(DELETE_POST)
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;
        Ok(())
    }

    async fn count_posts(&self) -> Result<u64, AppError> {
        let row = sqlx::query(COUNT_POSTS)
            .fetch_one(self.pool.get_pool())
            .await?;
        let count: i64 = row.try_get("count")?;
        Ok(count.max(0) as u64)
    }
}
