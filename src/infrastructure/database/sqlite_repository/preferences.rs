use super::queries::{DELETE_PREFERENCE, SELECT_PREFERENCE, UPSERT_PREFERENCE};
use super::SqliteRepository;
use crate::application::ports::preferences::PreferenceStore;
use crate::shared::error::AppError;
use async_trait::async_trait;
use sqlx::Row;

#[async_trait]
impl PreferenceStore for SqliteRepository {
    async fn set_bool(&self, key: &str, value: bool) -> Result<(), AppError> {
        self.set_string(key, &value.to_string()).await
    }

    async fn get_bool(&self, key: &str) -> Result<Option<bool>, AppError> {
        match self.get_string(key).await?.as_deref() {
            None => Ok(None),
            Some("true") => Ok(Some(true)),
            Some("false") => Ok(Some(false)),
            Some(other) => Err(AppError::DeserializationError(format!(
                "preference {key} is not a boolean: {other}"
            ))),
        }
    }

    async fn set_string(&self, key: &str, value: &str) -> Result<(), AppError> {
        sqlx::query(UPSERT_PREFERENCE)
            .bind(key)
            .bind(value)
            .execute(self.pool.get_pool())
            .await?;
        Ok(())
    }

    async fn get_string(&self, key: &str) -> Result<Option<String>, AppError> {
        let row = sqlx::query(SELECT_PREFERENCE)
            .bind(key)
            .fetch_optional(self.pool.get_pool())
            .await?;

        match row {
            Some(row) => Ok(Some(row.try_get("value")?)),
            None => Ok(None),
        }
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        sqlx::query(DELETE_PREFERENCE)
            .bind(key)
            .execute(self.pool.get_pool())
            .await?;
        Ok(())
    }
}
