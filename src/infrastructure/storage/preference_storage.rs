use crate::application::ports::preferences::PreferenceStore;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// プロセス内のみ有効な設定ストア
///
/// 真偽値は "true"/"false" の文字列として保持する。永続化が必要な
/// 場合は SqliteRepository 側の実装を使う。
#[derive(Default)]
pub struct MemoryPreferenceStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStorage {
    async fn set_bool(&self, key: &str, value: bool) -> Result<(), AppError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get_bool(&self, key: &str) -> Result<Option<bool>, AppError> {
        let entries = self.entries.read().await;
        match entries.get(key).map(String::as_str) {
            None => Ok(None),
            Some("true") => Ok(Some(true)),
            Some("false") => Ok(Some(false)),
            Some(other) => Err(AppError::DeserializationError(format!(
                "preference {key} is not a boolean: {other}"
            ))),
        }
    }

    async fn set_string(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get_string(&self, key: &str) -> Result<Option<String>, AppError> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }
}
