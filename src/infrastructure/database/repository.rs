use crate::shared::error::AppError;
use async_trait::async_trait;

/// ストレージ実装の初期化と疎通確認
#[async_trait]
pub trait Repository: Send + Sync {
    async fn initialize(&self) -> Result<(), AppError>;
    async fn health_check(&self) -> Result<bool, AppError>;
}
