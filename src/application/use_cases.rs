use crate::application::services::FeedService;
use crate::domain::entities::Post;
use crate::shared::error::AppError;
use std::sync::Arc;

/// 新規取得の既定ページサイズ
pub const DEFAULT_FRESH_PAGE_SIZE: u32 = 20;
/// キャッシュ読み出しの既定件数
pub const DEFAULT_CACHED_PAGE_SIZE: usize = 10;

/// フィードを新規に1ページ取得するユースケース
///
/// 表示層を `FeedService` の形から切り離すための薄いラッパー。
pub struct GetFeedUseCase {
    service: Arc<FeedService>,
    accept_video_clip: bool,
}

impl GetFeedUseCase {
    pub fn new(service: Arc<FeedService>, accept_video_clip: bool) -> Self {
        Self {
            service,
            accept_video_clip,
        }
    }

    pub async fn execute(&self, count: Option<u32>) -> Result<Vec<Post>, AppError> {
        self.service
            .get_feed(count.unwrap_or(DEFAULT_FRESH_PAGE_SIZE), self.accept_video_clip)
            .await
    }
}

/// キャッシュ済みフィードを読み出すユースケース
pub struct GetCachedFeedUseCase {
    service: Arc<FeedService>,
}

impl GetCachedFeedUseCase {
    pub fn new(service: Arc<FeedService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, count: Option<usize>) -> Vec<Post> {
        self.service
            .get_latest_cached(count.unwrap_or(DEFAULT_CACHED_PAGE_SIZE))
            .await
    }
}
