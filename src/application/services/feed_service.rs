use crate::application::ports::cache::PostCache;
use crate::application::ports::feed_source::{FeedSource, FEED_STATUS_OK};
use crate::application::ports::repositories::PostStore;
use crate::application::shared::mappers::post_from_raw;
use crate::domain::entities::Post;
use crate::shared::error::AppError;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// フィード取得の中核サービス
///
/// リモート取得 → 検証 → 重複排除 → キャッシュ/ストア反映 を
/// 1回の呼び出しで行う。取得が失敗した場合はキャッシュもストアも
/// 変更しない。
pub struct FeedService {
    source: Arc<dyn FeedSource>,
    cache: Arc<dyn PostCache>,
    store: Arc<dyn PostStore>,
}

impl FeedService {
    pub fn new(
        source: Arc<dyn FeedSource>,
        cache: Arc<dyn PostCache>,
        store: Arc<dyn PostStore>,
    ) -> Self {
        Self {
            source,
            cache,
            store,
        }
    }

    /// フィードを1ページ取得する。
    ///
    /// 個々の不正な項目はスキップして続行する。項目の順序は
    /// レスポンス順を維持し、同一IDは最初の出現を残す。
    pub async fn get_feed(
        &self,
        count: u32,
        accept_video_clip: bool,
    ) -> Result<Vec<Post>, AppError> {
        if count == 0 {
            return Err(AppError::InvalidInput(
                "count must be greater than 0".to_string(),
            ));
        }

        debug!(count, accept_video_clip, "requesting feed page");
        let response = self.source.fetch_feed(count, accept_video_clip).await?;

        if response.status_code != FEED_STATUS_OK {
            warn!(
                status_code = response.status_code,
                "feed endpoint returned error status"
            );
            return Err(AppError::Api(format!(
                "feed request failed with status {}",
                response.status_code
            )));
        }

        let Some(raw_posts) = response.post_list else {
            return Err(AppError::Api(
                "feed response is missing the post list".to_string(),
            ));
        };

        let received = raw_posts.len();
        let mut seen: HashSet<String> = HashSet::with_capacity(received);
        let mut posts: Vec<Post> = Vec::with_capacity(received);

        for raw in raw_posts {
            let post = match post_from_raw(raw) {
                Ok(post) => post,
                Err(err) => {
                    warn!("skipping malformed feed item: {err}");
                    continue;
                }
            };
            if seen.insert(post.id.clone()) {
                posts.push(post);
            }
        }

        info!(received, kept = posts.len(), "feed page mapped");

        // 全件の変換が終わってから書き込む。途中失敗で部分的に
        // キャッシュが汚れることはない。
        self.store.upsert_posts(&posts).await?;
        self.cache.add_many(posts.clone()).await;

        Ok(posts)
    }

    /// キャッシュからの単体取得。欠落はエラーではない。
    pub async fn get_cached_post(&self, id: &str) -> Option<Post> {
        self.cache.get(id).await
    }

    /// 直近にキャッシュされた投稿を最大 `count` 件返す。
    /// 順序は「最後に書き込まれたものが先頭」で固定。
    pub async fn get_latest_cached(&self, count: usize) -> Vec<Post> {
        self.cache.latest(count).await
    }

    /// オフラインストアから作成日時の新しい順に読み出す
    pub async fn get_persisted_posts(&self, count: usize) -> Result<Vec<Post>, AppError> {
        self.store.get_latest_posts(count).await
    }
}
