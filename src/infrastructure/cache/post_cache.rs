use crate::application::ports::cache::PostCache;
use crate::domain::entities::Post;
use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// 投稿キャッシュサービス
///
/// 容量上限つき。上限に達すると最も古く書き込まれたエントリから
/// 追い出す。読み取りは順序を変えない（peek のみ）。
#[derive(Clone)]
pub struct PostCacheService {
    cache: Arc<RwLock<LruCache<String, Post>>>,
}

impl PostCacheService {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// 投稿をキャッシュに追加
    pub async fn add(&self, post: Post) {
        let mut cache = self.cache.write().await;
        cache.put(post.id.clone(), post);
    }

    /// 複数の投稿をキャッシュに追加
    pub async fn add_many(&self, posts: Vec<Post>) {
        let mut cache = self.cache.write().await;
        for post in posts {
            cache.put(post.id.clone(), post);
        }
    }

    /// IDで投稿を取得
    pub async fn get(&self, id: &str) -> Option<Post> {
        let cache = self.cache.read().await;
        cache.peek(id).cloned()
    }

    /// 最後に書き込まれた順で最大 `count` 件
    pub async fn latest(&self, count: usize) -> Vec<Post> {
        let cache = self.cache.read().await;
        cache
            .iter()
            .take(count)
            .map(|(_, post)| post.clone())
            .collect()
    }

    /// 投稿を削除
    pub async fn remove(&self, id: &str) -> Option<Post> {
        let mut cache = self.cache.write().await;
        cache.pop(id)
    }

    /// キャッシュをクリア
    pub async fn clear(&self) {
        let mut cache = self.cache.write().await;
        cache.clear();
    }

    /// キャッシュサイズを取得
    pub async fn size(&self) -> usize {
        let cache = self.cache.read().await;
        cache.len()
    }
}

#[async_trait]
impl PostCache for PostCacheService {
    async fn add(&self, post: Post) {
        PostCacheService::add(self, post).await;
    }

    async fn add_many(&self, posts: Vec<Post>) {
        PostCacheService::add_many(self, posts).await;
    }

    async fn get(&self, id: &str) -> Option<Post> {
        PostCacheService::get(self, id).await
    }

    async fn latest(&self, count: usize) -> Vec<Post> {
        PostCacheService::latest(self, count).await
    }

    async fn remove(&self, id: &str) -> Option<Post> {
        PostCacheService::remove(self, id).await
    }

    async fn clear(&self) {
        PostCacheService::clear(self).await;
    }

    async fn size(&self) -> usize {
        PostCacheService::size(self).await
    }
}
