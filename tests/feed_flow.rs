use async_trait::async_trait;
use reelfeed::application::ports::cache::PostCache;
use reelfeed::application::ports::feed_source::{
    FeedResponse, FeedSource, RawAuthor, RawClip, RawPost, FEED_STATUS_OK,
};
use reelfeed::application::ports::repositories::PostStore;
use reelfeed::application::services::FeedService;
use reelfeed::application::use_cases::{
    GetCachedFeedUseCase, GetFeedUseCase, DEFAULT_CACHED_PAGE_SIZE, DEFAULT_FRESH_PAGE_SIZE,
};
use reelfeed::infrastructure::cache::PostCacheService;
use reelfeed::infrastructure::database::{ConnectionPool, Repository, SqliteRepository};
use reelfeed::AppError;
use std::sync::Arc;
use tokio::sync::Mutex;

struct ScriptedFeedSource {
    responses: Mutex<Vec<Result<FeedResponse, AppError>>>,
    calls: Mutex<Vec<(u32, bool)>>,
}

impl ScriptedFeedSource {
    fn new(responses: Vec<Result<FeedResponse, AppError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: Mutex::new(Vec::new()),
        }
    }

    async fn recorded_calls(&self) -> Vec<(u32, bool)> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl FeedSource for ScriptedFeedSource {
    async fn fetch_feed(
        &self,
        count: u32,
        accept_video_clip: bool,
    ) -> Result<FeedResponse, AppError> {
        self.calls.lock().await.push((count, accept_video_clip));
        let mut responses = self.responses.lock().await;
        if responses.is_empty() {
            return Ok(FeedResponse {
                status_code: FEED_STATUS_OK,
                post_list: Some(Vec::new()),
            });
        }
        responses.remove(0)
    }
}

fn raw_post(id: &str, title: &str, create_time: i64) -> RawPost {
    RawPost {
        post_id: Some(id.to_string()),
        title: Some(title.to_string()),
        content: Some("content".to_string()),
        create_time: Some(create_time),
        author: Some(RawAuthor {
            user_id: Some("author-1".to_string()),
            nickname: Some("creator".to_string()),
            avatar: Some("https://cdn.example.com/a.png".to_string()),
        }),
        clips: Some(vec![RawClip {
            url: Some(format!("https://cdn.example.com/{id}.mp4")),
            duration_ms: Some(10_000),
            order_index: Some(0),
        }]),
        ..RawPost::default()
    }
}

fn success(posts: Vec<RawPost>) -> Result<FeedResponse, AppError> {
    Ok(FeedResponse {
        status_code: FEED_STATUS_OK,
        post_list: Some(posts),
    })
}

async fn setup_stack(
    source: Arc<dyn FeedSource>,
) -> (Arc<FeedService>, Arc<SqliteRepository>, Arc<PostCacheService>) {
    let pool = ConnectionPool::from_memory()
        .await
        .expect("failed to create pool");
    let repository = Arc::new(SqliteRepository::new(pool));
    repository
        .initialize()
        .await
        .expect("failed to initialize repository schema");
    let cache = Arc::new(PostCacheService::new(64));

    let service = Arc::new(FeedService::new(
        source,
        Arc::clone(&cache) as Arc<dyn PostCache>,
        Arc::clone(&repository) as Arc<dyn PostStore>,
    ));

    (service, repository, cache)
}

#[tokio::test]
async fn fresh_fetch_flows_into_cache_and_offline_store() {
    let source = Arc::new(ScriptedFeedSource::new(vec![success(vec![
        raw_post("a", "first a", 1_700_000_000_000),
        raw_post("a", "second a", 1_700_000_001_000),
        raw_post("", "dropped", 1_700_000_002_000),
        raw_post("b", "only b", 1_700_000_003_000),
    ])]));
    let (service, repository, cache) = setup_stack(source).await;

    let posts = service.get_feed(4, true).await.expect("fetch succeeds");

    let ids: Vec<&str> = posts.iter().map(|post| post.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(posts[0].title, "first a");

    // キャッシュとオフラインストアの両方に同じスナップショットが入る
    assert_eq!(cache.size().await, 2);
    for post in &posts {
        assert_eq!(cache.get(&post.id).await.as_ref(), Some(post));
        let stored = repository
            .get_post(&post.id)
            .await
            .expect("store query")
            .expect("post persisted");
        assert_eq!(&stored, post);
    }
}

#[tokio::test]
async fn failed_refresh_keeps_previous_snapshot_readable() {
    let source = Arc::new(ScriptedFeedSource::new(vec![
        success(vec![raw_post("a", "a", 1_700_000_000_000)]),
        Err(AppError::Network("connection reset".to_string())),
    ]));
    let (service, repository, cache) = setup_stack(source).await;

    service.get_feed(1, true).await.expect("first fetch");
    let err = service.get_feed(1, true).await.expect_err("second fails");
    assert!(matches!(err, AppError::Network(_)));

    // 失敗してもキャッシュ・ストアとも前回の内容のまま
    assert_eq!(cache.size().await, 1);
    assert!(service.get_cached_post("a").await.is_some());
    assert_eq!(repository.count_posts().await.expect("count"), 1);

    let offline = service
        .get_persisted_posts(10)
        .await
        .expect("offline read");
    assert_eq!(offline.len(), 1);
    assert_eq!(offline[0].id, "a");
}

#[tokio::test]
async fn use_cases_apply_their_default_page_sizes() {
    let source = Arc::new(ScriptedFeedSource::new(vec![success(vec![])]));
    let (service, _repository, _cache) = setup_stack(source.clone()).await;

    let get_feed = GetFeedUseCase::new(Arc::clone(&service), true);
    get_feed.execute(None).await.expect("fetch succeeds");

    assert_eq!(
        source.recorded_calls().await,
        vec![(DEFAULT_FRESH_PAGE_SIZE, true)]
    );
}

#[tokio::test]
async fn cached_use_case_reads_without_touching_the_network() {
    let raw: Vec<RawPost> = (0..15)
        .map(|n| raw_post(&format!("p{n}"), "t", 1_700_000_000_000 + n))
        .collect();
    let source = Arc::new(ScriptedFeedSource::new(vec![success(raw)]));
    let (service, _repository, _cache) = setup_stack(source.clone()).await;

    service.get_feed(15, true).await.expect("fetch succeeds");

    let cached_use_case = GetCachedFeedUseCase::new(Arc::clone(&service));
    let cached = cached_use_case.execute(None).await;

    assert_eq!(cached.len(), DEFAULT_CACHED_PAGE_SIZE);
    assert_eq!(cached[0].id, "p14", "most recently cached first");
    assert_eq!(
        source.recorded_calls().await.len(),
        1,
        "cached read makes no network call"
    );
}

#[tokio::test]
async fn semantic_failure_is_reported_not_swallowed() {
    let source = Arc::new(ScriptedFeedSource::new(vec![Ok(FeedResponse {
        status_code: 500,
        post_list: None,
    })]));
    let (service, _repository, cache) = setup_stack(source).await;

    let err = service.get_feed(5, true).await.expect_err("must fail");
    assert!(matches!(err, AppError::Api(_)));
    assert_eq!(cache.size().await, 0);
}
