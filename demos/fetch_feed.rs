use reelfeed::application::services::FeedService;
use reelfeed::application::use_cases::GetFeedUseCase;
use reelfeed::infrastructure::api::HttpFeedSource;
use reelfeed::infrastructure::cache::PostCacheService;
use reelfeed::infrastructure::database::{ConnectionPool, Repository, SqliteRepository};
use reelfeed::shared::AppConfig;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env();
    config.validate().map_err(anyhow::Error::msg)?;

    let source = Arc::new(HttpFeedSource::new(&config.api)?);
    let cache = Arc::new(PostCacheService::new(config.cache.max_entries));
    let pool = ConnectionPool::new(&config.database.url, config.database.max_connections).await?;
    let repository = Arc::new(SqliteRepository::new(pool));
    repository.initialize().await?;

    let service = Arc::new(FeedService::new(source, cache, repository));
    let get_feed = GetFeedUseCase::new(Arc::clone(&service), config.api.accept_video_clip);

    info!(page_size = config.feed.fresh_page_size, "fetching one feed page");
    let posts = get_feed.execute(Some(config.feed.fresh_page_size)).await?;

    for post in &posts {
        println!(
            "{} | {} | by {} | {} clips | {} likes",
            post.id,
            post.title,
            post.author.nickname,
            post.clips.len(),
            post.like_count
        );
    }
    println!("fetched {} posts", posts.len());

    Ok(())
}
