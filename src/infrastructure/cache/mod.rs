pub mod post_cache;

pub use post_cache::PostCacheService;
