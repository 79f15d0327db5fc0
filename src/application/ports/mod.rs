pub mod cache;
pub mod feed_source;
pub mod preferences;
pub mod repositories;
