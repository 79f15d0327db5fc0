pub mod http_feed_source;

pub use http_feed_source::HttpFeedSource;
