pub mod feed_service;
pub mod follow_service;
pub mod profile_service;

pub use feed_service::FeedService;
pub use follow_service::FollowService;
pub use profile_service::ProfileService;
