// モジュール定義
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::services::{FeedService, FollowService, ProfileService};
pub use application::use_cases::{GetCachedFeedUseCase, GetFeedUseCase};
pub use domain::entities::{Author, Clip, FollowedUser, Hashtag, Music, Post};
pub use shared::{AppConfig, AppError, Result};
