pub mod author;
pub mod followed_user;
pub mod post;

pub use author::Author;
pub use followed_user::FollowedUser;
pub use post::{Clip, Hashtag, Music, Post};
