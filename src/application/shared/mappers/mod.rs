pub mod posts;

pub use posts::post_from_raw;
