use crate::application::ports::feed_source::{FeedResponse, FeedSource};
use crate::shared::config::ApiConfig;
use crate::shared::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// HTTPフィードエンドポイントのクライアント
///
/// タイムアウトはクライアント構築時に固定する。リトライなし。
pub struct HttpFeedSource {
    client: Client,
    base_url: String,
}

impl HttpFeedSource {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| AppError::Network(err.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_feed(
        &self,
        count: u32,
        accept_video_clip: bool,
    ) -> Result<FeedResponse, AppError> {
        let url = format!("{}/feed/", self.base_url);
        debug!(%url, count, accept_video_clip, "fetching feed page");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("count", count.to_string()),
                ("accept_video_clip", accept_video_clip.to_string()),
            ])
            .send()
            .await
            .map_err(|err| AppError::Network(err.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "feed endpoint returned HTTP {}",
                response.status()
            )));
        }

        let feed = response
            .json::<FeedResponse>()
            .await
            .map_err(|err| AppError::Network(format!("failed to decode feed response: {err}")))?;

        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let config = ApiConfig {
            base_url: "https://api.example.com/".to_string(),
            timeout_secs: 5,
            accept_video_clip: true,
        };
        let source = HttpFeedSource::new(&config).expect("client builds");
        assert_eq!(source.base_url, "https://api.example.com");
    }

    #[test]
    fn feed_response_decodes_camel_case_payload() {
        let payload = r#"{
            "statusCode": 0,
            "postList": [{
                "postId": "p1",
                "title": "hello",
                "createTime": 1700000000000,
                "author": {"userId": "u1", "nickname": "n", "avatar": "a"},
                "clips": [{"url": "https://cdn.example.com/v.mp4", "durationMs": 9000, "orderIndex": 0}],
                "likeCount": 3,
                "isLiked": false
            }]
        }"#;

        let response: FeedResponse = serde_json::from_str(payload).expect("decodes");
        assert_eq!(response.status_code, 0);
        let posts = response.post_list.expect("post list present");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].post_id.as_deref(), Some("p1"));
        assert_eq!(posts[0].create_time, Some(1_700_000_000_000));
    }

    #[test]
    fn feed_response_tolerates_missing_post_list() {
        let response: FeedResponse =
            serde_json::from_str(r#"{"statusCode": 3}"#).expect("decodes");
        assert_eq!(response.status_code, 3);
        assert!(response.post_list.is_none());
    }
}
