use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    // クリップ配信に対応したクライアントかどうか
    pub accept_video_clip: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub max_entries: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub fresh_page_size: u32,
    pub cached_page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://api.example.com".to_string(),
                timeout_secs: 30,
                accept_video_clip: true,
            },
            database: DatabaseConfig {
                url: "sqlite:data/reelfeed.db?mode=rwc".to_string(),
                max_connections: 5,
                connection_timeout: 30,
            },
            cache: CacheConfig { max_entries: 1024 },
            feed: FeedConfig {
                fresh_page_size: 20,
                cached_page_size: 10,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        // 既定値
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("REELFEED_API_BASE_URL") {
            let trimmed = v.trim().to_string();
            if !trimmed.is_empty() {
                cfg.api.base_url = trimmed;
            }
        }
        if let Ok(v) = std::env::var("REELFEED_API_TIMEOUT_SECS") {
            if let Some(value) = parse_u64(&v) {
                cfg.api.timeout_secs = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("REELFEED_ACCEPT_VIDEO_CLIP") {
            cfg.api.accept_video_clip = parse_bool(&v, cfg.api.accept_video_clip);
        }

        if let Ok(v) = std::env::var("REELFEED_DATABASE_URL") {
            let trimmed = v.trim().to_string();
            if !trimmed.is_empty() {
                cfg.database.url = trimmed;
            }
        }
        if let Ok(v) = std::env::var("REELFEED_DATABASE_MAX_CONNECTIONS") {
            if let Some(value) = parse_u32(&v) {
                cfg.database.max_connections = value.max(1);
            }
        }

        if let Ok(v) = std::env::var("REELFEED_CACHE_MAX_ENTRIES") {
            if let Some(value) = parse_u64(&v) {
                cfg.cache.max_entries = (value.max(1)) as usize;
            }
        }

        if let Ok(v) = std::env::var("REELFEED_FRESH_PAGE_SIZE") {
            if let Some(value) = parse_u32(&v) {
                cfg.feed.fresh_page_size = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("REELFEED_CACHED_PAGE_SIZE") {
            if let Some(value) = parse_u64(&v) {
                cfg.feed.cached_page_size = (value.max(1)) as usize;
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api.base_url.trim().is_empty() {
            return Err("Api base_url must not be empty".to_string());
        }
        if self.api.timeout_secs == 0 {
            return Err("Api timeout_secs must be greater than 0".to_string());
        }
        if self.database.max_connections == 0 {
            return Err("Database max_connections must be greater than 0".to_string());
        }
        if self.cache.max_entries == 0 {
            return Err("Cache max_entries must be greater than 0".to_string());
        }
        if self.feed.fresh_page_size == 0 {
            return Err("Feed fresh_page_size must be greater than 0".to_string());
        }
        if self.feed.cached_page_size == 0 {
            return Err("Feed cached_page_size must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn parse_bool(s: &str, default: bool) -> bool {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

fn parse_u32(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.feed.fresh_page_size, 20);
        assert_eq!(cfg.feed.cached_page_size, 10);
    }

    #[test]
    fn validate_rejects_empty_base_url() {
        let mut cfg = AppConfig::default();
        cfg.api.base_url = "  ".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_cache_capacity() {
        let mut cfg = AppConfig::default();
        cfg.cache.max_entries = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn parse_bool_accepts_common_forms() {
        assert!(parse_bool("true", false));
        assert!(parse_bool("1", false));
        assert!(!parse_bool("off", true));
        assert!(parse_bool("garbage", true));
    }
}
