//! Client facade wiring the resource handlers to one shared transport

use crate::error::HolodexError;
use crate::platform::transport::Transport;
use crate::resources::{ChannelHandler, SearchHandler, VideoHandler};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Default Holodex API root
pub const DEFAULT_BASE_URL: &str = "https://holodex.net/api/v2";
/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "HOLODEX_API_KEY";
/// Environment variable overriding the API root
pub const BASE_URL_ENV: &str = "HOLODEX_API_URL";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `https://holodex.net/api/v2`
    pub base_url: String,
    /// Value of the `X-APIKEY` header
    pub api_key: String,
    /// Request timeout; none unless set
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout: None,
            user_agent: format!("holodex-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Default configuration with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Read `HOLODEX_API_KEY` and, if set, `HOLODEX_API_URL`
    pub fn from_env() -> Result<Self, HolodexError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(HolodexError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }
        Ok(config)
    }

    /// Set API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Holodex API client
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HolodexClient {
    channels: ChannelHandler,
    videos: VideoHandler,
    search: SearchHandler,
}

impl HolodexClient {
    /// Create a client for the default API root
    pub fn new(api_key: impl Into<String>) -> Result<Self, HolodexError> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self, HolodexError> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self, HolodexError> {
        let transport = Arc::new(Transport::new(&config)?);
        info!("Holodex client targeting {}", transport.base_url());

        Ok(Self {
            channels: ChannelHandler::new(transport.clone()),
            videos: VideoHandler::new(transport.clone()),
            search: SearchHandler::new(transport),
        })
    }

    pub fn channels(&self) -> &ChannelHandler {
        &self.channels
    }

    pub fn videos(&self) -> &VideoHandler {
        &self.videos
    }

    pub fn search(&self) -> &SearchHandler {
        &self.search
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AutocompleteKind;
    use crate::query::{
        ChannelVideoType, ChannelVideosOptions, CommentSearchOptions, GetVideoOptions,
        ListChannelsOptions, VideoFilter, VideoSearchOptions, VideosOptions,
    };
    use mockito::Matcher;
    use tokio_test::assert_err;

    /// Run every handler operation and collect the failures
    async fn call_everything(client: &HolodexClient) -> Vec<(&'static str, HolodexError)> {
        let channel_opts = ChannelVideosOptions::default();
        let videos_opts = VideosOptions::default();
        let filter = VideoFilter::default();
        let video_search = VideoSearchOptions::default();
        let comment_search = CommentSearchOptions::default();
        let kind = ChannelVideoType::Clips;

        let videos = client.videos();
        let search = client.search();
        let channels = client.channels();

        vec![
            ("channels.list", channels.list(&ListChannelsOptions::default()).await.err()),
            ("channels.get", channels.get("UC1").await.err()),
            ("videos.get", videos.get("abc123", &GetVideoOptions::default()).await.err()),
            ("videos.channel_videos", videos.channel_videos("UC1", kind, &channel_opts).await.err()),
            ("videos.channel_videos_paginated", videos.channel_videos_paginated("UC1", kind, &channel_opts).await.err()),
            ("videos.channel_videos_unpaginated", videos.channel_videos_unpaginated("UC1", kind, &channel_opts).await.err()),
            ("videos.list", videos.list(&videos_opts).await.err()),
            ("videos.list_paginated", videos.list_paginated(&videos_opts).await.err()),
            ("videos.list_unpaginated", videos.list_unpaginated(&videos_opts).await.err()),
            ("videos.live", videos.live(&filter).await.err()),
            ("videos.live_paginated", videos.live_paginated(&filter).await.err()),
            ("videos.live_unpaginated", videos.live_unpaginated(&filter).await.err()),
            ("videos.simple_live", videos.simple_live(&["UC1"]).await.err()),
            ("search.videos", search.videos(&video_search).await.err()),
            ("search.videos_paginated", search.videos_paginated(&video_search).await.err()),
            ("search.videos_unpaginated", search.videos_unpaginated(&video_search).await.err()),
            ("search.comments", search.comments(&comment_search).await.err()),
            ("search.comments_paginated", search.comments_paginated(&comment_search).await.err()),
            ("search.comments_unpaginated", search.comments_unpaginated(&comment_search).await.err()),
            ("search.autocomplete", search.autocomplete("x", Some(AutocompleteKind::Topic)).await.err()),
        ]
        .into_iter()
        .map(|(name, error)| (name, error.unwrap_or_else(|| panic!("{} succeeded", name))))
        .collect()
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_empty());
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("holodex-rs/"));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("key")
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("tests");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent, "tests");
    }

    #[test]
    fn test_client_requires_key() {
        assert_err!(HolodexClient::new(""));
        assert!(HolodexClient::new("key").is_ok());
    }

    #[tokio::test]
    async fn test_every_operation_rewrites_bad_request() {
        let mut server = mockito::Server::new_async().await;
        for method in ["GET", "POST"] {
            server
                .mock(method, Matcher::Any)
                .with_status(400)
                .with_header("content-type", "application/json")
                .with_body(r#"{"message": "bad query"}"#)
                .expect_at_least(1)
                .create_async()
                .await;
        }

        let client =
            HolodexClient::with_config(ClientConfig::new("key").with_base_url(server.url())).unwrap();

        for (name, error) in call_everything(&client).await {
            assert!(error.is_bad_request(), "{}: {:?}", name, error);
            assert_eq!(error.to_string(), "bad query", "{}", name);
        }
    }

    #[tokio::test]
    async fn test_every_operation_propagates_network_failure() {
        // Nothing listens on port 1
        let client =
            HolodexClient::with_config(ClientConfig::new("key").with_base_url("http://127.0.0.1:1"))
                .unwrap();

        for (name, error) in call_everything(&client).await {
            match error {
                HolodexError::Http(e) => assert!(e.is_connect() || e.is_request(), "{}: {:?}", name, e),
                other => panic!("{}: unexpected error {:?}", name, other),
            }
        }
    }

    #[tokio::test]
    async fn test_get_video_returns_unwrapped_record() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/videos/abc123")
            .match_header("x-apikey", "key")
            .with_status(200)
            .with_body(
                serde_json::json!({
                    "id": "abc123",
                    "title": "t",
                    "type": "stream",
                    "duration": 10,
                    "status": "past",
                    "description": "",
                    "channel_id": "UC1",
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client =
            HolodexClient::with_config(ClientConfig::new("key").with_base_url(server.url())).unwrap();
        let video = client
            .videos()
            .get("abc123", &GetVideoOptions::default())
            .await
            .unwrap();
        assert_eq!(video.video.id, "abc123");
    }
}
