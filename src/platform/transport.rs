//! Shared HTTP transport for Holodex API requests

use crate::client::ClientConfig;
use crate::error::HolodexError;
use crate::platform::wire::ApiErrorBody;
use crate::query::QueryParams;
use crate::utils::url::{endpoint, parse_base_url};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "X-APIKEY";

/// HTTP transport bound to one base URL and API key
///
/// Read-only after construction; cloning shares the underlying connection
/// pool.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    base_url: Url,
}

impl Transport {
    /// Build the transport from client configuration
    pub fn new(config: &ClientConfig) -> Result<Self, HolodexError> {
        if config.api_key.is_empty() {
            return Err(HolodexError::MissingApiKey);
        }

        let mut api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| HolodexError::InvalidApiKey)?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);

        let mut builder = ClientBuilder::new()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .gzip(true)
            .brotli(true);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: parse_base_url(&config.base_url)?,
        })
    }

    /// Base URL every path is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `segments` with `query` and decode the JSON response
    pub async fn get<T>(&self, segments: &[&str], query: &QueryParams) -> Result<T, HolodexError>
    where
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::GET, segments)
            .query(query.pairs());
        self.execute(request).await
    }

    /// POST `body` as JSON to `segments` and decode the JSON response
    pub async fn post<T, B>(&self, segments: &[&str], body: &B) -> Result<T, HolodexError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, segments).json(body);
        self.execute(request).await
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = endpoint(&self.base_url, segments);
        debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    /// Send one request; a 400 becomes `BadRequest`, other failures pass through
    async fn execute<T>(&self, request: RequestBuilder) -> Result<T, HolodexError>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;

        if response.status() == StatusCode::BAD_REQUEST {
            let body = response.bytes().await?;
            let message = bad_request_message(&body);
            warn!("Request rejected: {}", message);
            return Err(HolodexError::BadRequest(message));
        }

        let response = response.error_for_status()?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| {
            debug!("Failed to decode response body: {}", e);
            HolodexError::Decode(e)
        })
    }
}

/// Server message from a 400 body, falling back to the raw text
fn bad_request_message(body: &[u8]) -> String {
    serde_json::from_slice::<ApiErrorBody>(body)
        .ok()
        .and_then(|error| error.message)
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string())
}
