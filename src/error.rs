//! Error types for holodex

use thiserror::Error;

/// Main error type for holodex operations
#[derive(Debug, Error)]
pub enum HolodexError {
    /// The API rejected the request with a 400 and this message
    #[error("{0}")]
    BadRequest(String),

    /// Transport failure or any non-400 error status, as reqwest reported it
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Missing field `{0}`")]
    MissingField(&'static str),

    #[error("Invalid count in `{field}`: {value:?}")]
    InvalidCount { field: &'static str, value: String },

    #[error("Invalid timestamp in `{field}`: {value:?}")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("URL parsing error: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("API key is not a valid header value")]
    InvalidApiKey,

    #[error("API key not found")]
    MissingApiKey,

    #[error("Response contained no records")]
    EmptyResponse,
}

impl HolodexError {
    /// Check if the server rejected the request as malformed
    pub fn is_bad_request(&self) -> bool {
        matches!(self, HolodexError::BadRequest(_))
    }

    /// Check if error came from the HTTP layer
    pub fn is_transport(&self) -> bool {
        matches!(self, HolodexError::Http(_))
    }

    /// Check if the response body could not be turned into domain records
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            HolodexError::Decode(_)
                | HolodexError::MissingField(_)
                | HolodexError::InvalidCount { .. }
                | HolodexError::InvalidTimestamp { .. }
                | HolodexError::EmptyResponse
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_displays_server_message_only() {
        let error = HolodexError::BadRequest("bad query".to_string());
        assert_eq!(error.to_string(), "bad query");
        assert!(error.is_bad_request());
        assert!(!error.is_transport());
    }

    #[test]
    fn test_decode_classification() {
        let error = HolodexError::InvalidCount {
            field: "video_count",
            value: "abc".to_string(),
        };
        assert!(error.is_decode());
        assert!(error.to_string().contains("video_count"));

        let json_error = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(HolodexError::from(json_error).is_decode());
    }
}
