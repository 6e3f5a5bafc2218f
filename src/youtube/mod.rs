//! YouTube Data API v3 access.
//!
//! The pipeline only talks to the [`VideoApi`] trait. [`YouTubeClient`] is the
//! production implementation; tests substitute in-memory fakes or point the
//! client at a mock server.

mod client;
pub mod models;
pub mod query;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

pub use client::YouTubeClient;
pub use models::{ChannelResource, SearchItem, VideoStatisticsResource};
pub use query::{SearchOrder, SearchQuery, SearchTarget, SearchWindow};

use models::ErrorEnvelope;

/// Failure talking to the YouTube Data API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("YouTube API rejected the credentials: {0}")]
    Auth(String),
    #[error("YouTube API quota exceeded: {0}")]
    QuotaExceeded(String),
    #[error("YouTube API returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("request to YouTube API failed: {0}")]
    Http(#[source] reqwest::Error),
    #[error("failed to decode YouTube API response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl ApiError {
    /// Wrap a transport error, dropping the request URL (it carries the API key).
    #[must_use]
    pub fn transport(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }

    /// Classify a non-success response using the Google error envelope when present.
    #[must_use]
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let (message, reasons) = match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => (
                envelope.error.message,
                envelope
                    .error
                    .errors
                    .into_iter()
                    .filter_map(|d| d.reason)
                    .collect::<Vec<_>>(),
            ),
            Err(_) => (body.trim().chars().take(200).collect(), Vec::new()),
        };
        let message = if message.is_empty() {
            status.canonical_reason().unwrap_or("unknown error").to_string()
        } else {
            message
        };

        let has_reason = |wanted: &[&str]| reasons.iter().any(|r| wanted.contains(&r.as_str()));

        if has_reason(&["quotaExceeded", "dailyLimitExceeded", "rateLimitExceeded"]) {
            Self::QuotaExceeded(message)
        } else if status == StatusCode::UNAUTHORIZED
            || status == StatusCode::FORBIDDEN
            || has_reason(&["keyInvalid", "keyExpired", "accessNotConfigured", "forbidden"])
        {
            Self::Auth(message)
        } else {
            Self::Status {
                status: status.as_u16(),
                message,
            }
        }
    }
}

/// The three read-only operations the pipeline needs from the video platform.
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// Run one `search.list` request and return its single page of items.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchItem>, ApiError>;

    /// Look up a channel's snippet. `None` when the channel does not exist.
    async fn channel(&self, channel_id: &str) -> Result<Option<ChannelResource>, ApiError>;

    /// Look up a video's statistics. `None` when the video does not exist.
    async fn video_statistics(
        &self,
        video_id: &str,
    ) -> Result<Option<VideoStatisticsResource>, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_exceeded_is_classified() {
        let body = r#"{"error":{"code":403,"message":"The request cannot be completed because you have exceeded your quota.","errors":[{"reason":"quotaExceeded","domain":"youtube.quota"}]}}"#;
        let err = ApiError::from_response(StatusCode::FORBIDDEN, body);
        assert!(matches!(err, ApiError::QuotaExceeded(ref m) if m.contains("quota")));
    }

    #[test]
    fn test_invalid_key_is_auth() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","errors":[{"reason":"badRequest"},{"reason":"keyInvalid"}]}}"#;
        let err = ApiError::from_response(StatusCode::BAD_REQUEST, body);
        assert!(matches!(err, ApiError::Auth(_)));
    }

    #[test]
    fn test_forbidden_without_quota_reason_is_auth() {
        let err = ApiError::from_response(StatusCode::FORBIDDEN, "Forbidden");
        assert!(matches!(err, ApiError::Auth(ref m) if m == "Forbidden"));

        let body = r#"{"error":{"code":403,"message":"Requests from referer are blocked.","errors":[{"reason":"ipRefererBlocked"}]}}"#;
        let err = ApiError::from_response(StatusCode::FORBIDDEN, body);
        assert!(matches!(err, ApiError::Auth(ref m) if m == "Requests from referer are blocked."));
    }

    #[test]
    fn test_plain_text_body_becomes_status() {
        let err = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "  upstream exploded ");
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_body_uses_reason_phrase() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, "");
        assert_eq!(err.to_string(), "YouTube API returned 404: Not Found");
    }
}
