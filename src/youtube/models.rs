//! Response bodies of the YouTube Data API v3 endpoints we call.

use chrono::{DateTime, Utc};
use serde::Deserialize;

// --- search.list ---

#[derive(Debug, Clone, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
    pub snippet: SearchSnippet,
}

impl SearchItem {
    /// Video ID of the result; `None` for channel or playlist results.
    #[must_use]
    pub fn video_id(&self) -> Option<&str> {
        self.id.video_id.as_deref()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    pub kind: Option<String>,
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippet {
    pub published_at: DateTime<Utc>,
    pub channel_id: String,
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
}

// --- channels.list ---

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<ChannelResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelResource {
    pub id: String,
    pub snippet: ChannelSnippet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelSnippet {
    pub title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

// --- videos.list (part=statistics) ---

#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoStatisticsResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoStatisticsResource {
    pub id: String,
    #[serde(default)]
    pub statistics: VideoStatistics,
}

/// Counts are decimal strings. Any of them is omitted when the owner hides it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub favorite_count: Option<String>,
    pub comment_count: Option<String>,
}

// --- error envelope ---

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub reason: Option<String>,
}
