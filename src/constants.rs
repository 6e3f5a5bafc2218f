//! Shared constants used across the application.

/// User agent sent with every YouTube Data API request.
pub const API_USER_AGENT: &str = concat!("tube-scout/", env!("CARGO_PKG_VERSION"));

/// Prefix of the canonical embeddable player URL; the video ID is appended.
pub const EMBED_URL_PREFIX: &str = "https://www.youtube.com/embed/";

/// Placeholder shown for a statistic the API did not return.
pub const STAT_SENTINEL: &str = "-";

/// Largest `maxResults` the search endpoint serves in one page.
pub const MAX_RESULTS_PER_PAGE: u32 = 50;

/// Longest keyword accepted by the search form.
pub const MAX_KEYWORD_LEN: usize = 100;

/// Build the embeddable player URL for a video.
#[must_use]
pub fn embed_url(video_id: &str) -> String {
    format!("{EMBED_URL_PREFIX}{video_id}")
}
