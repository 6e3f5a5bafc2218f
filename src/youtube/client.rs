use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::models::{ChannelListResponse, SearchListResponse, VideoListResponse};
use super::{
    ApiError, ChannelResource, SearchItem, SearchQuery, SearchTarget, VideoApi,
    VideoStatisticsResource,
};
use crate::config::Config;
use crate::constants::{API_USER_AGENT, MAX_RESULTS_PER_PAGE};

/// HTTP client for the YouTube Data API, built once at start-up.
#[derive(Clone)]
pub struct YouTubeClient {
    client: Client,
    base_url: String,
    api_key: String,
    region_code: String,
}

impl std::fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("base_url", &self.base_url)
            .field("region_code", &self.region_code)
            .finish_non_exhaustive()
    }
}

impl YouTubeClient {
    /// Create a client from configuration. Every request is bounded by
    /// `config.http_timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(API_USER_AGENT)
            .build()
            .map_err(ApiError::transport)?;

        Ok(Self {
            client,
            base_url: config.youtube_api_base_url.trim_end_matches('/').to_string(),
            api_key: config.youtube_api_key.clone(),
            region_code: config.region_code.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{endpoint}", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(ApiError::transport)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::transport)?;

        if !status.is_success() {
            let err = ApiError::from_response(status, &body);
            warn!(endpoint, status = status.as_u16(), error = %err, "YouTube API call failed");
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}

/// Clamp a requested result count to what one page can hold.
fn page_size(requested: u32) -> u32 {
    requested.clamp(1, MAX_RESULTS_PER_PAGE)
}

#[async_trait]
impl VideoApi for YouTubeClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchItem>, ApiError> {
        let max_results = page_size(query.max_results);
        if max_results != query.max_results {
            debug!(
                requested = query.max_results,
                max_results, "Clamped search result count to a single page"
            );
        }

        let mut params = vec![
            ("part", "snippet".to_string()),
            ("type", "video".to_string()),
            ("maxResults", max_results.to_string()),
            ("regionCode", self.region_code.clone()),
        ];
        match &query.target {
            SearchTarget::Keyword(q) => params.push(("q", q.clone())),
            SearchTarget::Channel(id) => params.push(("channelId", id.clone())),
            SearchTarget::RelatedTo(id) => params.push(("relatedToVideoId", id.clone())),
        }
        if let Some(order) = query.order {
            params.push(("order", order.as_api_str().to_string()));
        }
        if let Some(window) = query.window {
            params.push(("publishedAfter", window.published_after()));
            params.push(("publishedBefore", window.published_before()));
        }

        debug!(search_target = ?query.target, max_results, "Searching videos");
        let response: SearchListResponse = self.get_json("search", &params).await?;
        debug!(items = response.items.len(), "Search returned");
        Ok(response.items)
    }

    async fn channel(&self, channel_id: &str) -> Result<Option<ChannelResource>, ApiError> {
        debug!(channel_id, "Fetching channel");
        let params = [("part", "snippet".to_string()), ("id", channel_id.to_string())];
        let response: ChannelListResponse = self.get_json("channels", &params).await?;
        Ok(response.items.into_iter().next())
    }

    async fn video_statistics(
        &self,
        video_id: &str,
    ) -> Result<Option<VideoStatisticsResource>, ApiError> {
        debug!(video_id, "Fetching video statistics");
        let params = [
            ("part", "statistics".to_string()),
            ("id", video_id.to_string()),
        ];
        let response: VideoListResponse = self.get_json("videos", &params).await?;
        Ok(response.items.into_iter().next())
    }
}
