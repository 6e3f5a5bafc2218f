//! Search phase: turn form parameters into candidate videos.

use tracing::debug;

use super::models::{RelatedSeed, RivalVideo, SearchResult};
use crate::youtube::{
    ApiError, SearchOrder, SearchQuery, SearchTarget, SearchWindow, VideoApi,
};

/// Search videos matching `keyword` inside the publish window.
///
/// # Errors
///
/// Returns the upstream error unchanged.
pub async fn search_by_keyword(
    api: &dyn VideoApi,
    keyword: &str,
    max_results: u32,
    order: SearchOrder,
    window: SearchWindow,
) -> Result<Vec<SearchResult>, ApiError> {
    let query = SearchQuery::new(SearchTarget::Keyword(keyword.to_string()), max_results)
        .order(order)
        .window(window);

    let items = api.search(&query).await?;
    Ok(items.iter().filter_map(SearchResult::from_item).collect())
}

/// Search each channel in turn and concatenate the results.
///
/// A failure on any channel aborts the whole operation.
///
/// # Errors
///
/// Returns the first upstream error encountered.
pub async fn search_by_channels(
    api: &dyn VideoApi,
    channel_ids: &[String],
    max_results: u32,
    order: SearchOrder,
    window: SearchWindow,
) -> Result<Vec<RivalVideo>, ApiError> {
    let mut rivals = Vec::new();

    for channel_id in channel_ids {
        let query = SearchQuery::new(SearchTarget::Channel(channel_id.clone()), max_results)
            .order(order)
            .window(window);

        let items = api.search(&query).await?;
        let before = rivals.len();
        rivals.extend(
            items
                .iter()
                .filter_map(SearchResult::from_item)
                .map(RivalVideo::from),
        );
        debug!(channel_id = %channel_id, videos = rivals.len() - before, "Rival channel searched");
    }

    Ok(rivals)
}

/// For each rival video, find which of `my_channel_id`'s videos the platform
/// lists as related.
///
/// The rank of a kept item is its 1-based position in the full response,
/// counting items from other channels that were filtered out.
///
/// # Errors
///
/// Returns the first upstream error encountered.
pub async fn search_related(
    api: &dyn VideoApi,
    rivals: &[RivalVideo],
    my_channel_id: &str,
    max_results: u32,
) -> Result<Vec<RelatedSeed>, ApiError> {
    let mut seeds = Vec::new();

    for rival in rivals {
        let query = SearchQuery::new(SearchTarget::RelatedTo(rival.video_id.clone()), max_results);
        let items = api.search(&query).await?;

        for (index, item) in items.iter().enumerate() {
            if item.snippet.channel_id != my_channel_id {
                continue;
            }
            if let Some(video) = SearchResult::from_item(item) {
                seeds.push(RelatedSeed {
                    rank: index + 1,
                    video,
                    rival: rival.clone(),
                });
            }
        }
    }

    Ok(seeds)
}
