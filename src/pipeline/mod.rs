//! The search -> enrich -> merge pipeline shared by both search modes.
//!
//! Every API call is awaited in sequence; a failure anywhere aborts the whole
//! request with no partial results.

pub mod enrich;
pub mod merge;
pub mod models;
pub mod search;

use thiserror::Error;
use tracing::info;

pub use enrich::{fetch_channel_thumbnails, fetch_video_statistics};
pub use merge::{build_keyword_table, build_related_table, MergeError};
pub use models::{
    ChannelInfo, EnrichedVideoRow, KeywordTableRow, RelatedSeed, RelatedTableRow,
    RelatedVideoRow, RivalVideo, SearchResult, StatValue, VideoChannelMap, VideoStats,
};
pub use search::{search_by_channels, search_by_keyword, search_related};

use crate::youtube::{ApiError, SearchOrder, SearchWindow, VideoApi};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Upstream(#[from] ApiError),
    #[error(transparent)]
    Merge(#[from] MergeError),
}

/// Validated inputs of a keyword search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordParams {
    pub keyword: String,
    pub max_results: u32,
    pub min_view_count: u64,
    pub order: SearchOrder,
    pub window: SearchWindow,
}

/// Validated inputs of a related-video search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedParams {
    pub my_channel_id: String,
    pub rival_channel_ids: Vec<String>,
    pub rival_max_results: u32,
    pub rival_order: SearchOrder,
    pub rival_window: SearchWindow,
    pub related_max_results: u32,
}

/// Run a keyword search end to end.
///
/// # Errors
///
/// Returns an error if any API call fails or a view count cannot be read.
pub async fn run_keyword_search(
    api: &dyn VideoApi,
    params: &KeywordParams,
) -> Result<Vec<KeywordTableRow>, PipelineError> {
    let searches = search_by_keyword(
        api,
        &params.keyword,
        params.max_results,
        params.order,
        params.window,
    )
    .await?;

    let video_to_channel: VideoChannelMap = searches
        .iter()
        .map(|s| (s.video_id.as_str(), s.channel_id.as_str()))
        .collect();

    let channels = fetch_channel_thumbnails(api, &video_to_channel).await?;
    let stats = fetch_video_statistics(api, &video_to_channel).await?;
    let found = searches.len();
    let table = build_keyword_table(searches, &channels, &stats, params.min_view_count)?;

    info!(
        keyword = %params.keyword,
        found,
        unique = video_to_channel.len(),
        kept = table.len(),
        min_view_count = params.min_view_count,
        "Keyword search complete"
    );
    Ok(table)
}

/// Run a related-video search end to end.
///
/// # Errors
///
/// Returns an error if any API call fails.
pub async fn run_related_search(
    api: &dyn VideoApi,
    params: &RelatedParams,
) -> Result<Vec<RelatedTableRow>, PipelineError> {
    let rivals = search_by_channels(
        api,
        &params.rival_channel_ids,
        params.rival_max_results,
        params.rival_order,
        params.rival_window,
    )
    .await?;

    let seeds = search_related(
        api,
        &rivals,
        &params.my_channel_id,
        params.related_max_results,
    )
    .await?;

    let video_to_channel: VideoChannelMap = seeds
        .iter()
        .map(|s| (s.video.video_id.as_str(), s.video.channel_id.as_str()))
        .collect();

    let channels = fetch_channel_thumbnails(api, &video_to_channel).await?;
    let stats = fetch_video_statistics(api, &video_to_channel).await?;
    let matched = seeds.len();
    let table = build_related_table(seeds, &channels, &stats);

    info!(
        my_channel_id = %params.my_channel_id,
        rival_channels = params.rival_channel_ids.len(),
        rival_videos = rivals.len(),
        matched,
        rows = table.len(),
        "Related search complete"
    );
    Ok(table)
}
