//! Enrichment phase: channel images and video statistics, one call per entry.

use tracing::warn;

use super::models::{ChannelInfo, StatValue, VideoChannelMap, VideoStats};
use crate::youtube::{ApiError, VideoApi};

/// Look up the default channel thumbnail for every video.
///
/// Repeated channels are looked up again for each video. A channel the API
/// does not know yields a `ChannelInfo` without an image.
///
/// # Errors
///
/// Returns the first upstream error encountered.
pub async fn fetch_channel_thumbnails(
    api: &dyn VideoApi,
    video_to_channel: &VideoChannelMap,
) -> Result<Vec<ChannelInfo>, ApiError> {
    let mut infos = Vec::with_capacity(video_to_channel.len());

    for (video_id, channel_id) in video_to_channel.iter() {
        let profile_image_url = match api.channel(channel_id).await? {
            Some(channel) => channel.snippet.thumbnails.default.map(|t| t.url),
            None => {
                warn!(channel_id, video_id, "Channel not found");
                None
            }
        };
        infos.push(ChannelInfo {
            video_id: video_id.to_string(),
            profile_image_url,
        });
    }

    Ok(infos)
}

/// Fetch statistics for every distinct video. Hidden counters become
/// [`StatValue::Unavailable`]; unknown videos are skipped.
///
/// # Errors
///
/// Returns the first upstream error encountered.
pub async fn fetch_video_statistics(
    api: &dyn VideoApi,
    video_to_channel: &VideoChannelMap,
) -> Result<Vec<VideoStats>, ApiError> {
    let mut stats = Vec::with_capacity(video_to_channel.len());

    for (video_id, _) in video_to_channel.iter() {
        let Some(resource) = api.video_statistics(video_id).await? else {
            warn!(video_id, "Video statistics not found");
            continue;
        };
        let counts = resource.statistics;
        stats.push(VideoStats {
            video_id: video_id.to_string(),
            view_count: StatValue::from_option(counts.view_count),
            like_count: StatValue::from_option(counts.like_count),
            favorite_count: StatValue::from_option(counts.favorite_count),
            comment_count: StatValue::from_option(counts.comment_count),
        });
    }

    Ok(stats)
}
