//! Merge phase: keyed left-joins, de-duplication, threshold filter and
//! projection to display columns.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::models::{
    ChannelInfo, EnrichedVideoRow, KeywordTableRow, RelatedSeed, RelatedTableRow,
    RelatedVideoRow, SearchResult, StatValue, VideoStats,
};
use crate::constants::embed_url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    #[error("no statistics were returned for video {video_id}")]
    MissingViewCount { video_id: String },
    #[error("view count '{value}' of video {video_id} is not a whole number")]
    InvalidViewCount { video_id: String, value: String },
}

/// Keep the first item for each key, preserving order.
fn dedup_by_key<T>(items: Vec<T>, key: impl Fn(&T) -> &str) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item).to_string()))
        .collect()
}

/// Lookup tables for the left-joins. The first record per video wins.
struct JoinIndex<'a> {
    channels: HashMap<&'a str, &'a ChannelInfo>,
    stats: HashMap<&'a str, &'a VideoStats>,
}

impl<'a> JoinIndex<'a> {
    fn new(channels: &'a [ChannelInfo], stats: &'a [VideoStats]) -> Self {
        let mut channel_index = HashMap::with_capacity(channels.len());
        for info in channels {
            channel_index.entry(info.video_id.as_str()).or_insert(info);
        }
        let mut stats_index = HashMap::with_capacity(stats.len());
        for s in stats {
            stats_index.entry(s.video_id.as_str()).or_insert(s);
        }
        Self {
            channels: channel_index,
            stats: stats_index,
        }
    }

    fn enrich(&self, search: SearchResult) -> EnrichedVideoRow {
        let video_id = search.video_id.as_str();
        EnrichedVideoRow {
            embed_url: embed_url(video_id),
            profile_image_url: self
                .channels
                .get(video_id)
                .and_then(|c| c.profile_image_url.clone()),
            stats: self.stats.get(video_id).map(|s| (*s).clone()),
            search,
        }
    }
}

fn parse_view_count(row: &EnrichedVideoRow) -> Result<u64, MergeError> {
    let video_id = &row.search.video_id;
    let value = match row.stats.as_ref().map(|s| &s.view_count) {
        None => {
            return Err(MergeError::MissingViewCount {
                video_id: video_id.clone(),
            })
        }
        Some(StatValue::Unavailable) => {
            return Err(MergeError::InvalidViewCount {
                video_id: video_id.clone(),
                value: StatValue::Unavailable.to_string(),
            })
        }
        Some(StatValue::Available(v)) => v,
    };
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| MergeError::InvalidViewCount {
            video_id: video_id.clone(),
            value: value.clone(),
        })
}

fn stat_or_unavailable(stats: Option<&VideoStats>, pick: fn(&VideoStats) -> &StatValue) -> StatValue {
    stats.map_or(StatValue::Unavailable, |s| pick(s).clone())
}

/// Build the keyword-mode table: dedup, join, keep rows with at least
/// `min_view_count` views, project to display columns. Input order is kept.
///
/// # Errors
///
/// Returns an error if a row's view count is missing or not an integer.
pub fn build_keyword_table(
    searches: Vec<SearchResult>,
    channels: &[ChannelInfo],
    stats: &[VideoStats],
    min_view_count: u64,
) -> Result<Vec<KeywordTableRow>, MergeError> {
    let index = JoinIndex::new(channels, stats);
    let mut table = Vec::new();

    for search in dedup_by_key(searches, |s| s.video_id.as_str()) {
        let row = index.enrich(search);
        let view_count = parse_view_count(&row)?;
        if view_count < min_view_count {
            continue;
        }
        let stats = row.stats.as_ref();
        table.push(KeywordTableRow {
            publishtime: row.search.published_at,
            title: row.search.title,
            channeltitle: row.search.channel_title,
            url: row.embed_url,
            profile_img: row.profile_image_url.unwrap_or_default(),
            viewcount: view_count.to_string(),
            like_count: stat_or_unavailable(stats, |s| &s.like_count),
            favorite_count: stat_or_unavailable(stats, |s| &s.favorite_count),
            comment_count: stat_or_unavailable(stats, |s| &s.comment_count),
        });
    }

    Ok(table)
}

/// Join related seeds with their enrichment, dedup by video, without any
/// view-count filter.
#[must_use]
pub fn enrich_related(
    related: Vec<RelatedSeed>,
    channels: &[ChannelInfo],
    stats: &[VideoStats],
) -> Vec<RelatedVideoRow> {
    let index = JoinIndex::new(channels, stats);
    dedup_by_key(related, |seed| seed.video.video_id.as_str())
        .into_iter()
        .map(|seed| RelatedVideoRow {
            rank: seed.rank,
            rival_embed_url: embed_url(&seed.rival.video_id),
            video: index.enrich(seed.video),
            rival: seed.rival,
        })
        .collect()
}

/// Build the related-mode comparison table.
#[must_use]
pub fn build_related_table(
    related: Vec<RelatedSeed>,
    channels: &[ChannelInfo],
    stats: &[VideoStats],
) -> Vec<RelatedTableRow> {
    enrich_related(related, channels, stats)
        .into_iter()
        .map(|row| {
            let stats = row.video.stats.as_ref();
            RelatedTableRow {
                ranking: row.rank,
                url: row.video.embed_url.clone(),
                profile_img: row.video.profile_image_url.clone().unwrap_or_default(),
                title: row.video.search.title.clone(),
                channeltitle: row.video.search.channel_title.clone(),
                viewcount: stat_or_unavailable(stats, |s| &s.view_count),
                publishtime: row.video.search.published_at.clone(),
                like_count: stat_or_unavailable(stats, |s| &s.like_count),
                favorite_count: stat_or_unavailable(stats, |s| &s.favorite_count),
                comment_count: stat_or_unavailable(stats, |s| &s.comment_count),
                rivalurl: row.rival_embed_url,
                rivaltitle: row.rival.title,
                rivalchanneltitle: row.rival.channel_title,
                rivalpublishtime: row.rival.published_at,
            }
        })
        .collect()
}
