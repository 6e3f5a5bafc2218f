//! Request-scoped records flowing through search, enrichment and merge.

use std::collections::HashSet;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::STAT_SENTINEL;
use crate::youtube::SearchItem;

/// A statistic that the API may or may not have returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatValue {
    Available(String),
    Unavailable,
}

impl StatValue {
    #[must_use]
    pub fn from_option(value: Option<String>) -> Self {
        value.map_or(Self::Unavailable, Self::Available)
    }

    /// The value, or the `-` sentinel when unavailable.
    #[must_use]
    pub fn as_display(&self) -> &str {
        match self {
            Self::Available(v) => v,
            Self::Unavailable => STAT_SENTINEL,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_display())
    }
}

impl Serialize for StatValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_display())
    }
}

/// One video returned by a keyword search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub video_id: String,
    pub channel_id: String,
    /// Publish date as `YYYY-MM-DD`.
    pub published_at: String,
    pub title: String,
    pub channel_title: String,
}

impl SearchResult {
    /// Convert an API item; `None` for items that are not videos.
    #[must_use]
    pub fn from_item(item: &SearchItem) -> Option<Self> {
        let video_id = item.video_id()?;
        Some(Self {
            video_id: video_id.to_string(),
            channel_id: item.snippet.channel_id.clone(),
            published_at: item.snippet.published_at.format("%Y-%m-%d").to_string(),
            title: item.snippet.title.clone(),
            channel_title: item.snippet.channel_title.clone(),
        })
    }
}

/// A competitor's video that seeds a related-video search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RivalVideo {
    pub video_id: String,
    pub channel_id: String,
    pub channel_title: String,
    pub title: String,
    pub published_at: String,
}

impl From<SearchResult> for RivalVideo {
    fn from(r: SearchResult) -> Self {
        Self {
            video_id: r.video_id,
            channel_id: r.channel_id,
            channel_title: r.channel_title,
            title: r.title,
            published_at: r.published_at,
        }
    }
}

/// One of my videos found among a rival video's related results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedSeed {
    /// 1-based position in the unfiltered related-search response.
    pub rank: usize,
    pub video: SearchResult,
    pub rival: RivalVideo,
}

/// Profile image of the channel that uploaded a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub video_id: String,
    pub profile_image_url: Option<String>,
}

/// Public counters of a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoStats {
    pub video_id: String,
    pub view_count: StatValue,
    pub like_count: StatValue,
    pub favorite_count: StatValue,
    pub comment_count: StatValue,
}

/// Ordered videoId -> channelId mapping. The first channel recorded for a
/// video wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoChannelMap {
    entries: Vec<(String, String)>,
    seen: HashSet<String>,
}

impl VideoChannelMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pair. Returns `false` if the video was already present.
    pub fn insert(&mut self, video_id: impl Into<String>, channel_id: impl Into<String>) -> bool {
        let video_id = video_id.into();
        if !self.seen.insert(video_id.clone()) {
            return false;
        }
        self.entries.push((video_id, channel_id.into()));
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(v, c)| (v.as_str(), c.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Into<String>, C: Into<String>> FromIterator<(V, C)> for VideoChannelMap {
    fn from_iter<I: IntoIterator<Item = (V, C)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (video_id, channel_id) in iter {
            map.insert(video_id, channel_id);
        }
        map
    }
}

/// A search result left-joined with its channel image and statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedVideoRow {
    pub search: SearchResult,
    pub embed_url: String,
    pub profile_image_url: Option<String>,
    pub stats: Option<VideoStats>,
}

/// An enriched row of my video alongside the rival video it was related to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedVideoRow {
    pub rank: usize,
    pub video: EnrichedVideoRow,
    pub rival: RivalVideo,
    pub rival_embed_url: String,
}

/// Display projection of a keyword-search row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordTableRow {
    pub publishtime: String,
    pub title: String,
    pub channeltitle: String,
    pub url: String,
    #[serde(rename = "profileImg")]
    pub profile_img: String,
    pub viewcount: String,
    #[serde(rename = "likeCount")]
    pub like_count: StatValue,
    #[serde(rename = "favoriteCount")]
    pub favorite_count: StatValue,
    #[serde(rename = "commentCount")]
    pub comment_count: StatValue,
}

impl KeywordTableRow {
    /// Column names in display order.
    pub const COLUMNS: [&'static str; 9] = [
        "publishtime",
        "title",
        "channeltitle",
        "url",
        "profileImg",
        "viewcount",
        "likeCount",
        "favoriteCount",
        "commentCount",
    ];
}

/// Display projection of a related-search row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedTableRow {
    pub ranking: usize,
    pub url: String,
    #[serde(rename = "profileImg")]
    pub profile_img: String,
    pub title: String,
    pub channeltitle: String,
    pub viewcount: StatValue,
    pub publishtime: String,
    #[serde(rename = "likeCount")]
    pub like_count: StatValue,
    #[serde(rename = "favoriteCount")]
    pub favorite_count: StatValue,
    #[serde(rename = "commentCount")]
    pub comment_count: StatValue,
    pub rivalurl: String,
    pub rivaltitle: String,
    pub rivalchanneltitle: String,
    pub rivalpublishtime: String,
}

impl RelatedTableRow {
    /// Column names in display order.
    pub const COLUMNS: [&'static str; 14] = [
        "ranking",
        "url",
        "profileImg",
        "title",
        "channeltitle",
        "viewcount",
        "publishtime",
        "likeCount",
        "favoriteCount",
        "commentCount",
        "rivalurl",
        "rivaltitle",
        "rivalchanneltitle",
        "rivalpublishtime",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_value_sentinel() {
        assert_eq!(StatValue::Unavailable.as_display(), "-");
        assert_eq!(StatValue::Available("12".into()).to_string(), "12");
        assert_eq!(StatValue::from_option(None), StatValue::Unavailable);
    }

    #[test]
    fn test_stat_value_serializes_as_string() {
        let json = serde_json::to_string(&vec![
            StatValue::Available("7".into()),
            StatValue::Unavailable,
        ])
        .unwrap();
        assert_eq!(json, r#"["7","-"]"#);
    }

    #[test]
    fn test_video_channel_map_first_wins() {
        let mut map = VideoChannelMap::new();
        assert!(map.insert("v1", "c1"));
        assert!(map.insert("v2", "c2"));
        assert!(!map.insert("v1", "c9"));
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("v1", "c1"), ("v2", "c2")]);
    }

    #[test]
    fn test_keyword_row_serializes_column_names() {
        let row = KeywordTableRow {
            publishtime: "2024-01-01".into(),
            title: "t".into(),
            channeltitle: "c".into(),
            url: "u".into(),
            profile_img: "p".into(),
            viewcount: "10".into(),
            like_count: StatValue::Unavailable,
            favorite_count: StatValue::Available("0".into()),
            comment_count: StatValue::Available("1".into()),
        };
        let value = serde_json::to_value(&row).unwrap();
        let object = value.as_object().unwrap();
        for column in KeywordTableRow::COLUMNS {
            assert!(object.contains_key(column), "missing {column}");
        }
        assert_eq!(object["likeCount"], "-");
    }
}
