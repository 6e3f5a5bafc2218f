//! Parameters for the `search.list` endpoint.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, SecondsFormat};
use serde::{Deserialize, Serialize};

/// Sort order accepted by the search endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOrder {
    /// Highest view count first.
    #[default]
    #[serde(rename = "viewCount")]
    ViewCount,
    /// Most recently uploaded first.
    #[serde(rename = "date")]
    Date,
    /// Highest rated first.
    #[serde(rename = "rating")]
    Rating,
    /// Most relevant to the query first.
    #[serde(rename = "relevance")]
    Relevance,
}

impl SearchOrder {
    /// Every order, in the sequence the forms list them.
    pub const ALL: [SearchOrder; 4] = [
        SearchOrder::ViewCount,
        SearchOrder::Date,
        SearchOrder::Rating,
        SearchOrder::Relevance,
    ];

    /// Value sent as the `order` query parameter.
    #[must_use]
    pub const fn as_api_str(&self) -> &'static str {
        match self {
            Self::ViewCount => "viewCount",
            Self::Date => "date",
            Self::Rating => "rating",
            Self::Relevance => "relevance",
        }
    }

    /// Human-readable label for form select boxes.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ViewCount => "Most viewed",
            Self::Date => "Newest uploads",
            Self::Rating => "Highest rated",
            Self::Relevance => "Most relevant",
        }
    }
}

impl fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_str())
    }
}

/// Error returned when an order string is not one of the supported values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search order '{0}'")]
pub struct UnknownOrder(pub String);

impl FromStr for SearchOrder {
    type Err = UnknownOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_api_str() == s)
            .ok_or_else(|| UnknownOrder(s.to_string()))
    }
}

/// Publish-date window, sent as midnight UTC timestamps.
///
/// `publishedBefore` is midnight at the start of `end`, so uploads made on the
/// end date itself fall outside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl SearchWindow {
    /// Create a window; returns `None` when `start` is after `end`.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// `publishedAfter` value, e.g. `2024-01-01T00:00:00Z`.
    #[must_use]
    pub fn published_after(&self) -> String {
        midnight_utc(self.start)
    }

    /// `publishedBefore` value, e.g. `2024-01-31T00:00:00Z`.
    #[must_use]
    pub fn published_before(&self) -> String {
        midnight_utc(self.end)
    }
}

fn midnight_utc(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// What a search is anchored on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchTarget {
    /// Free-text `q` search.
    Keyword(String),
    /// Videos uploaded by one channel.
    Channel(String),
    /// Videos the platform considers related to a video.
    RelatedTo(String),
}

/// A single `search.list` request. Results are always restricted to videos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub target: SearchTarget,
    pub max_results: u32,
    pub order: Option<SearchOrder>,
    pub window: Option<SearchWindow>,
}

impl SearchQuery {
    #[must_use]
    pub fn new(target: SearchTarget, max_results: u32) -> Self {
        Self {
            target,
            max_results,
            order: None,
            window: None,
        }
    }

    #[must_use]
    pub fn order(mut self, order: SearchOrder) -> Self {
        self.order = Some(order);
        self
    }

    #[must_use]
    pub fn window(mut self, window: SearchWindow) -> Self {
        self.window = Some(window);
        self
    }
}
