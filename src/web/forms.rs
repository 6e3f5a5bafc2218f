//! Raw form submissions and their validation into pipeline parameters.
//!
//! Fields are kept as strings so a rejected submission can be echoed back
//! into the form unchanged.

use chrono::{Duration, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

use crate::constants::MAX_KEYWORD_LEN;
use crate::pipeline::{KeywordParams, RelatedParams};
use crate::youtube::query::UnknownOrder;
use crate::youtube::{SearchOrder, SearchWindow};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days before today that the default publish window starts.
const DEFAULT_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{field} must be a whole number, got '{value}'")]
    NotAnInteger { field: &'static str, value: String },
    #[error("{field} must be at least {min}")]
    TooSmall { field: &'static str, min: u64 },
    #[error(transparent)]
    Order(#[from] UnknownOrder),
    #[error("{field} must be a date in YYYY-MM-DD format, got '{value}'")]
    InvalidDate { field: &'static str, value: String },
    #[error("search start {start} is after search end {end}")]
    InvertedWindow { start: NaiveDate, end: NaiveDate },
}

/// Keyword-mode form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeywordForm {
    pub keyword: String,
    pub items_count: String,
    pub viewcount: String,
    pub order: String,
    pub search_start: String,
    pub search_end: String,
}

impl KeywordForm {
    /// Initial values shown on first visit.
    #[must_use]
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            keyword: String::new(),
            items_count: "12".to_string(),
            viewcount: "1000".to_string(),
            order: SearchOrder::ViewCount.as_api_str().to_string(),
            search_start: format_date(today - Duration::days(DEFAULT_WINDOW_DAYS)),
            search_end: format_date(today),
        }
    }

    /// Validate the submission.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<KeywordParams, ValidationError> {
        let keyword = required("Keyword", &self.keyword)?;
        if keyword.chars().count() > MAX_KEYWORD_LEN {
            return Err(ValidationError::TooLong {
                field: "Keyword",
                max: MAX_KEYWORD_LEN,
            });
        }

        Ok(KeywordParams {
            keyword: keyword.to_string(),
            max_results: parse_count("Result count", &self.items_count)?,
            min_view_count: parse_number("Minimum views", &self.viewcount)?,
            order: required("Order", &self.order)?.parse::<SearchOrder>()?,
            window: parse_window(
                ("Search start", &self.search_start),
                ("Search end", &self.search_end),
            )?,
        })
    }
}

/// Related-mode form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelatedForm {
    pub my_channel_id: String,
    /// Comma-separated channel IDs.
    pub rival_channel_id: String,
    pub rival_items_count: String,
    pub rival_order: String,
    pub rival_search_start: String,
    pub rival_search_end: String,
    pub related_items_count: String,
}

impl RelatedForm {
    /// Initial values shown on first visit.
    #[must_use]
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            my_channel_id: String::new(),
            rival_channel_id: String::new(),
            rival_items_count: "5".to_string(),
            rival_order: SearchOrder::Date.as_api_str().to_string(),
            rival_search_start: format_date(today - Duration::days(DEFAULT_WINDOW_DAYS)),
            rival_search_end: format_date(today),
            related_items_count: "20".to_string(),
        }
    }

    /// Validate the submission.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<RelatedParams, ValidationError> {
        let my_channel_id = required("My channel ID", &self.my_channel_id)?;
        let rival_channel_ids = split_channel_ids(&self.rival_channel_id);
        if rival_channel_ids.is_empty() {
            return Err(ValidationError::Missing("Rival channel IDs"));
        }

        Ok(RelatedParams {
            my_channel_id: my_channel_id.to_string(),
            rival_channel_ids,
            rival_max_results: parse_count("Rival video count", &self.rival_items_count)?,
            rival_order: required("Rival order", &self.rival_order)?.parse::<SearchOrder>()?,
            rival_window: parse_window(
                ("Rival search start", &self.rival_search_start),
                ("Rival search end", &self.rival_search_end),
            )?,
            related_max_results: parse_count("Related video count", &self.related_items_count)?,
        })
    }
}

/// Split a comma-separated list, dropping blanks.
#[must_use]
pub fn split_channel_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(value)
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<u64, ValidationError> {
    let value = required(field, value)?;
    value.parse().map_err(|_| ValidationError::NotAnInteger {
        field,
        value: value.to_string(),
    })
}

/// A result count: at least 1. Larger-than-page values are clamped later.
fn parse_count(field: &'static str, value: &str) -> Result<u32, ValidationError> {
    let value = required(field, value)?;
    let count: u32 = value.parse().map_err(|_| ValidationError::NotAnInteger {
        field,
        value: value.to_string(),
    })?;
    if count == 0 {
        return Err(ValidationError::TooSmall { field, min: 1 });
    }
    Ok(count)
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    let value = required(field, value)?;
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

fn parse_window(
    (start_field, start): (&'static str, &str),
    (end_field, end): (&'static str, &str),
) -> Result<SearchWindow, ValidationError> {
    let start = parse_date(start_field, start)?;
    let end = parse_date(end_field, end)?;
    SearchWindow::new(start, end).ok_or(ValidationError::InvertedWindow { start, end })
}
