//! Tube Scout library.
//!
//! A small web front-end over the YouTube Data API v3: keyword searches
//! filtered by view count, and a lookup of which of your videos appear among
//! the related videos of rival channels' uploads.

// Allow raw string hashes for safety - they're harmless and prevent issues if content changes
#![allow(clippy::needless_raw_string_hashes)]

pub mod components;
pub mod config;
pub mod constants;
pub mod pipeline;
pub mod web;
pub mod youtube;
