//! End-to-end pipeline tests against an in-memory `VideoApi`.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use tube_scout::pipeline::{
    run_keyword_search, run_related_search, KeywordParams, MergeError, PipelineError,
    RelatedParams, StatValue,
};
use tube_scout::youtube::{
    ApiError, ChannelResource, SearchItem, SearchOrder, SearchQuery, SearchTarget, SearchWindow,
    VideoApi, VideoStatisticsResource,
};

/// Canned responses keyed by search target, channel ID and video ID.
#[derive(Default)]
struct FakeApi {
    searches: HashMap<SearchTarget, Vec<SearchItem>>,
    channels: HashMap<String, ChannelResource>,
    stats: HashMap<String, VideoStatisticsResource>,
    failing_targets: HashSet<SearchTarget>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    fn with_search(mut self, target: SearchTarget, items: Vec<SearchItem>) -> Self {
        self.searches.insert(target, items);
        self
    }

    fn with_channel(mut self, channel_id: &str) -> Self {
        let resource = serde_json::from_value(json!({
            "id": channel_id,
            "snippet": {
                "title": channel_id,
                "thumbnails": { "default": { "url": format!("https://yt3.example/{channel_id}.jpg") } }
            }
        }))
        .unwrap();
        self.channels.insert(channel_id.to_string(), resource);
        self
    }

    fn with_stats(mut self, video_id: &str, statistics: serde_json::Value) -> Self {
        let resource =
            serde_json::from_value(json!({ "id": video_id, "statistics": statistics })).unwrap();
        self.stats.insert(video_id.to_string(), resource);
        self
    }

    fn with_views(self, video_id: &str, views: u64) -> Self {
        self.with_stats(
            video_id,
            json!({
                "viewCount": views.to_string(),
                "likeCount": "10",
                "favoriteCount": "0",
                "commentCount": "2"
            }),
        )
    }

    fn failing_on(mut self, target: SearchTarget) -> Self {
        self.failing_targets.insert(target);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoApi for FakeApi {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchItem>, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("search {:?}", query.target));
        if self.failing_targets.contains(&query.target) {
            return Err(ApiError::QuotaExceeded("daily limit".into()));
        }
        Ok(self.searches.get(&query.target).cloned().unwrap_or_default())
    }

    async fn channel(&self, channel_id: &str) -> Result<Option<ChannelResource>, ApiError> {
        self.calls.lock().unwrap().push(format!("channel {channel_id}"));
        Ok(self.channels.get(channel_id).cloned())
    }

    async fn video_statistics(
        &self,
        video_id: &str,
    ) -> Result<Option<VideoStatisticsResource>, ApiError> {
        self.calls.lock().unwrap().push(format!("videos {video_id}"));
        Ok(self.stats.get(video_id).cloned())
    }
}

fn item(video_id: &str, channel_id: &str, published: &str) -> SearchItem {
    serde_json::from_value(json!({
        "id": { "kind": "youtube#video", "videoId": video_id },
        "snippet": {
            "publishedAt": format!("{published}T08:30:00Z"),
            "channelId": channel_id,
            "title": format!("Title {video_id}"),
            "channelTitle": format!("Name {channel_id}")
        }
    }))
    .unwrap()
}

fn window() -> SearchWindow {
    SearchWindow::new(
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    )
    .unwrap()
}

fn keyword_params(min_view_count: u64) -> KeywordParams {
    KeywordParams {
        keyword: "test".into(),
        max_results: 12,
        min_view_count,
        order: SearchOrder::ViewCount,
        window: window(),
    }
}

fn related_params(rivals: &[&str]) -> RelatedParams {
    RelatedParams {
        my_channel_id: "UCmine".into(),
        rival_channel_ids: rivals.iter().map(ToString::to_string).collect(),
        rival_max_results: 5,
        rival_order: SearchOrder::Date,
        rival_window: window(),
        related_max_results: 20,
    }
}

fn keyword(q: &str) -> SearchTarget {
    SearchTarget::Keyword(q.into())
}

#[tokio::test]
async fn test_keyword_search_filters_by_view_count() {
    let api = FakeApi::default()
        .with_search(
            keyword("test"),
            vec![
                item("v1", "UCa", "2024-03-02"),
                item("v2", "UCb", "2024-03-03"),
                item("v3", "UCa", "2024-03-04"),
            ],
        )
        .with_channel("UCa")
        .with_channel("UCb")
        .with_views("v1", 50)
        .with_views("v2", 150)
        .with_views("v3", 300);

    let rows = run_keyword_search(&api, &keyword_params(100)).await.unwrap();

    let views: Vec<&str> = rows.iter().map(|r| r.viewcount.as_str()).collect();
    assert_eq!(views, vec!["150", "300"]);
    assert_eq!(rows[0].url, "https://www.youtube.com/embed/v2");
    assert_eq!(rows[0].publishtime, "2024-03-03");
    assert_eq!(rows[0].profile_img, "https://yt3.example/UCb.jpg");
    assert_eq!(rows[1].channeltitle, "Name UCa");
}

#[tokio::test]
async fn test_keyword_search_enriches_every_video_once() {
    let api = FakeApi::default()
        .with_search(
            keyword("test"),
            vec![item("v1", "UCa", "2024-03-02"), item("v2", "UCa", "2024-03-03")],
        )
        .with_channel("UCa")
        .with_views("v1", 5)
        .with_views("v2", 6);

    run_keyword_search(&api, &keyword_params(0)).await.unwrap();

    assert_eq!(
        api.calls(),
        vec![
            r#"search Keyword("test")"#,
            "channel UCa",
            "channel UCa",
            "videos v1",
            "videos v2",
        ]
    );
}

#[tokio::test]
async fn test_hidden_like_count_is_shown_as_dash() {
    let api = FakeApi::default()
        .with_search(keyword("test"), vec![item("v1", "UCa", "2024-03-02")])
        .with_channel("UCa")
        .with_stats("v1", json!({ "viewCount": "2000", "commentCount": "3" }));

    let rows = run_keyword_search(&api, &keyword_params(1000)).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].like_count, StatValue::Unavailable);
    assert_eq!(rows[0].like_count.as_display(), "-");
    assert_eq!(rows[0].comment_count.as_display(), "3");
}

#[tokio::test]
async fn test_unknown_channel_leaves_image_empty() {
    let api = FakeApi::default()
        .with_search(keyword("test"), vec![item("v1", "UCghost", "2024-03-02")])
        .with_views("v1", 10);

    let rows = run_keyword_search(&api, &keyword_params(0)).await.unwrap();
    assert_eq!(rows[0].profile_img, "");
}

#[tokio::test]
async fn test_missing_statistics_is_a_merge_error() {
    let api = FakeApi::default()
        .with_search(keyword("test"), vec![item("v1", "UCa", "2024-03-02")])
        .with_channel("UCa");

    let err = run_keyword_search(&api, &keyword_params(0)).await.unwrap_err();
    match err {
        PipelineError::Merge(e) => assert_eq!(
            e,
            MergeError::MissingViewCount {
                video_id: "v1".into()
            }
        ),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_keyword_result() {
    let api = FakeApi::default();
    let rows = run_keyword_search(&api, &keyword_params(0)).await.unwrap();
    assert!(rows.is_empty());
    assert_eq!(api.calls().len(), 1);
}

#[tokio::test]
async fn test_related_search_keeps_my_videos_with_rank() {
    let api = FakeApi::default()
        .with_search(
            SearchTarget::Channel("UCrival".into()),
            vec![item("r1", "UCrival", "2024-03-01")],
        )
        .with_search(
            SearchTarget::RelatedTo("r1".into()),
            vec![
                item("x1", "UCother", "2024-02-01"),
                item("m1", "UCmine", "2024-02-10"),
                item("x2", "UCother", "2024-02-11"),
            ],
        )
        .with_channel("UCmine")
        .with_stats(
            "m1",
            json!({ "viewCount": "900", "favoriteCount": "0", "commentCount": "1" }),
        );

    let rows = run_related_search(&api, &related_params(&["UCrival"]))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.ranking, 2);
    assert_eq!(row.url, "https://www.youtube.com/embed/m1");
    assert_eq!(row.rivalurl, "https://www.youtube.com/embed/r1");
    assert_eq!(row.rivaltitle, "Title r1");
    assert_eq!(row.rivalpublishtime, "2024-03-01");
    assert_eq!(row.viewcount, StatValue::Available("900".into()));
    assert_eq!(row.like_count, StatValue::Unavailable);
}

#[tokio::test]
async fn test_related_search_keeps_first_rival_for_repeated_video() {
    let api = FakeApi::default()
        .with_search(
            SearchTarget::Channel("UCrival".into()),
            vec![item("r1", "UCrival", "2024-03-01"), item("r2", "UCrival", "2024-03-02")],
        )
        .with_search(
            SearchTarget::RelatedTo("r1".into()),
            vec![item("m1", "UCmine", "2024-02-10")],
        )
        .with_search(
            SearchTarget::RelatedTo("r2".into()),
            vec![item("x1", "UCother", "2024-02-01"), item("m1", "UCmine", "2024-02-10")],
        )
        .with_channel("UCmine")
        .with_views("m1", 42);

    let rows = run_related_search(&api, &related_params(&["UCrival"]))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].ranking, 1);
    assert_eq!(rows[0].rivalurl, "https://www.youtube.com/embed/r1");
}

#[tokio::test]
async fn test_related_search_follows_rival_channel_order() {
    let api = FakeApi::default()
        .with_search(
            SearchTarget::Channel("UCa".into()),
            vec![item("r1", "UCa", "2024-03-01")],
        )
        .with_search(
            SearchTarget::Channel("UCb".into()),
            vec![item("r2", "UCb", "2024-03-02")],
        )
        .with_search(
            SearchTarget::RelatedTo("r1".into()),
            vec![item("m1", "UCmine", "2024-02-10")],
        )
        .with_search(
            SearchTarget::RelatedTo("r2".into()),
            vec![item("x1", "UCother", "2024-02-01"), item("m2", "UCmine", "2024-02-12")],
        )
        .with_channel("UCmine")
        .with_views("m1", 10)
        .with_views("m2", 20);

    let rows = run_related_search(&api, &related_params(&["UCa", "UCb"]))
        .await
        .unwrap();

    let searches: Vec<String> = api
        .calls()
        .into_iter()
        .filter(|c| c.starts_with("search"))
        .collect();
    assert_eq!(
        searches,
        vec![
            r#"search Channel("UCa")"#,
            r#"search Channel("UCb")"#,
            r#"search RelatedTo("r1")"#,
            r#"search RelatedTo("r2")"#,
        ]
    );

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].url, "https://www.youtube.com/embed/m1");
    assert_eq!(rows[0].rivalurl, "https://www.youtube.com/embed/r1");
    assert_eq!(rows[0].rivalchanneltitle, "Name UCa");
    assert_eq!(rows[0].ranking, 1);
    assert_eq!(rows[1].url, "https://www.youtube.com/embed/m2");
    assert_eq!(rows[1].rivalurl, "https://www.youtube.com/embed/r2");
    assert_eq!(rows[1].rivalchanneltitle, "Name UCb");
    assert_eq!(rows[1].ranking, 2);
}

#[tokio::test]
async fn test_failure_on_one_rival_aborts_everything() {
    let api = FakeApi::default()
        .with_search(
            SearchTarget::Channel("UCgood".into()),
            vec![item("r1", "UCgood", "2024-03-01")],
        )
        .failing_on(SearchTarget::Channel("UCbad".into()));

    let err = run_related_search(&api, &related_params(&["UCgood", "UCbad"]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Upstream(ApiError::QuotaExceeded(_))
    ));
    assert!(api
        .calls()
        .iter()
        .all(|c| !c.starts_with("search RelatedTo")));
}

#[tokio::test]
async fn test_no_matches_skips_enrichment() {
    let api = FakeApi::default()
        .with_search(
            SearchTarget::Channel("UCrival".into()),
            vec![item("r1", "UCrival", "2024-03-01")],
        )
        .with_search(
            SearchTarget::RelatedTo("r1".into()),
            vec![item("x1", "UCother", "2024-02-01")],
        );

    let rows = run_related_search(&api, &related_params(&["UCrival"]))
        .await
        .unwrap();

    assert!(rows.is_empty());
    assert_eq!(api.calls().len(), 2);
}
