use super::*;

fn thumb(url: &str) -> Option<Thumbnail> {
    Some(Thumbnail { url: url.to_owned() })
}

// =============================================================
// Thumbnails
// =============================================================

#[test]
fn best_url_prefers_maxres_then_high_then_medium() {
    let mut t = Thumbnails { medium: thumb("m"), high: thumb("h"), maxres: thumb("x"), ..Thumbnails::default() };
    assert_eq!(t.best_url(), Some("x"));
    t.maxres = None;
    assert_eq!(t.best_url(), Some("h"));
    t.high = None;
    assert_eq!(t.best_url(), Some("m"));
    t.medium = None;
    assert_eq!(t.best_url(), None);
}

#[test]
fn avatar_url_prefers_default_size() {
    let t = Thumbnails { default: thumb("d"), high: thumb("h"), ..Thumbnails::default() };
    assert_eq!(t.avatar_url(), Some("d"));
}

// =============================================================
// Videos
// =============================================================

#[test]
fn video_parses_catalog_shape_and_string_counts() {
    let raw = r#"{
        "kind": "youtube#video",
        "id": "abc123",
        "snippet": {
            "title": "Title",
            "channelId": "UC1",
            "channelTitle": "Chan",
            "publishedAt": "2024-05-01T12:00:00Z",
            "description": "Desc",
            "categoryId": "20",
            "thumbnails": {"medium": {"url": "m.jpg", "width": 320}, "high": {"url": "h.jpg"}}
        },
        "statistics": {"viewCount": "1234567", "likeCount": "890", "favoriteCount": "0"}
    }"#;
    let video: Video = serde_json::from_str(raw).unwrap();
    assert_eq!(video.id, "abc123");
    assert_eq!(video.category_id(), "20");
    assert_eq!(video.thumbnail_url(), "h.jpg");
    assert_eq!(video.statistics.view_count, Some(1_234_567));
    assert_eq!(video.statistics.like_count, Some(890));
    assert_eq!(video.statistics.comment_count, None);
}

#[test]
fn video_without_statistics_or_category_still_parses() {
    let video: Video = serde_json::from_str(r#"{"id":"v","snippet":{"title":"T"}}"#).unwrap();
    assert_eq!(video.category_id(), UNKNOWN_CATEGORY_ID);
    assert_eq!(video.statistics, VideoStatistics::default());
    assert_eq!(video.thumbnail_url(), "");
}

#[test]
fn invalid_count_string_is_rejected() {
    let raw = r#"{"id":"v","statistics":{"viewCount":"lots"}}"#;
    assert!(serde_json::from_str::<Video>(raw).is_err());
}

#[test]
fn video_to_video_ref_snapshots_display_fields() {
    let video = Video {
        id: "abc".into(),
        snippet: VideoSnippet {
            title: "T".into(),
            channel_title: "C".into(),
            published_at: Some("2024-01-01T00:00:00Z".into()),
            thumbnails: Thumbnails { high: thumb("h.jpg"), ..Thumbnails::default() },
            ..VideoSnippet::default()
        },
        statistics: VideoStatistics::default(),
    };
    let snapshot = video.to_video_ref();
    assert_eq!(snapshot.id, "abc");
    assert_eq!(snapshot.title, "T");
    assert_eq!(snapshot.channel_title, "C");
    assert_eq!(snapshot.thumbnail, "h.jpg");
    assert_eq!(snapshot.published_at.as_deref(), Some("2024-01-01T00:00:00Z"));
}

// =============================================================
// Search results
// =============================================================

#[test]
fn search_result_exposes_video_id() {
    let raw = r#"{"id":{"kind":"youtube#video","videoId":"xyz"},"snippet":{"title":"S","channelId":"UC9"}}"#;
    let result: SearchResult = serde_json::from_str(raw).unwrap();
    assert_eq!(result.video_id(), Some("xyz"));
    assert_eq!(result.category_id(), "0");
    assert_eq!(result.to_video_ref().map(|v| v.id), Some("xyz".to_owned()));
}

#[test]
fn channel_search_hit_has_no_video_ref() {
    let raw = r#"{"id":{"kind":"youtube#channel","channelId":"UC9"},"snippet":{"title":"S"}}"#;
    let result: SearchResult = serde_json::from_str(raw).unwrap();
    assert!(result.video_id().is_none());
    assert!(result.to_video_ref().is_none());
}

// =============================================================
// Channels and comments
// =============================================================

#[test]
fn channel_to_channel_ref_uses_avatar_and_count() {
    let raw = r#"{
        "id": "UC1",
        "snippet": {"title": "Chan", "thumbnails": {"default": {"url": "d.jpg"}, "high": {"url": "h.jpg"}}},
        "statistics": {"subscriberCount": "42000", "hiddenSubscriberCount": false}
    }"#;
    let channel: Channel = serde_json::from_str(raw).unwrap();
    let snapshot = channel.to_channel_ref();
    assert_eq!(snapshot.id, "UC1");
    assert_eq!(snapshot.title, "Chan");
    assert_eq!(snapshot.thumbnail, "d.jpg");
    assert_eq!(snapshot.subscriber_count, "42000");
}

#[test]
fn comment_thread_exposes_top_level_comment() {
    let raw = r#"{
        "id": "t1",
        "snippet": {"topLevelComment": {"snippet": {
            "authorDisplayName": "Ann",
            "authorProfileImageUrl": "a.jpg",
            "textDisplay": "Nice",
            "likeCount": 12,
            "publishedAt": "2024-01-01T00:00:00Z"
        }}}
    }"#;
    let thread: CommentThread = serde_json::from_str(raw).unwrap();
    let comment = thread.comment();
    assert_eq!(comment.author_display_name, "Ann");
    assert_eq!(comment.author_profile_image_url, "a.jpg");
    assert_eq!(comment.text_display, "Nice");
    assert_eq!(comment.like_count, Some(12));
}

// =============================================================
// ClientConfig
// =============================================================

#[test]
fn client_config_uses_camel_case_fields() {
    let cfg = ClientConfig {
        api_key: "k".into(),
        region_code: "IN".into(),
        base_url: "https://example.test/v3".into(),
    };
    let json = serde_json::to_value(&cfg).unwrap();
    assert_eq!(json["apiKey"], "k");
    assert_eq!(json["regionCode"], "IN");
    assert_eq!(json["baseUrl"], "https://example.test/v3");
}

#[test]
fn video_channel_ref_uses_snippet_fields() {
    let video: Video =
        serde_json::from_str(r#"{"id":"v","snippet":{"channelId":"UC7","channelTitle":"Seven"}}"#).unwrap();
    let channel = video.channel_ref();
    assert_eq!(channel.id, "UC7");
    assert_eq!(channel.title, "Seven");
    assert_eq!(channel.subscriber_count, "0");
}
