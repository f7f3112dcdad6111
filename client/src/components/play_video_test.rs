use super::*;

#[test]
fn embed_url_autoplays() {
    assert_eq!(embed_url("dQw4w9WgXcQ"), "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1");
}

#[test]
fn embed_url_encodes_id() {
    assert_eq!(embed_url("a b"), "https://www.youtube.com/embed/a%20b?autoplay=1");
}

#[test]
fn description_preview_is_250_chars() {
    let long = "x".repeat(300);
    let preview = truncate_chars(&long, DESCRIPTION_PREVIEW_CHARS);
    assert_eq!(preview.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
}

fn video(id: &str) -> Video {
    serde_json::from_str(&format!(
        r#"{{"id":"{id}","snippet":{{"title":"T {id}","channelId":"UC1","channelTitle":"Chan"}}}}"#
    ))
    .unwrap()
}

fn channel() -> Channel {
    serde_json::from_str(
        r#"{"id":"UC1","snippet":{"title":"Chan","thumbnails":{"default":{"url":"d.jpg"}}},
            "statistics":{"subscriberCount":"1200"}}"#,
    )
    .unwrap()
}

// =============================================================
// Current video
// =============================================================

#[test]
fn current_video_matches_route_id() {
    let details = FetchState::Loaded(video("b"));
    assert_eq!(current_video(&details, "b").map(|v| v.id), Some("b".to_owned()));
}

#[test]
fn details_for_a_previous_route_are_not_current() {
    // Route moved on to "b" while "a" was still loading.
    let details = FetchState::Loaded(video("a"));
    assert!(current_video(&details, "b").is_none());
}

#[test]
fn pending_details_have_no_current_video() {
    assert!(current_video(&FetchState::Loading, "a").is_none());
    assert!(current_video(&FetchState::Failed("boom".into()), "a").is_none());
}

// =============================================================
// Subscription snapshot
// =============================================================

#[test]
fn subscription_waits_for_channel_lookup() {
    assert!(subscription_snapshot(&FetchState::Idle, &video("a")).is_none());
    assert!(subscription_snapshot(&FetchState::Loading, &video("a")).is_none());
}

#[test]
fn subscription_uses_loaded_channel_details() {
    let snapshot = subscription_snapshot(&FetchState::Loaded(channel()), &video("a")).unwrap();
    assert_eq!(snapshot.thumbnail, "d.jpg");
    assert_eq!(snapshot.subscriber_count, "1200");
}

#[test]
fn subscription_falls_back_to_video_when_lookup_fails() {
    let snapshot = subscription_snapshot(&FetchState::Failed("quota".into()), &video("a")).unwrap();
    assert_eq!(snapshot.id, "UC1");
    assert_eq!(snapshot.title, "Chan");
    assert_eq!(snapshot.thumbnail, "");
}
