use super::*;

// =============================================================
// Path builders
// =============================================================

#[test]
fn video_path_uses_category_and_id() {
    assert_eq!(video_path("20", "abc_-1"), "/video/20/abc_-1");
}

#[test]
fn video_path_defaults_missing_category() {
    assert_eq!(video_path("", "abc"), "/video/0/abc");
}

#[test]
fn search_path_encodes_query() {
    assert_eq!(search_path("lo-fi beats"), "/search/lo-fi%20beats");
    assert_eq!(search_path("a/b?c"), "/search/a%2Fb%3Fc");
}

// =============================================================
// Parameter validation
// =============================================================

#[test]
fn video_params_accepts_catalog_ids() {
    let params = video_params(Some("24".into()), Some("dQw4w9WgXcQ".into())).unwrap();
    assert_eq!(params, VideoParams { category_id: "24".into(), video_id: "dQw4w9WgXcQ".into() });
}

#[test]
fn video_params_defaults_category() {
    let params = video_params(None, Some("v1".into())).unwrap();
    assert_eq!(params.category_id, "0");
}

#[test]
fn video_params_requires_video_id() {
    assert_eq!(video_params(Some("0".into()), None), Err(RouteError::Missing("video_id")));
    assert_eq!(video_params(Some("0".into()), Some("  ".into())), Err(RouteError::Missing("video_id")));
}

#[test]
fn video_params_rejects_markup_in_ids() {
    let err = video_params(Some("0".into()), Some("<script>".into())).unwrap_err();
    assert_eq!(err, RouteError::Invalid { name: "video id", value: "<script>".into() });
    assert!(video_params(Some("1 OR 1".into()), Some("v".into())).is_err());
}

#[test]
fn search_query_trims_and_requires_text() {
    assert_eq!(search_query(Some("  rust  ".into())), Ok("rust".into()));
    assert_eq!(search_query(Some("   ".into())), Err(RouteError::Missing("query")));
    assert_eq!(search_query(None), Err(RouteError::Missing("query")));
}

#[test]
fn route_error_messages_are_readable() {
    assert_eq!(RouteError::Missing("query").to_string(), "missing route parameter `query`");
    assert_eq!(
        RouteError::Invalid { name: "video id", value: "x y".into() }.to_string(),
        "invalid video id: \"x y\""
    );
}
