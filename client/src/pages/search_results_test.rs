use super::*;

#[test]
fn channel_icons_maps_ids_to_avatars() {
    let channels: Vec<Channel> = serde_json::from_str(
        r#"[
            {"id":"UC1","snippet":{"thumbnails":{"default":{"url":"one.jpg"}}}},
            {"id":"UC2","snippet":{"thumbnails":{"medium":{"url":"two.jpg"}}}},
            {"id":"UC3","snippet":{}}
        ]"#,
    )
    .unwrap();
    let icons = channel_icons(&channels);
    assert_eq!(icons.len(), 2);
    assert_eq!(icons["UC1"], "one.jpg");
    assert_eq!(icons["UC2"], "two.jpg");
    assert!(!icons.contains_key("UC3"));
}
