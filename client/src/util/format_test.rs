use super::*;

const NOW: i64 = 1_717_243_200; // 2024-06-01T12:00:00Z

// =============================================================
// Counts
// =============================================================

#[test]
fn compact_count_truncates_to_units() {
    assert_eq!(compact_count(0), "0");
    assert_eq!(compact_count(999), "999");
    assert_eq!(compact_count(1_000), "1K");
    assert_eq!(compact_count(15_999), "15K");
    assert_eq!(compact_count(999_999), "999K");
    assert_eq!(compact_count(1_000_000), "1M");
    assert_eq!(compact_count(2_750_000_000), "2750M");
}

#[test]
fn compact_count_opt_shows_zero_for_hidden_counters() {
    assert_eq!(compact_count_opt(None), "0");
    assert_eq!(compact_count_opt(Some(4_321)), "4K");
}

#[test]
fn compact_count_str_passes_through_non_numbers() {
    assert_eq!(compact_count_str("42000"), "42K");
    assert_eq!(compact_count_str("hidden"), "hidden");
}

// =============================================================
// Relative time
// =============================================================

#[test]
fn relative_time_covers_each_band() {
    let cases = [
        ("2024-06-01T11:59:30Z", "a few seconds ago"),
        ("2024-06-01T11:59:00Z", "a minute ago"),
        ("2024-06-01T11:50:00Z", "10 minutes ago"),
        ("2024-06-01T11:00:00Z", "an hour ago"),
        ("2024-06-01T07:00:00Z", "5 hours ago"),
        ("2024-05-31T12:00:00Z", "a day ago"),
        ("2024-05-29T12:00:00Z", "3 days ago"),
        ("2024-05-01T12:00:00Z", "a month ago"),
        ("2024-03-01T12:00:00Z", "3 months ago"),
        ("2023-06-01T12:00:00Z", "a year ago"),
        ("2021-06-01T12:00:00Z", "3 years ago"),
    ];
    for (published, expected) in cases {
        assert_eq!(relative_time(published, NOW).as_deref(), Some(expected), "{published}");
    }
}

#[test]
fn relative_time_handles_offsets_and_future() {
    assert_eq!(relative_time("2024-06-01T14:00:00+02:00", NOW).as_deref(), Some("a few seconds ago"));
    assert_eq!(relative_time("2024-06-04T12:00:00Z", NOW).as_deref(), Some("in 3 days"));
}

#[test]
fn relative_time_rejects_garbage() {
    assert_eq!(relative_time("yesterday", NOW), None);
    assert_eq!(relative_time_or_empty(Some("yesterday"), NOW), "");
    assert_eq!(relative_time_or_empty(None, NOW), "");
}

// =============================================================
// Text
// =============================================================

#[test]
fn truncate_chars_respects_char_boundaries() {
    assert_eq!(truncate_chars("short", 250), "short");
    assert_eq!(truncate_chars("abcdef", 3), "abc...");
    assert_eq!(truncate_chars("héllo wörld", 4), "héll...");
    assert_eq!(truncate_chars("abc", 3), "abc");
}

#[test]
fn pluralize_switches_on_one() {
    assert_eq!(pluralize(0, "video"), "0 videos");
    assert_eq!(pluralize(1, "video"), "1 video");
    assert_eq!(pluralize(7, "channel"), "7 channels");
}

#[test]
fn views_and_age_joins_both_parts() {
    assert_eq!(views_and_age(Some(12_345), Some("2024-05-29T12:00:00Z"), NOW), "12K views • 3 days ago");
    assert_eq!(views_and_age(None, None, NOW), "0 views");
    assert_eq!(views_and_age(Some(5), Some("garbage"), NOW), "5 views");
}

#[test]
fn initial_takes_first_letter_uppercased() {
    assert_eq!(initial("rustconf"), "R");
    assert_eq!(initial("  élan"), "É");
    assert_eq!(initial(""), "?");
}
