//! Display formatting for counts, publish times, and long text.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Compact view/like/subscriber count: `1234567` -> `1M`, `4321` -> `4K`.
///
/// Values are truncated, not rounded.
pub fn compact_count(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{}M", value / 1_000_000)
    } else if value >= 1_000 {
        format!("{}K", value / 1_000)
    } else {
        value.to_string()
    }
}

/// `compact_count` for counters the catalog may hide.
pub fn compact_count_opt(value: Option<u64>) -> String {
    value.map(compact_count).unwrap_or_else(|| "0".to_owned())
}

/// `compact_count` for counts persisted as decimal strings.
pub fn compact_count_str(raw: &str) -> String {
    raw.trim().parse::<u64>().map_or_else(|_| raw.to_owned(), compact_count)
}

/// Seconds since the unix epoch from the browser clock (or the system clock
/// outside the browser).
pub fn now_unix_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc().unix_timestamp()
    }
}

/// Human relative time for an RFC 3339 timestamp, e.g. `3 days ago`.
///
/// Returns `None` when `published` does not parse.
pub fn relative_time(published: &str, now_secs: i64) -> Option<String> {
    let at = OffsetDateTime::parse(published.trim(), &Rfc3339).ok()?;
    let delta = now_secs - at.unix_timestamp();
    let phrase = describe_span(delta.abs());
    Some(if delta < 0 { format!("in {phrase}") } else { format!("{phrase} ago") })
}

/// `relative_time` with an empty string for missing or unparseable input.
pub fn relative_time_or_empty(published: Option<&str>, now_secs: i64) -> String {
    published.and_then(|p| relative_time(p, now_secs)).unwrap_or_default()
}

fn rounded(secs: i64, unit: i64) -> i64 {
    (secs + unit / 2) / unit
}

fn describe_span(secs: i64) -> String {
    let days = rounded(secs, DAY);
    match secs {
        s if s < 45 => "a few seconds".to_owned(),
        s if s < 90 => "a minute".to_owned(),
        s if s < 45 * MINUTE => format!("{} minutes", rounded(s, MINUTE)),
        s if s < 90 * MINUTE => "an hour".to_owned(),
        s if s < 22 * HOUR => format!("{} hours", rounded(s, HOUR)),
        s if s < 36 * HOUR => "a day".to_owned(),
        _ if days < 26 => format!("{days} days"),
        _ if days < 45 => "a month".to_owned(),
        _ if days < 320 => format!("{} months", (days * 10 + 152) / 304),
        _ if days < 548 => "a year".to_owned(),
        _ => format!("{} years", (days * 100 + 18262) / 36525),
    }
}

/// Truncate to at most `max_chars` characters, appending `...` when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_owned(),
    }
}

/// Uppercased first letter of a name, for avatar placeholders.
pub fn initial(name: &str) -> String {
    name.trim().chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_else(|| "?".to_owned())
}

/// `1 video`, `2 videos`.
pub fn pluralize(count: usize, singular: &str) -> String {
    if count == 1 { format!("1 {singular}") } else { format!("{count} {singular}s") }
}

/// `12K views • 3 days ago`; the age is omitted when unknown.
pub fn views_and_age(views: Option<u64>, published_at: Option<&str>, now_secs: i64) -> String {
    let views = format!("{} views", compact_count_opt(views));
    match published_at.and_then(|p| relative_time(p, now_secs)) {
        Some(age) => format!("{views} • {age}"),
        None => views,
    }
}
