use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

const NANOS_PER_DAY: i128 = 86_400 * 1_000_000_000;

/// Parses an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date as UTC midnight.
pub fn parse_timestamp(value: &str) -> Option<OffsetDateTime> {
    let value = value.trim();
    if let Ok(parsed) = OffsetDateTime::parse(value, &Rfc3339) {
        return Some(parsed);
    }
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| date.midnight().assume_utc())
}

pub fn format_relative_date(timestamp: &str) -> String {
    format_relative_date_at(timestamp, OffsetDateTime::now_utc())
}

/// Human label for the distance between `timestamp` and `now`.
///
/// Months are 30 days and years are 365 days. The bucketing is approximate
/// and ignores the calendar on purpose.
pub fn format_relative_date_at(timestamp: &str, now: OffsetDateTime) -> String {
    let Some(date) = parse_timestamp(timestamp) else {
        return "Unknown".to_string();
    };
    let nanos = (now - date).abs().whole_nanoseconds();
    let days = (nanos + NANOS_PER_DAY - 1) / NANOS_PER_DAY;
    match days {
        1 => "1 day ago".to_string(),
        days if days < 30 => format!("{days} days ago"),
        days if days < 365 => format!("{} months ago", days / 30),
        days => format!("{} years ago", days / 365),
    }
}
