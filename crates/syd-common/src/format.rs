//! Display formatting helpers
//!
//! Pure functions used when rendering datasets: byte sizes, relative ages,
//! and the domain part of an owner email. None of them keep state.

use crate::error::{Result, SydError};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};

const BYTE_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;

/// Format a byte count using 1024-based units
///
/// The value keeps at most two decimals and drops trailing zeros, so
/// `1536` becomes `"1.5 KB"` and `1024` becomes `"1 KB"`.
pub fn format_byte_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < BYTE_UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    format!("{} {}", trim_decimals(&format!("{:.2}", size)), BYTE_UNITS[unit_idx])
}

/// Strip trailing zeros (and a dangling dot) from a fixed-point string
fn trim_decimals(value: &str) -> &str {
    if value.contains('.') {
        value.trim_end_matches('0').trim_end_matches('.')
    } else {
        value
    }
}

/// Whether a relative age carries the trailing "ago"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeStyle {
    /// `"3 hours"`
    Bare,
    /// `"3 hours ago"`
    #[default]
    Ago,
}

/// Format an elapsed duration as a single-unit age
///
/// Buckets are picked in order, first match wins: under a minute shows
/// seconds, under an hour minutes, under a day hours, otherwise days.
/// Magnitudes are truncated, never rounded. Negative durations (timestamps
/// in the future) count as zero.
pub fn relative_age(elapsed: Duration, style: AgeStyle) -> String {
    let seconds = elapsed.num_seconds().max(0);

    let (amount, unit) = if seconds < SECONDS_PER_MINUTE {
        (seconds, "second")
    } else if seconds < SECONDS_PER_HOUR {
        (seconds / SECONDS_PER_MINUTE, "minute")
    } else if seconds < SECONDS_PER_DAY {
        (seconds / SECONDS_PER_HOUR, "hour")
    } else {
        (seconds / SECONDS_PER_DAY, "day")
    };

    let plural = if amount == 1 { "" } else { "s" };

    match style {
        AgeStyle::Bare => format!("{} {}{}", amount, unit, plural),
        AgeStyle::Ago => format!("{} {}{} ago", amount, unit, plural),
    }
}

/// Format the age of `then` as seen at `now`
pub fn relative_age_between(then: DateTime<Utc>, now: DateTime<Utc>, style: AgeStyle) -> String {
    relative_age(now - then, style)
}

/// Format the age of an ISO-8601 timestamp relative to the current time
pub fn relative_age_since(timestamp: &str, style: AgeStyle) -> Result<String> {
    let then = parse_timestamp(timestamp)?;
    Ok(relative_age_between(then, Utc::now(), style))
}

/// Parse an ISO-8601 instant
///
/// Accepts RFC 3339 (with offset) and the offset-less
/// `YYYY-MM-DDTHH:MM:SS[.fraction]` form, which is read as UTC.
pub fn parse_timestamp(timestamp: &str) -> Result<DateTime<Utc>> {
    let trimmed = timestamp.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| SydError::invalid_timestamp(timestamp))
}

/// Domain part of an email address
///
/// Returns everything after the last `@`, or the whole input when there
/// is no `@` at all.
pub fn domain_from_email(email: &str) -> &str {
    match email.rfind('@') {
        Some(idx) => &email[idx + 1..],
        None => email,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_byte_size() {
        assert_eq!(format_byte_size(0), "0 B");
        assert_eq!(format_byte_size(1), "1 B");
        assert_eq!(format_byte_size(512), "512 B");
        assert_eq!(format_byte_size(1023), "1023 B");
        assert_eq!(format_byte_size(1024), "1 KB");
        assert_eq!(format_byte_size(1536), "1.5 KB");
        assert_eq!(format_byte_size(1_500_000), "1.43 MB");
        assert_eq!(format_byte_size(1_073_741_824), "1 GB");
        assert_eq!(format_byte_size(1_099_511_627_776), "1 TB");
    }

    #[test]
    fn test_format_byte_size_caps_at_terabytes() {
        assert_eq!(format_byte_size(1024 * 1_099_511_627_776), "1024 TB");
    }

    #[test]
    fn test_relative_age_buckets() {
        let age = |secs| relative_age(Duration::seconds(secs), AgeStyle::Ago);

        assert_eq!(age(0), "0 seconds ago");
        assert_eq!(age(1), "1 second ago");
        assert_eq!(age(45), "45 seconds ago");
        assert_eq!(age(59), "59 seconds ago");
        assert_eq!(age(60), "1 minute ago");
        assert_eq!(age(119), "1 minute ago");
        assert_eq!(age(3_599), "59 minutes ago");
        assert_eq!(age(3_600), "1 hour ago");
        assert_eq!(age(3_700), "1 hour ago");
        assert_eq!(age(86_399), "23 hours ago");
        assert_eq!(age(86_400), "1 day ago");
        assert_eq!(age(3 * 86_400 + 5), "3 days ago");
    }

    #[test]
    fn test_relative_age_bare_style() {
        assert_eq!(relative_age(Duration::seconds(45), AgeStyle::Bare), "45 seconds");
        assert_eq!(relative_age(Duration::seconds(7_200), AgeStyle::Bare), "2 hours");
    }

    #[test]
    fn test_relative_age_future_clamps_to_zero() {
        assert_eq!(relative_age(Duration::seconds(-30), AgeStyle::Ago), "0 seconds ago");
    }

    #[test]
    fn test_relative_age_between() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let then = now - Duration::seconds(3_700);
        assert_eq!(relative_age_between(then, now, AgeStyle::Ago), "1 hour ago");
    }

    #[test]
    fn test_relative_age_since_recent() {
        let then = (Utc::now() - Duration::seconds(10)).to_rfc3339();
        let age = relative_age_since(&then, AgeStyle::Bare).unwrap();
        assert!(age.ends_with("seconds"), "unexpected age: {}", age);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

        assert_eq!(parse_timestamp("2025-01-02T03:04:05Z").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-01-02T05:04:05+02:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-01-02T03:04:05").unwrap(), expected);
        assert_eq!(
            parse_timestamp("2025-01-02T03:04:05.250000").unwrap(),
            expected + Duration::milliseconds(250)
        );
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_domain_from_email() {
        assert_eq!(domain_from_email("a@b.com"), "b.com");
        assert_eq!(domain_from_email("noatsign"), "noatsign");
        assert_eq!(domain_from_email("odd@name@host.org"), "host.org");
        assert_eq!(domain_from_email("trailing@"), "");
    }
}
