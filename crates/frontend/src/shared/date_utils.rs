//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application.

use chrono::{DateTime, Utc};

/// Short en-GB style date, e.g. "15 Mar 2024".
pub fn format_short_date(value: DateTime<Utc>) -> String {
    value.format("%-d %b %Y").to_string()
}

/// Short date with wall-clock time, e.g. "15 Mar 2024 14:02".
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%-d %b %Y %H:%M").to_string()
}

/// Relative label for the header's last-sync indicator.
///
/// `None` means no sync has ever completed. Anything older than a week
/// falls back to the absolute date.
pub fn format_last_sync(value: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(synced_at) = value else {
        return "Never".to_string();
    };
    let elapsed = now.signed_duration_since(synced_at);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    let days = elapsed.num_days();
    if days < 7 {
        return format!("{}d ago", days);
    }
    format_short_date(synced_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(iso: &str) -> DateTime<Utc> {
        iso.parse().unwrap()
    }

    #[test]
    fn never_without_a_sync() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(format_last_sync(None, now), "Never");
    }

    #[test]
    fn relative_buckets() {
        let now = at("2025-06-01T12:00:00Z");
        assert_eq!(format_last_sync(Some(at("2025-06-01T11:59:40Z")), now), "Just now");
        assert_eq!(format_last_sync(Some(at("2025-06-01T11:55:00Z")), now), "5m ago");
        assert_eq!(format_last_sync(Some(at("2025-06-01T09:00:00Z")), now), "3h ago");
        assert_eq!(format_last_sync(Some(at("2025-05-30T12:00:00Z")), now), "2d ago");
    }

    #[test]
    fn old_syncs_show_the_date() {
        let now = at("2025-06-01T12:00:00Z");
        assert_eq!(
            format_last_sync(Some(at("2025-03-15T08:00:00Z")), now),
            "15 Mar 2025"
        );
    }

    #[test]
    fn clock_skew_reads_as_just_now() {
        let now = at("2025-06-01T12:00:00Z");
        assert_eq!(format_last_sync(Some(at("2025-06-01T12:00:30Z")), now), "Just now");
    }

    #[test]
    fn short_date_formatting() {
        assert_eq!(format_short_date(at("2024-03-05T14:02:26Z")), "5 Mar 2024");
        assert_eq!(format_datetime(at("2024-03-15T14:02:26Z")), "15 Mar 2024 14:02");
    }
}
