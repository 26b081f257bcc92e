use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

// ── Timestamp parsing ──────────────────────────────────────────────────────────

/// Parse a timestamp cell into a UTC [`DateTime`].
///
/// Handles RFC 3339 (including the `Z`-suffix form and fixed offsets) plus
/// the common naive layouts produced by spreadsheet and logger exports.
/// Naive timestamps are interpreted as UTC. Returns `None` for empty strings
/// or unrecognised formats.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    const FMTS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ];
    for fmt in FMTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }

    // Bare dates are taken as midnight UTC.
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    warn!("Could not parse timestamp {:?}", s);
    None
}

/// Render a UTC timestamp for CSV export and previews.
///
/// RFC 3339 with seconds precision, so exported files re-ingest cleanly.
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339_z_suffix() {
        let dt = parse_timestamp("2024-03-01T12:30:00Z").expect("parse");
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_offset() {
        let dt = parse_timestamp("2024-03-01T12:30:00+02:00").expect("parse");
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_datetime_as_utc() {
        let dt = parse_timestamp("2024-03-01 06:00:00").expect("parse");
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 1, 6, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_t_separator_with_fraction() {
        let dt = parse_timestamp("2024-03-01T06:00:00.250").expect("parse");
        assert_eq!(
            dt.timestamp_millis(),
            Utc.with_ymd_and_hms(2024, 3, 1, 6, 0, 0)
                .unwrap()
                .timestamp_millis()
                + 250
        );
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let dt = parse_timestamp("2024-03-01").expect("parse");
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("   ").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-13-01").is_none());
    }

    #[test]
    fn test_format_round_trips() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let formatted = format_timestamp(dt);
        assert_eq!(formatted, "2024-03-01T12:30:00Z");
        assert_eq!(parse_timestamp(&formatted), Some(dt));
    }
}
