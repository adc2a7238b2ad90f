use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Work-entry date as sent by clients: local wall time plus explicit offset.
pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Clock-in/out timestamp format, always UTC with a literal `Z`.
pub const ENTRY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Parse an entry date and keep the calendar date as written (local to its offset).
pub fn parse_entry_date(s: &str) -> Option<NaiveDate> {
    DateTime::<FixedOffset>::parse_from_str(s, ENTRY_DATE_FORMAT)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Parse a clock-in/out timestamp.
pub fn parse_entry_time(s: &str) -> Option<DateTime<Utc>> {
    chrono::NaiveDateTime::parse_from_str(s, ENTRY_TIME_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn format_entry_time(t: &DateTime<Utc>) -> String {
    t.format(ENTRY_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_date_keeps_local_calendar_day() {
        let date = parse_entry_date("2024-01-05T00:30:00.000+09:00").unwrap();
        // 2024-01-04T15:30Z in UTC, but the written date wins
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_entry_date_requires_offset() {
        assert!(parse_entry_date("2024-01-05T00:00:00.000").is_none());
        assert!(parse_entry_date("2024-01-05").is_none());
    }

    #[test]
    fn test_entry_date_rejects_zulu_suffix() {
        assert!(parse_entry_date("2024-01-05T00:00:00.000Z").is_none());
        assert!(parse_entry_date("2024-01-05T00:00:00.000+00:00").is_some());
    }

    #[test]
    fn test_entry_time_format() {
        let t = parse_entry_time("2024-01-05T08:00:00.000Z").unwrap();
        assert_eq!(format_entry_time(&t), "2024-01-05T08:00:00.000Z");
        assert!(parse_entry_time("2024/01/05 08:00").is_none());
        assert!(parse_entry_time("2024-01-05T08:00:00.000+09:00").is_none());
    }
}
