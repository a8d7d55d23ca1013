use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;

fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

pub fn current_year() -> i32 {
    now_in_app_tz().year()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp. Timestamps are read as the
/// calendar day they fall on in the app time zone.
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    parse_api_date_in(raw, &app_time_zone())
}

pub fn parse_api_date_in(raw: &str, tz: &Tz) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Some(date) = parse_date_input(trimmed) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(tz).date_naive());
    }
    trimmed.get(..10).and_then(parse_date_input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_api_date_accepts_plain_and_timestamp_forms() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        assert_eq!(parse_api_date("2025-01-10"), Some(expected));
        assert_eq!(parse_api_date("2025-01-10T00:00:00.000Z"), Some(expected));
        assert_eq!(parse_api_date("2025-01-10T18:30:00+05:30"), Some(expected));
        assert_eq!(parse_api_date("not a date"), None);
        assert_eq!(parse_api_date(""), None);
    }

    #[test]
    fn utc_timestamps_land_on_the_local_day() {
        let stored_at_ist_midnight = "2025-01-09T18:30:00.000Z";
        assert_eq!(
            parse_api_date_in(stored_at_ist_midnight, &chrono_tz::Asia::Kolkata),
            NaiveDate::from_ymd_opt(2025, 1, 10)
        );
        assert_eq!(
            parse_api_date_in(stored_at_ist_midnight, &chrono_tz::UTC),
            NaiveDate::from_ymd_opt(2025, 1, 9)
        );
        assert_eq!(parse_api_date(stored_at_ist_midnight), NaiveDate::from_ymd_opt(2025, 1, 10));
    }

    #[test]
    fn format_date_is_iso() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_date(date), "2025-03-07");
    }
}
