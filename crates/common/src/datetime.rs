//! Date formatting helpers.

use chrono::Datelike;

/// Formats a date as `DD/MM/YYYY`.
///
/// # Examples
///
/// ```
/// use utilbelt_common::format_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(format_date(&date), "07/03/2024");
/// ```
pub fn format_date<D: Datelike>(date: &D) -> String {
    format_date_with(date, "DD/MM/YYYY")
}

/// Formats a date using a token pattern.
///
/// Recognised tokens are `YYYY` (four-digit year), `MM` (two-digit month) and
/// `DD` (two-digit day). Everything else is copied through unchanged.
///
/// ```
/// use utilbelt_common::format_date_with;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(format_date_with(&date, "YYYY-MM-DD"), "2024-03-07");
/// ```
pub fn format_date_with<D: Datelike>(date: &D, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 2);
    let mut rest = pattern;
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("YYYY") {
            out.push_str(&format!("{:04}", date.year()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("MM") {
            out.push_str(&format!("{:02}", date.month()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("DD") {
            out.push_str(&format!("{:02}", date.day()));
            rest = tail;
        } else {
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c);
            }
            rest = chars.as_str();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date_default_is_day_first() {
        assert_eq!(format_date(&date(2024, 3, 7)), "07/03/2024");
        assert_eq!(format_date(&date(1999, 12, 31)), "31/12/1999");
    }

    #[test]
    fn test_format_date_pads_small_years() {
        assert_eq!(format_date(&date(42, 1, 2)), "02/01/0042");
    }

    #[test]
    fn test_format_date_accepts_datetimes() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 23, 59, 0).unwrap();
        assert_eq!(format_date(&dt), "15/01/2024");
    }

    #[test]
    fn test_format_date_with_custom_patterns() {
        let d = date(2024, 3, 7);
        assert_eq!(format_date_with(&d, "YYYY-MM-DD"), "2024-03-07");
        assert_eq!(format_date_with(&d, "MM/DD"), "03/07");
        assert_eq!(format_date_with(&d, "Day DD of MM"), "Day 07 of 03");
    }

    #[test]
    fn test_format_date_with_passes_unknown_text() {
        let d = date(2024, 3, 7);
        assert_eq!(format_date_with(&d, ""), "");
        assert_eq!(format_date_with(&d, "YY-M-D"), "YY-M-D");
        assert_eq!(format_date_with(&d, "é YYYY"), "é 2024");
    }
}
