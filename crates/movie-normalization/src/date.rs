//! Release date parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Format used when writing dates back out.
pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a release date cell; timestamps keep only their date part.
///
/// Returns `None` for anything that is not a real calendar date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use movie_normalization::date::parse_release_date;
///
/// assert_eq!(parse_release_date("1995-10-30"), NaiveDate::from_ymd_opt(1995, 10, 30));
/// assert_eq!(parse_release_date("1995-02-30"), None);
/// ```
pub fn parse_release_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|datetime| datetime.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn accepts_supported_formats() {
        assert_eq!(parse_release_date("2000-01-01"), ymd(2000, 1, 1));
        assert_eq!(parse_release_date("2000/01/02"), ymd(2000, 1, 2));
        assert_eq!(parse_release_date("01/03/2000"), ymd(2000, 1, 3));
        assert_eq!(parse_release_date("2000-01-04 12:30:00"), ymd(2000, 1, 4));
        assert_eq!(parse_release_date("2000-01-05T08:00:00"), ymd(2000, 1, 5));
        assert_eq!(parse_release_date("2000-01-06T08:00:00+02:00"), ymd(2000, 1, 6));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_release_date(""), None);
        assert_eq!(parse_release_date("1"), None);
        assert_eq!(parse_release_date("not a date"), None);
        assert_eq!(parse_release_date("2001-13-01"), None);
        assert_eq!(parse_release_date("/ff9qCepilowshEtG2GYWwzt2bs4.jpg"), None);
    }
}
