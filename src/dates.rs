//! Date formatting for the three output profiles.
//!
//! Every article date is a plain calendar date; times are always midnight UTC.
//! Three renderings exist, one per consumer:
//!
//! - **Long form** (`format_long`): "4th January 2023" — shown on article and
//!   listing pages.
//! - **Sitemap** (`format_sitemap`): ISO 8601 with an explicit `+00:00` offset
//!   (never the `Z` suffix — the sitemap schema accepts both, but crawlers
//!   have historically been pickier about the numeric form).
//! - **RSS** (`format_rfc822`): RFC 822 in UTC, e.g. "Sun, 15 Jan 2023
//!   00:00:00 GMT".

use chrono::{NaiveDate, NaiveTime, Utc};

/// Ordinal suffix for a day of month: 1st, 2nd, 3rd, 4th–20th, 21st, ...
fn ordinal_suffix(day: u32) -> &'static str {
    if (4..=20).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Format a date as "4th January 2023".
pub fn format_long(date: NaiveDate) -> String {
    use chrono::Datelike;
    let day = date.day();
    format!("{}{} {}", day, ordinal_suffix(day), date.format("%B %Y"))
}

/// Format a date for sitemap `<lastmod>`: `2023-01-15T00:00:00+00:00`.
pub fn format_sitemap(date: NaiveDate) -> String {
    format!("{}T00:00:00+00:00", date.format("%Y-%m-%d"))
}

/// Format a date for RSS `<pubDate>`: `Sun, 15 Jan 2023 00:00:00 GMT`.
pub fn format_rfc822(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Today's date in UTC. Used by the scaffold frontmatter template.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn long_form_st_suffix() {
        assert_eq!(format_long(d("2023-01-01")), "1st January 2023");
        assert_eq!(format_long(d("2023-02-21")), "21st February 2023");
        assert_eq!(format_long(d("2023-03-31")), "31st March 2023");
    }

    #[test]
    fn long_form_nd_suffix() {
        assert_eq!(format_long(d("2023-01-02")), "2nd January 2023");
        assert_eq!(format_long(d("2023-04-22")), "22nd April 2023");
    }

    #[test]
    fn long_form_rd_suffix() {
        assert_eq!(format_long(d("2023-01-03")), "3rd January 2023");
        assert_eq!(format_long(d("2023-05-23")), "23rd May 2023");
    }

    #[test]
    fn long_form_th_suffix_for_teens() {
        assert_eq!(format_long(d("2023-01-04")), "4th January 2023");
        assert_eq!(format_long(d("2023-06-11")), "11th June 2023");
        assert_eq!(format_long(d("2023-07-12")), "12th July 2023");
        assert_eq!(format_long(d("2023-08-13")), "13th August 2023");
        assert_eq!(format_long(d("2023-12-20")), "20th December 2023");
    }

    #[test]
    fn long_form_th_suffix_for_late_month() {
        assert_eq!(format_long(d("2023-01-24")), "24th January 2023");
        assert_eq!(format_long(d("2023-01-30")), "30th January 2023");
    }

    #[test]
    fn long_form_all_months() {
        let months = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        for (i, month) in months.iter().enumerate() {
            let date = d(&format!("2023-{:02}-15", i + 1));
            assert!(format_long(date).contains(month));
        }
    }

    #[test]
    fn sitemap_uses_numeric_offset() {
        assert_eq!(format_sitemap(d("2023-01-15")), "2023-01-15T00:00:00+00:00");
        assert!(!format_sitemap(d("2023-06-20")).ends_with('Z'));
    }

    #[test]
    fn rfc822_midnight_utc() {
        assert_eq!(format_rfc822(d("2023-01-15")), "Sun, 15 Jan 2023 00:00:00 GMT");
        assert_eq!(format_rfc822(d("2023-06-20")), "Tue, 20 Jun 2023 00:00:00 GMT");
    }
}
