//! Release date display

use chrono::{DateTime, Datelike, NaiveDate};
use tracing::debug;
use vetdesk_core::config::Language;

const SPANISH_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const ENGLISH_MONTHS: [&str; 12] = [
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

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp into a calendar date.
///
/// Timestamps keep the date as written; no timezone conversion happens.
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Format an ISO date for display, e.g. `15 de enero de 2024`.
///
/// Empty input gives an empty string; unparseable input is returned as is.
pub fn format_date_spanish(iso_date: &str) -> String {
    format_date(iso_date, Language::Es)
}

/// Format an ISO date in the given language
pub fn format_date(iso_date: &str, language: Language) -> String {
    if iso_date.is_empty() {
        return String::new();
    }

    let Some(date) = parse_iso_date(iso_date) else {
        debug!(input = iso_date, "unparseable date, showing it verbatim");
        return iso_date.to_string();
    };

    let month = date.month0() as usize;
    match language {
        Language::Es => format!(
            "{} de {} de {:04}",
            date.day(),
            SPANISH_MONTHS[month],
            date.year()
        ),
        Language::En => format!(
            "{} {}, {:04}",
            ENGLISH_MONTHS[month],
            date.day(),
            date.year()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(format_date_spanish(""), "");
        assert_eq!(format_date("", Language::En), "");
    }

    #[test]
    fn test_spanish_format() {
        let formatted = format_date_spanish("2024-01-15");
        assert!(formatted.contains("15"));
        assert!(formatted.contains("2024"));
        assert_eq!(formatted, "15 de enero de 2024");
        assert_eq!(format_date_spanish("2023-09-01"), "1 de septiembre de 2023");
    }

    #[test]
    fn test_english_format() {
        assert_eq!(format_date("2024-12-31", Language::En), "December 31, 2024");
    }

    #[test]
    fn test_invalid_date_returns_string() {
        let formatted: String = format_date_spanish("not-a-date");
        assert_eq!(formatted, "not-a-date");
        assert_eq!(format_date_spanish("2024-02-30"), "2024-02-30");
        assert_eq!(format_date_spanish("   "), "   ");
    }

    #[test]
    fn test_parse_rfc3339() {
        let date = parse_iso_date("2024-03-10T23:30:00-05:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(format_date_spanish("2024-03-10T23:30:00Z"), "10 de marzo de 2024");
    }

    #[test]
    fn test_parse_iso_date_rejects_garbage() {
        assert!(parse_iso_date("").is_none());
        assert!(parse_iso_date("15/01/2024").is_none());
        assert!(parse_iso_date("2024-13-01").is_none());
    }
}
