use chrono::{DateTime, NaiveDate};
use log::warn;

/// Formats an ISO-8601 timestamp as an abbreviated month and a year, e.g. `Jan 2011`.
///
/// A string that doesn't parse is returned unchanged.
pub fn format_month_year(iso_date: &str) -> String {
    let iso_date = iso_date.trim();
    let date = DateTime::parse_from_rfc3339(iso_date)
        .map(|date_time| date_time.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(iso_date, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(e) => {
            warn!("Failed to parse date '{iso_date}': {e}");
            iso_date.to_string()
        }
    }
}
