use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Formats a backend date as `17 Oct 2026`.
///
/// RFC 3339 timestamps are normalised to UTC first. Plain dates and naive
/// timestamps are taken as they are. Anything unparseable is returned
/// unchanged so the field is never blank.
pub fn format_appointment_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%-d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
