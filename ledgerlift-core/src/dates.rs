//! Statement date parsing.

use chrono::NaiveDate;

/// Parse a `DD Mon YYYY` token ("01 Jan 2024") into ISO `YYYY-MM-DD`.
///
/// Returns `None` when the token is not a strict day-month(abbr)-year date;
/// callers keep the raw token in that case.
pub fn to_iso_date(raw: &str) -> Option<String> {
    NaiveDate::parse_from_str(raw.trim(), "%d %b %Y")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}
