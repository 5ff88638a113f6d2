use chrono::{Local, NaiveDate};
use regex::Regex;

/// Parse a strict `YYYY-MM-DD` string into a calendar date.
/// Returns None for other shapes and for impossible days such as `2026-04-31`.
pub fn parse_iso_date(iso: &str) -> Option<NaiveDate> {
    let re = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    if !re.is_match(iso) {
        return None;
    }
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()
}

/// Today's date on the local clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `yyyy-mm-dd` -> `mm-dd-yy`
pub fn to_mm_dd_yy(iso: &str) -> String {
    reformat(iso, '-')
}

/// `yyyy-mm-dd` -> `mm/dd/yy`
pub fn to_mm_dd_slash_yy(iso: &str) -> String {
    reformat(iso, '/')
}

// Plain slicing of the three components, no calendar conversion.
fn reformat(iso: &str, sep: char) -> String {
    if iso.is_empty() {
        return String::new();
    }

    let mut parts = iso.split('-');
    let year = parts.next().unwrap_or("");
    let month = parts.next().unwrap_or("");
    let day = parts.next().unwrap_or("");

    let yy: String = {
        let chars: Vec<char> = year.chars().collect();
        chars[chars.len().saturating_sub(2)..].iter().collect()
    };

    format!("{}{sep}{}{sep}{}", pad2(month), pad2(day), yy)
}

fn pad2(part: &str) -> String {
    format!("{:0>2}", part)
}
