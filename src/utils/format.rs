// ============================================================================
// FORMAT - Display helpers for property cards
// ============================================================================

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Price with two decimals, e.g. `USD 125.50`
pub fn format_price(price: f64) -> String {
    format!("USD {:.2}", price)
}

/// Short British date (`05 Mar 2024`). Unparseable input is shown as-is.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_keeps_two_decimals() {
        assert_eq!(format_price(125.5), "USD 125.50");
        assert_eq!(format_price(80.0), "USD 80.00");
        assert_eq!(format_price(99.999), "USD 100.00");
    }

    #[test]
    fn dates_in_supported_layouts() {
        assert_eq!(format_date("2024-03-05T14:00:00.000Z"), "05 Mar 2024");
        assert_eq!(format_date("2024-03-05T14:00:00+02:00"), "05 Mar 2024");
        assert_eq!(format_date("2024-12-01 10:30:00"), "01 Dec 2024");
        assert_eq!(format_date("2024-12-01T10:30:00"), "01 Dec 2024");
        assert_eq!(format_date("2024-07-19"), "19 Jul 2024");
    }

    #[test]
    fn unparseable_date_is_shown_raw() {
        assert_eq!(format_date("next tuesday"), "next tuesday");
        assert_eq!(format_date(""), "");
    }
}
