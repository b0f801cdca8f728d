//! Display formatting for prices and purchase times.
//!
//! Amounts are whole Rupiah and formatted with the IDR currency; dates use Indonesian
//! month names.

use chrono::{Locale, NaiveDateTime};
use rusty_money::{Money, iso};

/// Pattern used on the history and receipt screens (`05 Maret 2024, 14:30`)
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%d %B %Y, %H:%M";

/// Formats a whole-Rupiah amount, e.g. `Rp25.000,00`.
pub fn format_rupiah(amount: i64) -> String {
    Money::from_major(amount, iso::IDR).to_string()
}

/// Formats a purchase time with Indonesian month names.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp
        .and_utc()
        .format_localized(DISPLAY_TIMESTAMP_FORMAT, Locale::id_ID)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_rupiah_uses_idr() {
        let formatted = format_rupiah(25_000);
        assert!(formatted.contains("Rp"), "{formatted}");
        assert!(formatted.contains("25"), "{formatted}");
    }

    #[test]
    fn test_format_timestamp_in_indonesian() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|d| d.and_hms_opt(14, 30, 0))
            .unwrap_or_default();
        assert_eq!(format_timestamp(ts), "05 Maret 2024, 14:30");
    }
}
