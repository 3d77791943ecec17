//! Size and time rendering shared by the listing engine and printer

use chrono::{DateTime, Local, TimeZone};

use crate::tree::Node;

const SIZE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Placeholder for timestamps chrono cannot represent.
const UNKNOWN_TIME: &str = "????-??-?? ??:??";

/// Format a size in bytes with two decimals in the first unit below 1024.
///
/// Anything of 1024 PB or more stays in PB.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = SIZE_UNITS[0];
    for next in &SIZE_UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{:.2} {}", value, unit)
}

/// Format epoch seconds as `YYYY-MM-DD HH:MM` in local time.
pub fn format_time(epoch_secs: i64) -> String {
    format_time_in(epoch_secs, &Local)
}

/// Format epoch seconds as `YYYY-MM-DD HH:MM` in the given time zone.
pub fn format_time_in<Tz>(epoch_secs: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp(epoch_secs, 0) {
        Some(utc) => utc.with_timezone(tz).format(TIME_FORMAT).to_string(),
        None => UNKNOWN_TIME.to_string(),
    }
}

/// Long-format columns: permissions, right-aligned size, modification time.
pub fn long_details(node: &Node) -> String {
    format!(
        "{} {:>9} {}",
        node.permissions(),
        format_size(node.size()),
        format_time(node.modified_at())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(83), "83.00 B");
        assert_eq!(format_size(1023), "1023.00 B");
    }

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1071), "1.05 KB");
        assert_eq!(format_size(4096), "4.00 KB");
        assert_eq!(format_size(8911), "8.70 KB");
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.00 GB");
        assert_eq!(format_size(1024u64.pow(4)), "1.00 TB");
        assert_eq!(format_size(1024u64.pow(5)), "1.00 PB");
    }

    #[test]
    fn test_format_size_clamps_at_petabytes() {
        assert_eq!(format_size(1024u64.pow(5) * 2048), "2048.00 PB");
        assert_eq!(format_size(u64::MAX), "16384.00 PB");
    }

    #[test]
    fn test_format_size_fits_long_column() {
        assert_eq!(format!("{:>9}", format_size(83)), "  83.00 B");
        assert_eq!(format!("{:>9}", format_size(1023)), "1023.00 B");
        assert_eq!(format!("{:>9}", format_size(4096)), "  4.00 KB");
    }

    #[test]
    fn test_format_time_utc() {
        assert_eq!(format_time_in(0, &Utc), "1970-01-01 00:00");
        assert_eq!(format_time_in(1699957865, &Utc), "2023-11-14 10:31");
    }

    #[test]
    fn test_format_time_offset() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_time_in(1699957865, &tz), "2023-11-14 12:31");
    }

    #[test]
    fn test_format_time_out_of_range() {
        assert_eq!(format_time_in(i64::MAX, &Utc), UNKNOWN_TIME);
    }

    #[test]
    fn test_format_time_local_shape() {
        let s = format_time(1699957865);
        assert_eq!(s.len(), 16);
        assert_eq!(&s[4..5], "-");
        assert_eq!(&s[13..14], ":");
    }

    #[test]
    fn test_long_details() {
        let node = crate::test_utils::file("README.md", 83, 1699941437);
        let details = long_details(&node);
        assert_eq!(
            details,
            format!("-rw-r--r--   83.00 B {}", format_time(1699941437))
        );
    }
}
