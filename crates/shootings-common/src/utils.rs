//! Shared utility functions.

use chrono::NaiveDate;

/// Formats a date the way the dataset stores it (`YYYY-MM-DD`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses `#RRGGBB` or `#RRGGBBAA` into RGBA channels. Alpha defaults to 255.
pub fn parse_hex_color(color: &str) -> Option<[u8; 4]> {
    let hex = color.strip_prefix('#')?;
    if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Some([channel(0)?, channel(2)?, channel(4)?, alpha])
}

/// Converts a physical length to whole pixels at the given resolution.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn inches_to_pixels(inches: f64, dpi: u32) -> u32 {
    (inches * f64::from(dpi)).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2015, 1, 2).unwrap();
        assert_eq!(format_date(date), "2015-01-02");
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF0101"), Some([255, 1, 1, 255]));
        assert_eq!(parse_hex_color("#ffff0180"), Some([255, 255, 1, 128]));
        assert_eq!(parse_hex_color("FF0101"), None);
        assert_eq!(parse_hex_color("#ZZ0000"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn test_inches_to_pixels() {
        assert_eq!(inches_to_pixels(4.0, 96), 384);
        assert_eq!(inches_to_pixels(4.0, 72), 288);
        assert_eq!(inches_to_pixels(-1.0, 96), 0);
    }
}
