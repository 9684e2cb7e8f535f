//! 日期展示模块
//!
//! 服务端返回的 `creationDate` 格式并不固定，
//! 可能是 RFC 3339、纯日期或不带时区的日期时间。

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y";

/// 解析时间字符串，返回其日期部分
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// 格式化为 `M/D/YYYY`，无法解析时原样返回
pub fn display_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date_formats() {
        assert_eq!(display_date("2024-01-01"), "1/1/2024");
        assert_eq!(display_date("2024-03-15T10:20:30.123Z"), "3/15/2024");
        assert_eq!(display_date("2024-12-05T08:00:00"), "12/5/2024");
        assert_eq!(display_date("2024-12-05T08:00:00.5"), "12/5/2024");
    }

    #[test]
    fn test_display_date_falls_back_to_raw() {
        assert_eq!(display_date("yesterday"), "yesterday");
        assert_eq!(display_date(""), "");
    }
}
