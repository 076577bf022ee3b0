//! Display formatting for build metadata

use chrono::DateTime;

/// Build archive size as gigabytes with two decimals.
pub fn size_gb(bytes: u64) -> String {
    let gb = bytes as f64 / (1024.0 * 1024.0 * 1024.0);
    format!("{gb:.2} GB")
}

/// Build date from a unix timestamp, `"N/A"` for missing timestamps.
pub fn build_date(timestamp: i64) -> String {
    if timestamp <= 0 {
        return "N/A".to_string();
    }
    match DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// Version labels use underscores on the wire; rendered with spaces.
pub fn version_label_display(version: &str) -> String {
    version.replace('_', " ")
}

/// Download counts render `"N/A"` when the stats lookup came back empty.
pub fn download_count_display(count: u64) -> String {
    if count == 0 {
        "N/A".to_string()
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_gb_two_decimals() {
        assert_eq!(size_gb(2_234_567_890), "2.08 GB");
        assert_eq!(size_gb(0), "0.00 GB");
    }

    #[test]
    fn test_build_date_formats_timestamp() {
        assert_eq!(build_date(1710806400), "Mar 19, 2024");
        assert_eq!(build_date(0), "N/A");
        assert_eq!(build_date(-5), "N/A");
    }

    #[test]
    fn test_version_label_display_replaces_underscores() {
        assert_eq!(version_label_display("10.0_Baklava"), "10.0 Baklava");
        assert_eq!(version_label_display("9.0"), "9.0");
    }

    #[test]
    fn test_download_count_display() {
        assert_eq!(download_count_display(0), "N/A");
        assert_eq!(download_count_display(12842), "12842");
    }
}
