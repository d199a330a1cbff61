//! Human-readable byte counts.

/// Format a byte count the way the UI displays file sizes.
///
/// Under 1 KiB shows whole bytes, under 1 MiB shows two-decimal KB,
/// everything else shows two-decimal MB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} bytes", bytes)
    } else if bytes < 1_048_576 {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.2} MB", bytes as f64 / 1_048_576.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_below_one_kilobyte() {
        assert_eq!(format_file_size(0), "0 bytes");
        assert_eq!(format_file_size(1), "1 bytes");
        assert_eq!(format_file_size(1023), "1023 bytes");
    }

    #[test]
    fn kilobyte_range_has_two_decimals() {
        assert_eq!(format_file_size(1024), "1.00 KB");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(1_048_575), "1024.00 KB");
    }

    #[test]
    fn megabyte_range_has_two_decimals() {
        assert_eq!(format_file_size(1_048_576), "1.00 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
    }
}
