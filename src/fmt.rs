//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Bookmark emoji for finished bookmarklets
pub const BOOKMARK: Emoji = Emoji("🔖", "*");

/// Scissors emoji for stripping/minifying
pub const SCISSORS: Emoji = Emoji("✂️", ">");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Pick the emoji or its plain fallback, honouring `--no-emoji` (`NO_EMOJI`)
///
/// # Examples
///
/// ```
/// use bookmarkletize::fmt::{icon, CHECKMARK};
///
/// let shown = icon(CHECKMARK);
/// assert!(shown == "✅" || shown == "[OK]");
/// ```
pub fn icon(emoji: Emoji<'static, 'static>) -> &'static str {
    if std::env::var_os("NO_EMOJI").is_some() {
        emoji.1
    } else {
        emoji.0
    }
}

/// Format bytes as human-readable size string
///
/// # Examples
///
/// ```
/// use bookmarkletize::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1_048_576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Percentage saved going from `before` to `after` bytes (negative if it grew)
///
/// # Examples
///
/// ```
/// use bookmarkletize::fmt::reduction_percent;
///
/// assert_eq!(reduction_percent(200, 150), 25.0);
/// assert_eq!(reduction_percent(0, 31), 0.0);
/// ```
pub fn reduction_percent(before: u64, after: u64) -> f64 {
    if before == 0 {
        return 0.0;
    }
    (before as f64 - after as f64) / before as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_various_sizes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1_048_576), "1.00 MB");
        assert_eq!(format_bytes(2_621_440), "2.50 MB");
    }

    #[test]
    fn test_reduction_percent() {
        assert_eq!(reduction_percent(1000, 600), 40.0);
        assert_eq!(reduction_percent(100, 150), -50.0);
        assert_eq!(reduction_percent(0, 0), 0.0);
    }
}
