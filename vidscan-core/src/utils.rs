//! Utility functions for duration formatting and extension matching.
//!
//! These are small, pure helpers shared by discovery and reporting.

use std::path::Path;

/// Text shown in place of a duration when none is available.
pub const NOT_AVAILABLE: &str = "N/A";

/// Returns true if `path` has an extension contained in `extensions`.
///
/// `extensions` must already be normalized (lowercase, leading dot). The
/// comparison lowercases the path's extension, so `clip.MP4` matches `.mp4`.
#[must_use]
pub fn has_accepted_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .is_some_and(|dotted| extensions.iter().any(|accepted| *accepted == dotted))
}

/// Formats seconds as HH:MM:SS (e.g., 3725.0 -> "01:02:05").
///
/// Fractional seconds are truncated and hours are not wrapped at 24.
/// `None` gives "N/A"; negative or non-finite input gives "??:??:??".
#[must_use]
pub fn format_duration(seconds: Option<f64>) -> String {
    let Some(seconds) = seconds else {
        return NOT_AVAILABLE.to_string();
    };
    if seconds < 0.0 || !seconds.is_finite() {
        return "??:??:??".to_string();
    }

    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts() -> Vec<String> {
        vec![".mp4".to_string(), ".mkv".to_string()]
    }

    #[test]
    fn test_has_accepted_extension() {
        assert!(has_accepted_extension(Path::new("a/b/clip.mp4"), &exts()));
        assert!(has_accepted_extension(Path::new("clip.MP4"), &exts()));
        assert!(has_accepted_extension(Path::new("clip.Mkv"), &exts()));

        assert!(!has_accepted_extension(Path::new("clip.avi"), &exts()));
        assert!(!has_accepted_extension(Path::new("clip.AVI"), &exts()));
        assert!(!has_accepted_extension(Path::new("mp4"), &exts()));
        assert!(!has_accepted_extension(Path::new(".mp4"), &exts())); // hidden file, no extension
        assert!(!has_accepted_extension(Path::new(""), &exts()));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(None), "N/A");

        assert_eq!(format_duration(Some(0.0)), "00:00:00");
        assert_eq!(format_duration(Some(59.0)), "00:00:59");
        assert_eq!(format_duration(Some(60.0)), "00:01:00");
        assert_eq!(format_duration(Some(3599.0)), "00:59:59");
        assert_eq!(format_duration(Some(3600.0)), "01:00:00");
        assert_eq!(format_duration(Some(3661.0)), "01:01:01");
        assert_eq!(format_duration(Some(86399.0)), "23:59:59");
        assert_eq!(format_duration(Some(86400.0)), "24:00:00");
        assert_eq!(format_duration(Some(90061.0)), "25:01:01");
        assert_eq!(format_duration(Some(360_000.0)), "100:00:00");

        // Truncation, not rounding
        assert_eq!(format_duration(Some(59.9)), "00:00:59");
        assert_eq!(format_duration(Some(60.1)), "00:01:00");
        assert_eq!(format_duration(Some(3599.999)), "00:59:59");

        assert_eq!(format_duration(Some(-1.0)), "??:??:??");
        assert_eq!(format_duration(Some(f64::INFINITY)), "??:??:??");
        assert_eq!(format_duration(Some(f64::NAN)), "??:??:??");
    }
}
