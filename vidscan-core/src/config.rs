// ============================================================================
// vidscan-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Scan Configuration Structures and Constants
//
// This module defines the configuration for a single scan: where to start,
// which file extensions count as video, and how ffprobe is invoked.
//
// USAGE:
// Instances of ScanConfig are created by consumers of the library (like
// vidscan-cli) and passed to `scan_videos`. The extension list is normalized
// on the way in so that matching never has to care about case or dots.

use crate::error::{CoreError, CoreResult};

use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Extensions scanned when the caller does not supply a list.
pub const DEFAULT_VIDEO_EXTENSIONS: [&str; 8] = [
    ".mp4", ".avi", ".mkv", ".mov", ".wmv", ".flv", ".webm", ".m4v",
];

/// Upper bound on how long a single ffprobe call may run.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Name of the probe binary, resolved through `PATH`.
pub const DEFAULT_FFPROBE_BIN: &str = "ffprobe";

// ============================================================================
// SCAN CONFIGURATION
// ============================================================================

/// Everything a scan needs to know before it starts.
///
/// # Examples
///
/// ```rust
/// use vidscan_core::ScanConfig;
/// use std::time::Duration;
///
/// let config = ScanConfig::new("/media/videos")
///     .with_extensions(["MP4", ".mkv"])
///     .with_probe_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.extensions, vec![".mp4", ".mkv"]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory the recursive walk starts from
    pub root: PathBuf,

    /// Accepted extensions, lowercase with a leading dot
    pub extensions: Vec<String>,

    /// Bounded wait for each ffprobe invocation
    pub probe_timeout: Duration,

    /// ffprobe executable (bare name or full path)
    pub ffprobe_bin: PathBuf,
}

impl ScanConfig {
    /// Creates a configuration for `root` with the default extension list.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_VIDEO_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            probe_timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
            ffprobe_bin: PathBuf::from(DEFAULT_FFPROBE_BIN),
        }
    }

    /// Replaces the accepted extensions. Each entry is lowercased and given a
    /// leading dot if it lacks one.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .collect();
        self
    }

    #[must_use]
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_ffprobe_bin(mut self, bin: impl Into<PathBuf>) -> Self {
        self.ffprobe_bin = bin.into();
        self
    }

    /// Checks the configuration for values the scan cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.extensions.is_empty() {
            return Err(CoreError::Config(
                "at least one file extension is required".to_string(),
            ));
        }
        if let Some(bad) = self.extensions.iter().find(|ext| ext.len() < 2) {
            return Err(CoreError::Config(format!(
                "empty file extension in list (got '{bad}')"
            )));
        }
        if self.probe_timeout.is_zero() {
            return Err(CoreError::Config(
                "probe timeout must be greater than zero".to_string(),
            ));
        }
        if self.ffprobe_bin.as_os_str().is_empty() {
            return Err(CoreError::Config(
                "ffprobe binary path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Lowercases an extension and makes sure it starts with a dot.
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}
