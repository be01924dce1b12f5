//! Core library for scanning directory trees for videos and totalling their
//! durations with ffprobe.
//!
//! This crate provides recursive video discovery, duration probing through an
//! external ffprobe process, HH:MM:SS formatting and the text report.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidscan_core::{FfprobeExecutor, ScanConfig, TextReporter, scan_videos};
//! use std::time::Duration;
//!
//! let config = ScanConfig::new("/path/to/videos")
//!     .with_extensions([".mp4", ".mkv"])
//!     .with_probe_timeout(Duration::from_secs(10));
//! config.validate().unwrap();
//!
//! let probe = FfprobeExecutor::from_config(&config);
//! let mut reporter = TextReporter::new(std::io::stdout().lock());
//! scan_videos(&config, &probe, &mut reporter).unwrap();
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod reporting;
pub mod scan;
pub mod utils;

// Re-exports for public API
pub use config::ScanConfig;
pub use discovery::{find_video_files, video_files};
pub use error::{CoreError, CoreResult, ProbeError};
pub use external::{DurationProbe, FfprobeExecutor, check_dependency};
pub use reporting::{ProbedVideo, Reporter, ScanSummary, TextReporter};
pub use scan::{ScanOutcome, scan_videos};
pub use utils::format_duration;
