//! Summary accumulation module
//!
//! Holds the running totals of a scan. A summary only ever grows: each
//! successful probe is recorded once, and the average is derived on demand.

use std::path::PathBuf;

/// A file whose duration was probed successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbedVideo {
    /// Full path as yielded by the directory walk
    pub path: PathBuf,

    /// Path relative to the scan root, used in the report
    pub relative_path: PathBuf,

    /// Container duration in seconds
    pub duration_secs: f64,
}

/// Count and total duration of successfully probed files.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScanSummary {
    video_count: usize,
    total_seconds: f64,
}

impl ScanSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one probed file. Count and total always move together.
    pub fn record(&mut self, duration_secs: f64) {
        self.video_count += 1;
        self.total_seconds += duration_secs;
    }

    pub fn video_count(&self) -> usize {
        self.video_count
    }

    pub fn total_seconds(&self) -> f64 {
        self.total_seconds
    }

    /// Mean duration, or 0.0 when nothing was recorded.
    pub fn average_seconds(&self) -> f64 {
        if self.video_count == 0 {
            0.0
        } else {
            self.total_seconds / self.video_count as f64
        }
    }
}

impl FromIterator<f64> for ScanSummary {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |mut summary, secs| {
            summary.record(secs);
            summary
        })
    }
}
