//! Report output for a scan.
//!
//! The scanner talks to a [`Reporter`]; [`TextReporter`] renders the plain
//! text report that goes to stdout. Its layout is a stable contract:
//!
//! ```text
//! Scanning directory: /videos
//! --------------------------------------------------------------------------------
//! show/episode1.mkv
//!   Duration: 00:42:10 (2530.04 seconds)
//!
//! --------------------------------------------------------------------------------
//!
//! Summary:
//! Total videos found: 1
//! Total duration: 00:42:10 (2530.04 seconds)
//! Average duration: 00:42:10
//! ```

pub mod summary;

pub use summary::{ProbedVideo, ScanSummary};

use crate::utils::format_duration;

use std::io::{self, Write};
use std::path::Path;

/// Width of the separator rule.
pub const SEPARATOR_WIDTH: usize = 80;

/// Receives scan events in the order they happen.
pub trait Reporter {
    /// The root does not exist; nothing else will be reported.
    fn root_missing(&mut self, root: &Path) -> io::Result<()>;

    /// The root exists and the walk is about to begin.
    fn scan_started(&mut self, root: &Path) -> io::Result<()>;

    /// A file was probed successfully.
    fn video_probed(&mut self, video: &ProbedVideo) -> io::Result<()>;

    /// The walk is finished.
    fn scan_complete(&mut self, summary: &ScanSummary) -> io::Result<()>;
}

/// Plain text reporter writing to any `Write` sink.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn separator(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn root_missing(&mut self, root: &Path) -> io::Result<()> {
        writeln!(self.out, "Error: Path '{}' does not exist!", root.display())?;
        self.out.flush()
    }

    fn scan_started(&mut self, root: &Path) -> io::Result<()> {
        writeln!(self.out, "Scanning directory: {}", root.display())?;
        self.separator()?;
        self.out.flush()
    }

    fn video_probed(&mut self, video: &ProbedVideo) -> io::Result<()> {
        writeln!(self.out, "{}", video.relative_path.display())?;
        writeln!(
            self.out,
            "  Duration: {} ({:.2} seconds)",
            format_duration(Some(video.duration_secs)),
            video.duration_secs
        )?;
        writeln!(self.out)?;
        self.out.flush()
    }

    fn scan_complete(&mut self, summary: &ScanSummary) -> io::Result<()> {
        self.separator()?;
        writeln!(self.out)?;
        writeln!(self.out, "Summary:")?;
        writeln!(self.out, "Total videos found: {}", summary.video_count())?;
        writeln!(
            self.out,
            "Total duration: {} ({:.2} seconds)",
            format_duration(Some(summary.total_seconds())),
            summary.total_seconds()
        )?;
        writeln!(
            self.out,
            "Average duration: {}",
            format_duration(Some(summary.average_seconds()))
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn render(f: impl FnOnce(&mut TextReporter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut reporter = TextReporter::new(Vec::new());
        f(&mut reporter).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_header() {
        let text = render(|r| r.scan_started(Path::new("/videos")));
        assert_eq!(
            text,
            format!("Scanning directory: /videos\n{}\n", "-".repeat(80))
        );
    }

    #[test]
    fn test_video_block() {
        let video = ProbedVideo {
            path: PathBuf::from("/videos/show/ep1.mkv"),
            relative_path: PathBuf::from("show/ep1.mkv"),
            duration_secs: 3661.456,
        };
        let text = render(|r| r.video_probed(&video));
        assert_eq!(text, "show/ep1.mkv\n  Duration: 01:01:01 (3661.46 seconds)\n\n");
    }

    #[test]
    fn test_missing_root_line() {
        let text = render(|r| r.root_missing(Path::new("/nope")));
        assert_eq!(text, "Error: Path '/nope' does not exist!\n");
    }

    #[test]
    fn test_summary_block() {
        let summary: ScanSummary = [30.0, 60.5].into_iter().collect();
        let text = render(|r| r.scan_complete(&summary));
        let expected = format!(
            "{}\n\nSummary:\nTotal videos found: 2\n\
             Total duration: 00:01:30 (90.50 seconds)\n\
             Average duration: 00:00:45\n",
            "-".repeat(80)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_summary_block() {
        let text = render(|r| r.scan_complete(&ScanSummary::new()));
        assert!(text.contains("Total videos found: 0\n"));
        assert!(text.contains("Total duration: 00:00:00 (0.00 seconds)\n"));
        assert!(text.contains("Average duration: 00:00:00\n"));
    }
}
