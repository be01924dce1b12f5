// ============================================================================
// vidscan-core/src/scan.rs
// ============================================================================
//
// SCAN ORCHESTRATION: Walk, probe, report
//
// A scan is a straight line: check the root, walk it, probe every matching
// file one at a time, then print the totals. Probe failures are logged and
// the file is left out of the totals; only a missing root (or a report that
// cannot be written) ends the scan early.

use crate::config::ScanConfig;
use crate::discovery::video_files;
use crate::error::CoreResult;
use crate::external::DurationProbe;
use crate::reporting::{ProbedVideo, Reporter, ScanSummary};

/// How a scan ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScanOutcome {
    /// The root does not exist. One error line was reported, nothing else.
    RootMissing,

    /// The walk finished and the summary was reported.
    Completed(ScanSummary),
}

impl ScanOutcome {
    pub fn summary(&self) -> Option<&ScanSummary> {
        match self {
            ScanOutcome::RootMissing => None,
            ScanOutcome::Completed(summary) => Some(summary),
        }
    }
}

/// Scans `config.root` and reports every video whose duration can be probed.
///
/// Files are probed sequentially in traversal order. A failed probe is
/// logged at error level and the file is skipped.
///
/// # Errors
///
/// * `CoreError::Config` - The configuration does not validate
/// * `CoreError::Io` - The reporter could not write
///
/// # Examples
///
/// ```rust,no_run
/// use vidscan_core::{FfprobeExecutor, ScanConfig, TextReporter, scan_videos};
///
/// let config = ScanConfig::new("/path/to/videos");
/// let probe = FfprobeExecutor::from_config(&config);
/// let mut reporter = TextReporter::new(std::io::stdout().lock());
///
/// let outcome = scan_videos(&config, &probe, &mut reporter).unwrap();
/// if let Some(summary) = outcome.summary() {
///     eprintln!("{} videos", summary.video_count());
/// }
/// ```
pub fn scan_videos<P, R>(config: &ScanConfig, probe: &P, reporter: &mut R) -> CoreResult<ScanOutcome>
where
    P: DurationProbe + ?Sized,
    R: Reporter + ?Sized,
{
    config.validate()?;

    let root = config.root.as_path();
    if !root.exists() {
        log::debug!("Scan root {} does not exist", root.display());
        reporter.root_missing(root)?;
        return Ok(ScanOutcome::RootMissing);
    }

    log::debug!(
        "Scanning {} for extensions [{}] (probe timeout {:?})",
        root.display(),
        config.extensions.join(", "),
        config.probe_timeout
    );
    reporter.scan_started(root)?;

    let mut summary = ScanSummary::new();
    let mut failures = 0usize;

    for path in video_files(root, &config.extensions) {
        match probe.probe_duration(&path) {
            Ok(duration_secs) => {
                let relative_path = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
                let video = ProbedVideo {
                    path,
                    relative_path,
                    duration_secs,
                };
                summary.record(video.duration_secs);
                reporter.video_probed(&video)?;
            }
            Err(err) => {
                failures += 1;
                log::error!("Error processing {}: {err}", path.display());
            }
        }
    }

    if failures > 0 {
        log::warn!("{failures} file(s) could not be probed and were left out of the totals");
    }

    reporter.scan_complete(&summary)?;
    Ok(ScanOutcome::Completed(summary))
}
