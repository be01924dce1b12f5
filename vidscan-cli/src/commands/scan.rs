//! Implementation of the scan run.
//!
//! Builds the core configuration from the parsed arguments, checks that
//! ffprobe can be launched and hands off to `vidscan_core::scan_videos`,
//! writing the report to stdout.

use crate::cli::Cli;
use crate::config::scan_config_from_args;
use crate::error::CliResult;

use vidscan_core::{FfprobeExecutor, ScanOutcome, TextReporter, check_dependency, scan_videos};

use log::{debug, info, warn};
use std::io;
use std::time::Instant;

/// Runs a scan with the given arguments. The report goes to stdout.
pub fn run_scan(args: &Cli) -> CliResult<ScanOutcome> {
    let config = scan_config_from_args(args);
    config.validate()?;

    debug!(
        "Scan settings: root={}, extensions=[{}], timeout={}s, ffprobe={}",
        config.root.display(),
        config.extensions.join(", "),
        config.probe_timeout.as_secs(),
        config.ffprobe_bin.display()
    );

    if let Err(e) = check_dependency(&config.ffprobe_bin) {
        warn!("{e}; every probe will fail until ffprobe is available");
    }

    let probe = FfprobeExecutor::from_config(&config);
    let stdout = io::stdout();
    let mut reporter = TextReporter::new(stdout.lock());

    let start = Instant::now();
    let outcome = scan_videos(&config, &probe, &mut reporter)?;

    if let ScanOutcome::Completed(summary) = &outcome {
        info!(
            "Probed {} video(s) in {:.1}s",
            summary.video_count(),
            start.elapsed().as_secs_f64()
        );
    }

    Ok(outcome)
}
